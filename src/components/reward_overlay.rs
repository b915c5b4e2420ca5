use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::game::rewards::RewardDefinition;

#[derive(Properties, PartialEq)]
pub struct RewardOverlayProps {
    /// The current draw, in dealt order. The overlay never reorders it.
    pub drawn: Vec<&'static RewardDefinition>,
    pub selected_id: Option<&'static str>,
    pub revealed: bool,
    pub on_card: Callback<&'static str>,
    pub on_dismiss: Callback<MouseEvent>,
}

/// Full-screen card-pick overlay. Renders a snapshot of the session and
/// reports gestures upward; it holds no game state of its own. Picking is
/// guarded here as well as in the session so that a second tap can never
/// slip through before the first one is rendered.
#[function_component(RewardOverlay)]
pub fn reward_overlay(props: &RewardOverlayProps) -> Html {
    let show_continue = use_state(|| false);

    {
        let show_continue = show_continue.clone();
        use_effect_with_deps(
            move |revealed| {
                if *revealed {
                    // Cosmetic delay before the continue button fades in, after
                    // the flip has mostly played out.
                    let show_continue = show_continue.clone();
                    let timeout = Timeout::new(500, move || show_continue.set(true));
                    timeout.forget();
                } else {
                    show_continue.set(false);
                }
                || ()
            },
            props.revealed,
        );
    }

    let overlay_class = classes!(
        "buff-overlay",
        props.revealed.then_some("revealed")
    );

    html! {
        <div class={overlay_class}>
            <h2 class="buff-title">
                { if props.revealed { "아이템 장착 완료!" } else { "아이템 보상을 선택하세요" } }
            </h2>

            <div class="buff-cards">
                { for props.drawn.iter().enumerate().map(|(index, def)| {
                    let is_selected = props.selected_id == Some(def.id);
                    let dimmed = props.revealed && !is_selected;
                    let card_class = classes!(
                        "buff-card",
                        is_selected.then_some("flipped"),
                        dimmed.then_some("dimmed")
                    );
                    let onclick = {
                        let on_card = props.on_card.clone();
                        let revealed = props.revealed;
                        let id = def.id;
                        Callback::from(move |_: MouseEvent| {
                            if revealed {
                                return;
                            }
                            on_card.emit(id);
                        })
                    };
                    html! {
                        <div
                            key={def.id}
                            class={card_class}
                            style={format!("animation-delay: {}ms;", index * 100)}
                            {onclick}
                        >
                            <div class="buff-card-inner">
                                <div class="buff-card-face buff-card-down">
                                    <div class="buff-card-weave"></div>
                                    <div class="buff-card-logo">{"UZU"}</div>
                                    <div class="buff-card-caption">{"UZUPLAY SYSTEM"}</div>
                                </div>
                                <div
                                    class="buff-card-face buff-card-up"
                                    style={format!("border-color: {};", def.accent_color)}
                                >
                                    <div
                                        class="buff-card-art"
                                        style={format!(
                                            "background: radial-gradient(circle at center, {}44, transparent 70%);",
                                            def.accent_color
                                        )}
                                    >
                                        <span class="buff-card-icon">{def.icon}</span>
                                    </div>
                                    <div class="buff-card-meta">
                                        <h3 style={format!("color: {};", def.accent_color)}>
                                            {def.display_name}
                                        </h3>
                                        <p class="buff-card-tags">
                                            {format!("{} {} · {}", def.rarity.label(), def.category.label(), def.stat_summary)}
                                        </p>
                                        <p class="buff-card-desc">{format!("\"{}\"", def.description)}</p>
                                        <p class="buff-card-flavor">{def.flavor_text}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>

            {
                if props.revealed {
                    html! {
                        <button
                            class={classes!("buff-continue", (*show_continue).then_some("visible"))}
                            onclick={props.on_dismiss.clone()}
                        >
                            {"모험 계속하기"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .buff-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(12px);
                        animation: overlayIn 0.3s ease forwards;
                    }

                    @keyframes overlayIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .buff-title {
                        margin: 0;
                        color: #fff;
                        font-size: 2.2rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        text-align: center;
                        animation: titleIn 0.5s ease forwards;
                    }

                    @keyframes titleIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .buff-cards {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2rem;
                        align-items: center;
                        justify-content: center;
                        perspective: 1000px;
                    }

                    .buff-card {
                        position: relative;
                        width: 16rem;
                        height: 24rem;
                        cursor: pointer;
                        opacity: 0;
                        animation: cardIn 0.6s ease forwards;
                        transition: transform 0.3s ease, opacity 0.4s ease;
                    }

                    .buff-card:hover {
                        transform: scale(1.05);
                    }

                    .buff-card:active {
                        transform: scale(0.95);
                    }

                    @keyframes cardIn {
                        from { opacity: 0; transform: translateY(50px) rotateX(30deg); }
                        to { opacity: 1; transform: translateY(0) rotateX(0); }
                    }

                    .buff-overlay.revealed .buff-card {
                        pointer-events: none;
                    }

                    .buff-card.dimmed {
                        opacity: 0.3;
                    }

                    .buff-card.flipped {
                        transform: scale(1.1);
                    }

                    .buff-card-inner {
                        position: absolute;
                        inset: 0;
                        transform-style: preserve-3d;
                        transition: transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                    }

                    .buff-card.flipped .buff-card-inner {
                        transform: rotateY(180deg);
                    }

                    .buff-card-face {
                        position: absolute;
                        inset: 0;
                        backface-visibility: hidden;
                        -webkit-backface-visibility: hidden;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #1A1A1D;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }

                    .buff-card-down {
                        border: 2px solid rgba(255, 255, 255, 0.1);
                        transition: border-color 0.3s ease;
                    }

                    .buff-card:hover .buff-card-down {
                        border-color: rgba(255, 255, 255, 0.3);
                    }

                    .buff-card-weave {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background-image:
                            linear-gradient(45deg, #111 25%, transparent 25%, transparent 75%, #111 75%, #111),
                            linear-gradient(45deg, #111 25%, transparent 25%, transparent 75%, #111 75%, #111);
                        background-size: 20px 20px;
                    }

                    .buff-card-logo {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3rem;
                        font-weight: 900;
                        color: rgba(255, 255, 255, 0.15);
                        letter-spacing: 0.2em;
                    }

                    .buff-card-caption {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 0;
                        right: 0;
                        text-align: center;
                        font-family: monospace;
                        font-size: 0.7rem;
                        color: rgba(255, 255, 255, 0.3);
                        letter-spacing: 0.2em;
                    }

                    .buff-card-up {
                        border: 2px solid;
                        transform: rotateY(180deg);
                        display: flex;
                        flex-direction: column;
                    }

                    .buff-card-art {
                        height: 60%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background-color: #0F0F11;
                    }

                    .buff-card-icon {
                        font-size: 5rem;
                    }

                    .buff-card-meta {
                        flex: 1;
                        padding: 1rem;
                        background: #151518;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        flex-direction: column;
                        gap: 0.3rem;
                    }

                    .buff-card-meta h3 {
                        margin: 0;
                        font-size: 1.1rem;
                        line-height: 1.1;
                    }

                    .buff-card-tags {
                        margin: 0;
                        font-size: 0.65rem;
                        color: rgba(255, 255, 255, 0.5);
                        letter-spacing: 0.05em;
                    }

                    .buff-card-desc {
                        margin: 0;
                        font-size: 0.8rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.5;
                    }

                    .buff-card-flavor {
                        margin: 0;
                        font-size: 0.7rem;
                        font-style: italic;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .buff-continue {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                        pointer-events: none;
                        background: #fff;
                        color: #000;
                        border: none;
                        border-radius: 9999px;
                        padding: 1.2rem 3rem;
                        font-size: 1.2rem;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
                    }

                    .buff-continue.visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }

                    .buff-continue:hover {
                        background: rgba(255, 255, 255, 0.9);
                    }

                    @media (max-width: 768px) {
                        .buff-title {
                            font-size: 1.5rem;
                        }

                        .buff-card {
                            width: 13rem;
                            height: 19rem;
                        }

                        .buff-cards {
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
