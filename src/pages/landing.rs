use yew::prelude::*;

use crate::components::confetti;
use crate::components::reward_overlay::RewardOverlay;
use crate::game::session::RevealSession;
use crate::theme::Theme;

// (number, title, english title, description, icon)
const METHOD_STEPS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "01",
        "아주 작은 시작",
        "Baby Steps",
        "게임 튜토리얼처럼, 실패할 수 없을 만큼 쉽고 가볍게 시작합니다.",
        "🌱",
    ),
    (
        "02",
        "즉각적인 피드백",
        "Instant Feedback",
        "몬스터를 잡으면 바로 경험치가 오르듯, 내 행동에 확실한 보상을 줍니다.",
        "⚡",
    ),
    (
        "03",
        "몰입의 즐거움",
        "Flow State",
        "내 실력에 딱 맞는 난이도로 시간 가는 줄 모르는 몰입감을 선사합니다.",
        "🔥",
    ),
];

// (name, tagline, status, description, accent color)
const PROJECTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Project O",
        "Productivity RPG",
        "Prototyping",
        "오늘의 할 일, 지루한 숙제가 아니라 멋진 모험이 됩니다. 완료할 때마다 성장하는 나의 캐릭터.",
        "#2E5CFF",
    ),
    (
        "Project X",
        "Social Habit",
        "Alpha Test",
        "혼자 하면 외롭지만, 팀을 맺으면 모험이 됩니다. 친구와 함께해서 그만두지 않게.",
        "#FF9F1C",
    ),
];

const PRINCIPLES: &[(&str, &str)] = &[
    (
        "No Dark Patterns",
        "당신을 속이는 디자인은 없습니다. 우리는 당신의 주의력을 훔치지 않습니다.",
    ),
    (
        "Privacy First",
        "당신의 데이터는 온전히 당신의 것입니다. 내가 나의 성장을 소유합니다.",
    ),
    (
        "Science, not Magic",
        "막연한 동기부여가 아닌, 검증된 심리학 이론으로 성장을 설계합니다.",
    ),
];

fn default_celebration() -> Callback<Vec<String>> {
    Callback::from(|colors: Vec<String>| confetti::burst(&colors))
}

/// Smooth-scrolls to a section by id. Missing target means the page simply
/// stays where it is.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(section) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub theme: Theme,
    /// One-shot celebratory effect, fed the picked reward's color palette.
    /// Injected so the page (and the session underneath it) never depends on
    /// a particular effects implementation.
    #[prop_or_else(default_celebration)]
    pub celebrate: Callback<Vec<String>>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let session = use_state(RevealSession::idle);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_start = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.start(&mut rand::thread_rng());
            session.set(next);
        })
    };

    let on_card = {
        let session = session.clone();
        let celebrate = props.celebrate.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*session).clone();
            if let Some(picked) = next.select(id) {
                celebrate.emit(vec![picked.accent_color.to_string(), "#ffffff".to_string()]);
            }
            if next != *session {
                session.set(next);
            }
        })
    };

    let on_dismiss = {
        let session = session.clone();
        let target = props.theme.scroll_target;
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.dismiss();
            session.set(next);
            scroll_to_section(target);
        })
    };

    let theme = &props.theme;
    let root_style = format!(
        "--primary: {}; --warm: {}; --bg: {}; --bg-deep: {};",
        theme.primary, theme.warm, theme.background, theme.background_deep
    );

    html! {
        <div class="landing" style={root_style}>
            <Header />
            <HeroSection theme={theme.clone()} on_start={on_start} />

            {
                if session.is_active() {
                    html! {
                        <RewardOverlay
                            drawn={session.drawn().to_vec()}
                            selected_id={session.selected_id()}
                            revealed={session.is_revealed()}
                            on_card={on_card}
                            on_dismiss={on_dismiss}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <ProblemSection />
            <MethodologySection />
            <ProjectsSection />
            <ManifestoSection />
            <Footer />

            <style>
                {r#"
                    .landing {
                        min-height: 100vh;
                        background: var(--bg);
                        color: #F5F5F7;
                        overflow-x: hidden;
                        position: relative;
                    }

                    .landing section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 5rem 1.5rem;
                        position: relative;
                    }

                    .landing .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        position: relative;
                        z-index: 1;
                        width: 100%;
                    }

                    .landing h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        line-height: 1.2;
                        margin: 0 0 1rem 0;
                    }

                    .landing-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        backdrop-filter: blur(12px);
                        background: color-mix(in srgb, var(--bg) 80%, transparent);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .landing-header nav {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .landing-logo {
                        font-size: 1.3rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        color: #fff;
                    }

                    .landing-logo span {
                        color: var(--primary);
                    }

                    .landing-nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .landing-nav-links a {
                        font-size: 0.9rem;
                        color: #86868B;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .landing-nav-links a:hover {
                        color: #F5F5F7;
                    }

                    .contact-button {
                        background: transparent;
                        border: 1px solid var(--primary);
                        color: var(--primary);
                        border-radius: 0.5rem;
                        padding: 0.5rem 1.2rem;
                        font-size: 0.9rem;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .contact-button:hover {
                        background: var(--primary);
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .landing-nav-links {
                            display: none;
                        }
                    }

                    .hero {
                        flex-direction: column;
                        justify-content: center;
                        overflow: hidden;
                        padding-top: 5rem;
                        text-align: center;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        background: linear-gradient(to bottom, var(--bg), var(--bg-deep));
                    }

                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image:
                            linear-gradient(var(--primary) 1px, transparent 1px),
                            linear-gradient(90deg, var(--primary) 1px, transparent 1px);
                        background-size: 40px 40px;
                        mask-image: radial-gradient(circle at center, black 40%, transparent 100%);
                        -webkit-mask-image: radial-gradient(circle at center, black 40%, transparent 100%);
                    }

                    .hero-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 800px;
                        height: 800px;
                        border-radius: 50%;
                        background: color-mix(in srgb, var(--primary) 10%, transparent);
                        filter: blur(120px);
                        animation: heroPulse 4s ease-in-out infinite;
                    }

                    @keyframes heroPulse {
                        0%, 100% { opacity: 0.6; }
                        50% { opacity: 1; }
                    }

                    .hero-badge {
                        display: inline-block;
                        font-family: monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        color: var(--primary);
                        border: 1px solid color-mix(in srgb, var(--primary) 25%, transparent);
                        border-radius: 9999px;
                        padding: 0.35rem 1rem;
                        margin-bottom: 1.5rem;
                        animation: riseIn 0.8s ease backwards;
                    }

                    .hero h1 span {
                        display: block;
                    }

                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 900;
                        letter-spacing: -0.03em;
                        line-height: 1.05;
                        margin: 0 0 1.5rem 0;
                        animation: riseIn 0.8s ease 0.2s backwards;
                    }

                    .hero h1 .headline-accent {
                        display: block;
                        background: linear-gradient(to right, var(--primary), var(--warm));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        filter: drop-shadow(0 0 20px color-mix(in srgb, var(--primary) 40%, transparent));
                    }

                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .hero-panel {
                        position: relative;
                        z-index: 1;
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(24px);
                        animation: riseIn 0.8s ease 0.5s backwards;
                    }

                    .hero-panel p {
                        font-size: 1.4rem;
                        font-weight: 300;
                        margin: 0 0 2rem 0;
                    }

                    .hero-panel b {
                        color: var(--primary);
                    }

                    .hero-cta {
                        background: var(--primary);
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        padding: 1.5rem 3rem;
                        font-size: 1.3rem;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 0 30px color-mix(in srgb, var(--primary) 30%, transparent);
                        transition: all 0.5s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 50px color-mix(in srgb, var(--primary) 50%, transparent);
                    }

                    .hero-cta:active {
                        transform: scale(0.95);
                    }

                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(134, 134, 139, 0.5);
                        animation: riseIn 1s ease 2s backwards;
                    }

                    .scroll-hint span {
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .scroll-hint-line {
                        width: 1px;
                        height: 3rem;
                        background: linear-gradient(to bottom, rgba(134, 134, 139, 0.5), transparent);
                    }

                    .problem-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (max-width: 768px) {
                        .problem-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .problem-figure {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                    }

                    .problem-number {
                        font-size: clamp(8rem, 18vw, 14rem);
                        font-weight: 700;
                        line-height: 1;
                        background: linear-gradient(to bottom right, var(--primary), #86868B);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        position: relative;
                        z-index: 1;
                    }

                    .problem-shadow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        font-size: clamp(10rem, 24vw, 20rem);
                        font-weight: 900;
                        color: rgba(255, 255, 255, 0.05);
                        user-select: none;
                        z-index: 0;
                    }

                    .glass-panel {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        backdrop-filter: blur(12px);
                    }

                    .problem-copy .underline-bar {
                        width: 5rem;
                        height: 4px;
                        background: var(--primary);
                        border-radius: 9999px;
                        margin-bottom: 2rem;
                    }

                    .problem-copy .lead {
                        font-size: 1.5rem;
                        font-weight: 600;
                        line-height: 1.6;
                        margin: 0 0 1.5rem 0;
                    }

                    .problem-copy .lead .primary {
                        color: var(--primary);
                    }

                    .problem-copy .lead .warm {
                        color: var(--warm);
                        text-decoration: underline wavy;
                        text-underline-offset: 4px;
                    }

                    .problem-copy .sub {
                        font-size: 1.1rem;
                        color: #86868B;
                        margin: 0;
                    }

                    .section-kicker {
                        font-family: monospace;
                        font-size: 0.85rem;
                        color: var(--primary);
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        margin: 0 0 1rem 0;
                    }

                    .section-intro {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .section-intro .warm {
                        color: var(--warm);
                    }

                    .section-intro p.sub {
                        font-size: 1.2rem;
                        color: #86868B;
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 768px) {
                        .steps-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .step-card {
                        position: relative;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }

                    .step-card:hover {
                        transform: translateY(-8px);
                        border-color: color-mix(in srgb, var(--primary) 50%, transparent);
                    }

                    .step-card-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 2rem;
                    }

                    .step-icon {
                        font-size: 3rem;
                    }

                    .step-number {
                        font-family: monospace;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.3);
                        padding: 0.2rem 0.8rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                    }

                    .step-card h3 {
                        font-size: 1.4rem;
                        margin: 0 0 0.3rem 0;
                    }

                    .step-eng {
                        font-family: monospace;
                        font-size: 0.85rem;
                        color: var(--primary);
                        margin: 0 0 1rem 0;
                    }

                    .step-card p.desc {
                        color: #86868B;
                        line-height: 1.6;
                        margin: 0;
                        transition: color 0.3s ease;
                    }

                    .step-card:hover p.desc {
                        color: #F5F5F7;
                    }

                    .projects-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }

                    @media (max-width: 768px) {
                        .projects-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .console-card {
                        background: #1A1A1D;
                        border: 4px solid #2A2A2E;
                        border-radius: 2rem;
                        padding: 2rem;
                        position: relative;
                        overflow: hidden;
                        transition: border-color 0.5s ease;
                    }

                    .console-card:hover {
                        border-color: color-mix(in srgb, var(--primary) 50%, transparent);
                    }

                    .console-led {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: rgba(239, 68, 68, 0.5);
                        animation: heroPulse 2s ease-in-out infinite;
                    }

                    .console-screen {
                        background: var(--bg);
                        border: 12px solid #252529;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        margin-bottom: 2rem;
                        height: 18rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        box-shadow: inset 0 0 30px rgba(0, 0, 0, 0.6);
                    }

                    .console-scanlines {
                        position: absolute;
                        inset: 0;
                        z-index: 2;
                        pointer-events: none;
                        background:
                            linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%),
                            linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06));
                        background-size: 100% 4px, 3px 100%;
                    }

                    .console-tint {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        opacity: 0.2;
                        pointer-events: none;
                    }

                    .project-status {
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: var(--primary);
                        background: color-mix(in srgb, var(--primary) 10%, transparent);
                        border: 1px solid color-mix(in srgb, var(--primary) 20%, transparent);
                        border-radius: 9999px;
                        padding: 0.2rem 0.8rem;
                        margin-bottom: 1rem;
                        z-index: 3;
                    }

                    .console-screen h3 {
                        font-size: 2rem;
                        margin: 0 0 0.3rem 0;
                        color: #fff;
                        z-index: 3;
                    }

                    .console-screen .tagline {
                        font-size: 1.1rem;
                        color: #86868B;
                        margin: 0;
                        z-index: 3;
                    }

                    .console-card .project-desc {
                        font-size: 1.1rem;
                        font-weight: 700;
                        line-height: 1.6;
                        margin: 0;
                        max-width: 24rem;
                    }

                    .manifesto {
                        background: linear-gradient(to top, var(--bg), var(--bg-deep));
                    }

                    .manifesto .container {
                        max-width: 56rem;
                    }

                    .manifesto-intro {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .manifesto-intro p {
                        font-size: 1.2rem;
                        color: #86868B;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .manifesto-intro p .strong {
                        color: #fff;
                        font-weight: 700;
                    }

                    .principle {
                        border-left: 4px solid color-mix(in srgb, var(--primary) 30%, transparent);
                        padding: 1rem 0 1rem 2rem;
                        margin-bottom: 3rem;
                        transition: border-color 0.3s ease;
                    }

                    .principle:hover {
                        border-left-color: var(--primary);
                    }

                    .principle h3 {
                        font-size: 1.8rem;
                        margin: 0 0 0.8rem 0;
                    }

                    .principle p {
                        font-size: 1.1rem;
                        color: #86868B;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .landing-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 4rem 1.5rem;
                        background: var(--bg);
                        position: relative;
                        overflow: hidden;
                    }

                    .footer-beam {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 8rem;
                        height: 4px;
                        background: var(--primary);
                        filter: blur(4px);
                    }

                    .footer-cta {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .footer-cta p {
                        color: #86868B;
                        font-size: 1.1rem;
                        margin: 0 0 2rem 0;
                    }

                    .footer-cta h2 .primary {
                        color: var(--primary);
                    }

                    .footer-cta button {
                        background: var(--primary);
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        padding: 1.2rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 700;
                        cursor: pointer;
                    }

                    .footer-bottom {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .footer-links {
                        display: flex;
                        gap: 2rem;
                        font-family: monospace;
                        font-size: 0.9rem;
                    }

                    .footer-links a {
                        color: #86868B;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover {
                        color: var(--primary);
                    }

                    .footer-coin {
                        text-align: center;
                        font-family: monospace;
                        font-size: 0.85rem;
                        color: rgba(134, 134, 139, 0.5);
                        margin-top: 3rem;
                    }

                    @media (max-width: 768px) {
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="landing-header">
            <nav>
                <div class="landing-logo">{"UZU"}<span>{"play"}</span></div>
                <div class="landing-nav-links">
                    <a href="#manifesto">{"Manifesto"}</a>
                    <a href="#projects">{"Projects"}</a>
                    <a href="#team">{"Team"}</a>
                    <button class="contact-button">{"Contact"}</button>
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    theme: Theme,
    on_start: Callback<MouseEvent>,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-grid"></div>
                <div class="hero-glow"></div>
            </div>

            <div class="container">
                <span class="hero-badge">{format!("{} BUILD", props.theme.name)}</span>
                <h1>
                    <span>{props.theme.headline_top}</span>
                    <span class="headline-accent">{props.theme.headline_accent}</span>
                </h1>

                <div class="hero-panel">
                    <p>
                        {"UZUplay는 당신의 일상을"}<br />
                        {" 재미있는 "}<b>{"게임"}</b>{"으로 바꿔드립니다."}
                    </p>
                    <button class="hero-cta" onclick={props.on_start.clone()}>
                        {props.theme.cta_label}
                    </button>
                </div>
            </div>

            <div class="scroll-hint">
                <span>{"Scroll to Play"}</span>
                <div class="scroll-hint-line"></div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section id="problem-section">
            <div class="container">
                <div class="problem-grid">
                    <div class="problem-figure">
                        <div class="problem-shadow">{"FAIL"}</div>
                        <div class="problem-number">{"92%"}</div>
                    </div>
                    <div class="glass-panel problem-copy">
                        <h2>
                            {"92%의 새해 목표가 실패하는 이유는"}<br />
                            {"의지가 약해서가 아닙니다."}
                        </h2>
                        <div class="underline-bar"></div>
                        <p class="lead">
                            {"우리의 뇌는 원래 "}<span class="primary">{"'재미없는 것'"}</span>{"을 싫어합니다."}<br />
                            {"고장난 것은 당신이 아니라, "}<span class="warm">{"보상 시스템"}</span>{"입니다."}
                        </p>
                        <p class="sub">
                            {"인내심만 강요하는 공부는 이제 그만하세요."}<br />
                            {"도파민이 나오는 공부를 시작해야 합니다."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(MethodologySection)]
fn methodology_section() -> Html {
    html! {
        <section>
            <div class="container">
                <div class="section-intro">
                    <p class="section-kicker">{"The Science of Fun"}</p>
                    <h2>{"심리학이 증명한"}<br /><span class="warm">{"성장의 지름길"}</span></h2>
                    <p class="sub">
                        {"자기결정성 이론(Self-Determination Theory)을 바탕으로,"}<br />
                        {"내가 스스로 선택하고 즐기는 환경을 설계합니다."}
                    </p>
                </div>

                <div class="steps-grid">
                    { for METHOD_STEPS.iter().map(|&(number, title, eng, desc, icon)| html! {
                        <div key={number} class="glass-panel step-card">
                            <div class="step-card-head">
                                <div class="step-icon">{icon}</div>
                                <div class="step-number">{number}</div>
                            </div>
                            <h3>{title}</h3>
                            <p class="step-eng">{eng}</p>
                            <p class="desc">{desc}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    html! {
        <section id="projects">
            <div class="container">
                <div style="margin-bottom: 5rem;">
                    <h2>{"Our Projects"}</h2>
                    <p style="font-size: 1.2rem; color: #86868B; margin: 0;">
                        {"지루한 일상을 모험으로 바꾸는 도구들."}
                    </p>
                </div>

                <div class="projects-grid">
                    { for PROJECTS.iter().map(|&(name, tagline, status, desc, color)| html! {
                        <div key={name} class="console-card">
                            <div class="console-led"></div>
                            <div class="console-screen">
                                <div class="console-scanlines"></div>
                                <div
                                    class="console-tint"
                                    style={format!(
                                        "background-color: {}; background-image: radial-gradient(circle at center, transparent 0%, black 100%);",
                                        color
                                    )}
                                ></div>
                                <span class="project-status">{status}</span>
                                <h3>{name}</h3>
                                <p class="tagline">{tagline}</p>
                            </div>
                            <p class="project-desc">{desc}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(ManifestoSection)]
fn manifesto_section() -> Html {
    html! {
        <section id="manifesto" class="manifesto">
            <div class="container">
                <div class="manifesto-intro">
                    <h2>{"Manifesto"}</h2>
                    <p>
                        {"우리는 당신을 중독시키지 않습니다."}<br />
                        {"당신을 "}<span class="strong">{"성장"}</span>{"시킵니다."}
                    </p>
                </div>

                { for PRINCIPLES.iter().map(|&(title, desc)| html! {
                    <div key={title} class="principle">
                        <h3>{title}</h3>
                        <p>{desc}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="landing-footer">
            <div class="footer-beam"></div>
            <div class="footer-cta">
                <h2>
                    {"당신의 인생이라는 게임, "}<br />
                    {"이제 "}<span class="primary">{"플레이어"}</span>{"가 되어보세요."}
                </h2>
                <p>{"가장 즐거운 몰입이 당신을 기다립니다."}</p>
                <button>{"베타 테스터 신청하기"}</button>
            </div>

            <div class="footer-bottom">
                <div class="landing-logo">{"UZU"}<span>{"play"}</span></div>
                <div class="footer-links">
                    <a href="#">{"[ Twitter ]"}</a>
                    <a href="#">{"[ LinkedIn ]"}</a>
                    <a href="#">{"[ GitHub ]"}</a>
                </div>
            </div>

            <div class="footer-coin">{"PRESS START TO CONTINUE © 2025 UZUplay."}</div>
        </footer>
    }
}
