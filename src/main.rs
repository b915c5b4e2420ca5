use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod theme;

mod game {
    pub mod rewards;
    pub mod session;
}

mod components {
    pub mod confetti;
    pub mod reward_overlay;
}

mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/arcade")]
    Arcade,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering midnight landing");
            html! { <Landing theme={Theme::midnight()} /> }
        }
        Route::Arcade => {
            info!("Rendering arcade landing");
            html! { <Landing theme={Theme::arcade()} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
