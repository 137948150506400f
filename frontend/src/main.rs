use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod theme;
mod components {
    pub mod visibility;
    pub mod reveal;
    pub mod counter;
    pub mod countdown;
    pub mod category_filter;
    pub mod lightbox;
    pub mod animated_button;
}
mod sections {
    pub mod navbar;
    pub mod hero;
    pub mod about;
    pub mod logo_showcase;
    pub mod video_showcase;
    pub mod gallery;
    pub mod timeline;
    pub mod team;
    pub mod cta;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};
use theme::{Theme, ThemeStyles};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, theme: Theme) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home theme={theme} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let theme = Theme::default();

    html! {
        <BrowserRouter>
            <ThemeStyles theme={theme} />
            <Switch<Route> render={move |routes: Route| switch(routes, theme)} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", content::CHAPTER_NAME);
    yew::Renderer::<App>::new().render();
}
