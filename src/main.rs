use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod notice;
mod state {
    pub mod form;
    pub mod view;
}
mod components {
    pub mod action;
    pub mod cards;
    pub mod contact;
    pub mod education;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod stats;
}
mod pages {
    pub mod layout;
    pub mod scroll;
    pub mod tabs;
}

use pages::{scroll::ScrollPage, tabs::TabsPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tabs")]
    Tabs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering scroll layout");
            html! { <ScrollPage /> }
        }
        Route::Tabs => {
            info!("Rendering tab layout");
            html! { <TabsPage /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
