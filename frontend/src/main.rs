use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hero;
mod components {
    pub mod back_to_top;
    pub mod navigation;
    pub mod service_cards;
    pub mod video_modal;
}
mod pages {
    pub mod alex;
    pub mod landing;
}

use components::{back_to_top::BackToTop, navigation::Navigation};
use hero::HeroHandle;
use pages::{alex::Alex, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/alex")]
    Alex,
    #[at("/alex.html")]
    AlexHtml,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Alex | Route::AlexHtml => {
            info!("Rendering Alex page");
            html! { <Alex /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One carousel handle for the whole session. Pages that own a hero mount
    // a controller into it; everything else just reads it.
    let hero = use_state(HeroHandle::default);

    html! {
        <ContextProvider<HeroHandle> context={(*hero).clone()}>
            <BrowserRouter>
                <Navigation />
                <Switch<Route> render={switch} />
                <BackToTop />
            </BrowserRouter>
        </ContextProvider<HeroHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
