use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod submission;
mod components {
    pub mod contact_form;
    pub mod icons;
    pub mod reveal;
    pub mod turnstile;
}
mod pages {
    pub mod articles;
    pub mod home;
}

use pages::{
    articles::{CybersecurityGuide, PcOptimization, SlowItSupport, UnresponsiveSupport},
    home::Home,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/articulos/soporte-it-lento")]
    SlowItSupport,
    #[at("/articulos/soporte-ti-no-responde")]
    UnresponsiveSupport,
    #[at("/articulos/guia-ciberseguridad-pymes")]
    CybersecurityGuide,
    #[at("/articulos/optimizacion-pc-oficina")]
    PcOptimization,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::SlowItSupport => {
            info!("Rendering article: slow IT support");
            html! { <SlowItSupport /> }
        }
        Route::UnresponsiveSupport => {
            info!("Rendering article: unresponsive support");
            html! { <UnresponsiveSupport /> }
        }
        Route::CybersecurityGuide => {
            info!("Rendering article: cybersecurity guide");
            html! { <CybersecurityGuide /> }
        }
        Route::PcOptimization => {
            info!("Rendering article: PC optimization");
            html! { <PcOptimization /> }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
