use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::layout::layout::Layout;
use pages::predictor::Predictor;
use pages::visualizations::Visualizations;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/visualizations")]
    Visualizations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Predictor page");
            html! { <Layout title="Predictor"><Predictor /></Layout> }
        }
        Route::Visualizations => {
            log::trace!("Rendering Visualizations page");
            html! { <Layout title="Data Visualizations"><Visualizations /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Traffy Predictor Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Request timeout: {} ms", settings.request_timeout_ms);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
