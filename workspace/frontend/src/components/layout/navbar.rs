use yew::prelude::*;
use yew_router::prelude::*;
use traffy::RequestState;
use crate::hooks::use_api_health;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(ApiStatusBadge)]
fn api_status_badge() -> Html {
    let health = use_api_health();

    let (class, label) = match &*health {
        RequestState::Idle | RequestState::InFlight => ("badge-ghost", "API: checking"),
        RequestState::Settled(Ok(status)) if status.is_healthy() => ("badge-success", "API: online"),
        RequestState::Settled(Ok(_)) => ("badge-warning", "API: degraded"),
        RequestState::Settled(Err(_)) => ("badge-error", "API: offline"),
    };

    html! {
        <span class={classes!("badge", "badge-sm", class)}>{label}</span>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                    <i class="fas fa-city"></i>
                </div>
                <div class="flex flex-col">
                    <span class="text-xl font-bold tracking-tight">{"Bangkok Traffy Predictor"}</span>
                    <span class="text-xs opacity-60" id="page-title">{ &props.title }</span>
                </div>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Home}><i class="fas fa-search"></i>{" Predictor"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Visualizations}><i class="fas fa-chart-bar"></i>{" Visualizations"}</Link<Route>></li>
                </ul>
                <ApiStatusBadge />
            </div>
        </div>
    }
}
