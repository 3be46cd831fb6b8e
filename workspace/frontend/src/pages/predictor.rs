use traffy::{ComboboxEvent, DatePreset};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::error::ErrorAlert;
use crate::common::loading::Loading;
use crate::components::combobox::SubdistrictCombobox;
use crate::components::date_picker::DatePicker;
use crate::components::prediction::PredictionReport;
use crate::hooks::{use_predictor_session, SessionAction};
use crate::Route;

#[function_component(Predictor)]
pub fn predictor() -> Html {
    let session = use_predictor_session();

    let on_combobox = {
        let dispatcher = session.dispatcher();
        Callback::from(move |event: ComboboxEvent| dispatcher.dispatch(SessionAction::Combobox(event)))
    };
    let on_date = {
        let dispatcher = session.dispatcher();
        Callback::from(move |date: String| dispatcher.dispatch(SessionAction::SetDate(date)))
    };
    let on_preset = {
        let dispatcher = session.dispatcher();
        Callback::from(move |preset: DatePreset| dispatcher.dispatch(SessionAction::Preset(preset)))
    };
    let on_submit = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_| {
            log::debug!("User requested a prediction");
            dispatcher.dispatch(SessionAction::Submit);
        })
    };
    let on_reset = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(SessionAction::Reset))
    };

    let onclick = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <>
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-extrabold tracking-tight sm:text-5xl">{"Bangkok Traffy Predictor"}</h1>
                <p class="max-w-2xl mx-auto text-lg opacity-70">
                    {"Forecasting of civic complaints for Bangkok subdistricts."}
                </p>
                <Link<Route> to={Route::Visualizations} classes="btn btn-outline btn-primary">
                    <i class="fas fa-chart-bar"></i>
                    {" View Data Visualizations"}
                </Link<Route>>
            </div>

            <div class="card bg-base-100 shadow-xl overflow-visible z-10">
                <div class="card-body gap-6">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <SubdistrictCombobox
                            catalog={session.catalog().clone()}
                            state={session.combobox().clone()}
                            on_event={on_combobox}
                        />
                        <DatePicker
                            value={session.date_input().to_string()}
                            on_change={on_date}
                            on_preset={on_preset}
                        />
                    </div>

                    if let Some(message) = session.error() {
                        <ErrorAlert message={message.to_string()} on_retry={Some(on_submit.clone())} />
                    }

                    <button
                        type="button"
                        class="btn btn-primary btn-block btn-lg"
                        disabled={!session.can_submit()}
                        {onclick}
                    >
                        if session.is_loading() {
                            <span class="loading loading-spinner"></span>
                            {"Running model..."}
                        } else {
                            <i class="fas fa-search"></i>
                            {"Analyze Location"}
                        }
                    </button>
                </div>
            </div>

            if session.is_loading() {
                <Loading text={Some("Waiting for the predictor".to_string())} />
            }

            if let Some(result) = session.result() {
                <PredictionReport result={result.clone()} {on_reset} />
            }
        </>
    }
}
