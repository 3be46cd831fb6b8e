use std::ops::Deref;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use traffy::api::HealthResponse;
use traffy::{
    ComboboxEvent, DatePreset, LocationCatalog, PendingRequest, PredictError, PredictResponse,
    PredictorSession, RequestState,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;

use crate::api_client::predictor;

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub enum SessionAction {
    Combobox(ComboboxEvent),
    SetDate(String),
    Preset(DatePreset),
    Submit,
    Settle {
        ticket: u64,
        outcome: Result<PredictResponse, PredictError>,
    },
    CatalogLoaded(LocationCatalog),
    Reset,
}

/// Reducer state for the predictor screen.
#[derive(Clone, PartialEq)]
pub struct SessionModel(PredictorSession);

impl Default for SessionModel {
    fn default() -> Self {
        Self(PredictorSession::new(today()))
    }
}

impl Deref for SessionModel {
    type Target = PredictorSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for SessionModel {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.0.clone();
        match action {
            SessionAction::Combobox(event) => {
                session.apply(event);
            }
            SessionAction::SetDate(date) => session.set_date(date),
            SessionAction::Preset(preset) => session.apply_preset(preset, today()),
            // The effect in `use_predictor_session` picks the request up from `outbound()`
            SessionAction::Submit => {
                session.submit();
            }
            SessionAction::Settle { ticket, outcome } => session.settle(ticket, outcome),
            SessionAction::CatalogLoaded(catalog) => session.load_catalog(catalog),
            SessionAction::Reset => session.reset(),
        }
        Rc::new(Self(session))
    }
}

/// Owns the predictor screen state: loads the catalog on mount and sends each
/// submitted request, feeding the answer back into the session.
#[hook]
pub fn use_predictor_session() -> UseReducerHandle<SessionModel> {
    let session = use_reducer(SessionModel::default);

    {
        let dispatcher = session.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let catalog = predictor::load_catalog().await;
                dispatcher.dispatch(SessionAction::CatalogLoaded(catalog));
            });
            || ()
        });
    }

    {
        let dispatcher = session.dispatcher();
        use_effect_with(session.outbound().cloned(), move |pending| {
            if let Some(PendingRequest { ticket, request }) = pending.clone() {
                log::debug!("Sending prediction request #{}", ticket);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = predictor::predict(&request).await;
                    dispatcher.dispatch(SessionAction::Settle { ticket, outcome });
                });
            }
            || ()
        });
    }

    session
}

/// Predictor health, checked once on mount.
#[hook]
pub fn use_api_health() -> UseStateHandle<RequestState<HealthResponse>> {
    let health = use_state(RequestState::<HealthResponse>::default);

    {
        let health = health.clone();
        use_effect_with((), move |_| {
            health.set(RequestState::InFlight);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = predictor::get_health().await.map_err(|e| e.to_string());
                health.set(RequestState::Settled(outcome));
            });
            || ()
        });
    }

    health
}

/// A `mousedown` listener on the document, removed again on drop.
struct DocumentListener {
    closure: Closure<dyn FnMut(Event)>,
}

impl DocumentListener {
    fn install(closure: Closure<dyn FnMut(Event)>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .map_err(|e| log::error!("Failed to install document listener: {:?}", e))
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Err(e) = document.remove_event_listener_with_callback(
                "mousedown",
                self.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to remove document listener: {:?}", e);
            }
        }
    }
}

/// Emits `on_outside` for every mouse press that lands outside `container`.
#[hook]
pub fn use_click_outside(container: NodeRef, on_outside: Callback<()>) {
    use_effect_with(container, move |container| {
        let container = container.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(container) = container.cast::<Node>() else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !container.contains(target.as_ref()) {
                on_outside.emit(());
            }
        });
        let listener = DocumentListener::install(closure);
        move || drop(listener)
    });
}
