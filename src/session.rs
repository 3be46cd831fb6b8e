//! One screen's worth of predictor state.
//!
//! The session ties the combobox, the date input and the prediction request
//! together and owns the only cross-cutting rule: a prediction can be
//! submitted when a subdistrict is selected and no request is in flight.

use std::rc::Rc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::api::{PredictRequest, PredictResponse};
use crate::catalog::LocationCatalog;
use crate::classifier::{Breakdown, Severity, classify_severity};
use crate::combobox::{ComboboxState, Key, KeyOutcome};
use crate::date::{DatePreset, TargetDate};
use crate::error::PredictError;
use crate::request::RequestState;

/// A successful prediction, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub subdistrict: String,
    pub date: String,
    pub categories: IndexMap<String, f64>,
    pub total: f64,
}

impl PredictionResult {
    /// Combines a response with the request it answers. Subdistrict and date
    /// fall back to the request's values when the response omits them.
    pub fn from_response(request: &PredictRequest, response: PredictResponse) -> Self {
        let date = response.date.unwrap_or_else(|| {
            format!("{:04}-{:02}-{:02}", request.year, request.month, request.day)
        });
        Self {
            subdistrict: response
                .subdistrict
                .unwrap_or_else(|| request.subdistrict.clone()),
            date,
            categories: response.predictions,
            total: response.total_predicted,
        }
    }

    pub fn severity(&self) -> Severity {
        classify_severity(self.total)
    }

    pub fn breakdown(&self, top_n: usize) -> Breakdown {
        Breakdown::new(&self.categories, self.total, top_n)
    }
}

/// A request handed out by [`PredictorSession::submit`], tagged with the
/// ticket its answer must carry back to [`PredictorSession::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: u64,
    pub request: PredictRequest,
}

/// Combobox input events, as delivered by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ComboboxEvent {
    Input(String),
    Focus,
    Key(Key),
    Hover(usize),
    Pick(String),
    Clear,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictorSession {
    catalog: Rc<LocationCatalog>,
    catalog_loaded: bool,
    combobox: ComboboxState,
    date_input: String,
    request: RequestState<PredictionResult>,
    outbound: Option<PendingRequest>,
    last_ticket: u64,
}

impl PredictorSession {
    /// Fresh session with an empty catalog and the date input set to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            catalog: Rc::new(LocationCatalog::empty()),
            catalog_loaded: false,
            combobox: ComboboxState::new(),
            date_input: DatePreset::Today.resolve(today),
            request: RequestState::Idle,
            outbound: None,
            last_ticket: 0,
        }
    }

    pub fn catalog(&self) -> &Rc<LocationCatalog> {
        &self.catalog
    }

    /// Installs the catalog. Only the first call has an effect.
    pub fn load_catalog(&mut self, catalog: LocationCatalog) {
        if self.catalog_loaded {
            warn!("Location catalog already loaded, ignoring reload");
            return;
        }
        info!(count = catalog.len(), "Location catalog loaded");
        self.catalog = Rc::new(catalog);
        self.catalog_loaded = true;
    }

    pub fn combobox(&self) -> &ComboboxState {
        &self.combobox
    }

    pub fn apply(&mut self, event: ComboboxEvent) -> KeyOutcome {
        let catalog = &self.catalog;
        match event {
            ComboboxEvent::Input(text) => self.combobox.set_query(text),
            ComboboxEvent::Focus => self.combobox.focus(),
            ComboboxEvent::Key(key) => return self.combobox.handle_key(key, catalog),
            ComboboxEvent::Hover(index) => self.combobox.highlight(index, catalog),
            ComboboxEvent::Pick(value) => self.combobox.select_explicit(value),
            ComboboxEvent::Clear => self.combobox.clear(),
            ComboboxEvent::Dismiss => self.combobox.dismiss(),
        }
        KeyOutcome::default()
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    pub fn set_date(&mut self, input: impl Into<String>) {
        self.date_input = input.into();
    }

    pub fn apply_preset(&mut self, preset: DatePreset, today: NaiveDate) {
        self.date_input = preset.resolve(today);
    }

    pub fn request(&self) -> &RequestState<PredictionResult> {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.request.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    /// Request waiting for its answer, present exactly while loading.
    pub fn outbound(&self) -> Option<&PendingRequest> {
        self.outbound.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.request.can_begin() && self.combobox.selected().is_some()
    }

    /// Starts a prediction for the selected subdistrict and date.
    ///
    /// Returns the request to send with a fresh ticket, or `None` when
    /// submission is blocked. An unusable date settles the request as a
    /// failure right away.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            debug!(
                loading = self.is_loading(),
                selected = self.combobox.selected().is_some(),
                "Submit blocked"
            );
            return None;
        }
        let subdistrict = self.combobox.selected()?.to_string();
        let date = TargetDate::parse_iso(&self.date_input);

        self.request.begin();
        match date {
            Ok(date) => {
                self.last_ticket += 1;
                let pending = PendingRequest {
                    ticket: self.last_ticket,
                    request: PredictRequest::new(subdistrict, date),
                };
                info!(
                    ticket = pending.ticket,
                    subdistrict = %pending.request.subdistrict,
                    date = %date.iso(),
                    "Prediction requested"
                );
                self.outbound = Some(pending.clone());
                Some(pending)
            }
            Err(err) => {
                warn!(input = %self.date_input, "Rejected date input: {}", err);
                self.request.settle(Err(err.to_string()));
                None
            }
        }
    }

    /// Records the predictor's answer for the request holding `ticket`.
    /// Answers for any other ticket (one dropped by a reset, or superseded by
    /// a later submit) are ignored.
    pub fn settle(&mut self, ticket: u64, outcome: Result<PredictResponse, PredictError>) {
        let request = match self.outbound.take() {
            Some(pending) if pending.ticket == ticket => pending.request,
            other => {
                warn!(
                    ticket,
                    current = ?other.as_ref().map(|p| p.ticket),
                    "Ignoring answer for a request no longer in flight"
                );
                self.outbound = other;
                return;
            }
        };
        let outcome = match outcome {
            Ok(response) => {
                let result = PredictionResult::from_response(&request, response);
                info!(
                    subdistrict = %result.subdistrict,
                    total = result.total,
                    "Prediction received"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(subdistrict = %request.subdistrict, "Prediction failed: {}", err);
                Err(err.user_message())
            }
        };
        self.request.settle(outcome);
    }

    /// Clears the result and the location search. The date is kept.
    pub fn reset(&mut self) {
        debug!("Session reset");
        self.request.reset();
        self.outbound = None;
        self.combobox.clear();
    }
}
