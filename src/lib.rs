//! Core of the Bangkok Traffy predictor dashboard.
//!
//! Everything in here is plain Rust with no browser dependencies: the
//! searchable subdistrict combobox, the result classifier, the request
//! lifecycle and the wire types of the external predictor. The Yew frontend in
//! `workspace/frontend` renders these states and feeds them user events.

pub mod api;
pub mod catalog;
pub mod classifier;
pub mod combobox;
pub mod date;
pub mod error;
pub mod request;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{PredictRequest, PredictResponse, SubdistrictsResponse};
pub use catalog::LocationCatalog;
pub use classifier::{Breakdown, BreakdownBar, RankedCategory, Severity};
pub use combobox::{ComboboxState, Direction, Key, KeyOutcome};
pub use date::{DatePreset, TargetDate};
pub use error::{DateError, PredictError};
pub use request::RequestState;
pub use session::{ComboboxEvent, PendingRequest, PredictionResult, PredictorSession};
