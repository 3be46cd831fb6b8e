//! Wire types of the external predictor.
//!
//! These structs mirror the predictor's JSON payloads so the frontend can
//! decode responses without duplicating shapes. Fields the dashboard does not
//! depend on are optional on decode.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::LocationCatalog;
use crate::date::TargetDate;
use crate::error::PredictError;

pub const HEALTH_PATH: &str = "/health";
pub const SUBDISTRICTS_PATH: &str = "/subdistricts";
pub const PREDICT_PATH: &str = "/predict";

/// `GET /subdistricts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdistrictsResponse {
    #[serde(default)]
    pub count: Option<usize>,
    pub subdistricts: Vec<String>,
}

impl SubdistrictsResponse {
    pub fn into_catalog(self) -> LocationCatalog {
        LocationCatalog::new(self.subdistricts)
    }
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

/// `POST /predict` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub subdistrict: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PredictRequest {
    pub fn new(subdistrict: impl Into<String>, date: TargetDate) -> Self {
        Self {
            subdistrict: subdistrict.into(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// `POST /predict` success body. `predictions` keeps the predictor's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub subdistrict: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub predictions: IndexMap<String, f64>,
    pub total_predicted: f64,
}

/// Failure body: `{"detail": ...}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Human-readable `detail` from a failure body, if there is one.
///
/// `detail` is usually a string. Request-validation failures send a list of
/// `{loc, msg, type}` objects instead; their messages are joined.
pub fn failure_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match body.detail? {
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    // Blank means absent; anything else is shown exactly as sent
    (!detail.trim().is_empty()).then_some(detail)
}

impl PredictError {
    /// Builds the error for a non-success response from its status and raw body.
    pub fn from_failure(status: u16, body: &str) -> Self {
        PredictError::Status {
            status,
            detail: failure_detail(body),
        }
    }
}
