use chrono::NaiveDate;
use thiserror::Error;

/// Message shown when the predictor gives no usable explanation.
pub const FALLBACK_MESSAGE: &str = "Prediction failed";

/// Errors from turning the date input into a request date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date: '{0}' is not a YYYY-MM-DD date")]
    Malformed(String),

    /// Date exists but the predictor does not cover it
    #[error("Invalid date: {date} is outside {min} to {max}")]
    OutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

/// Errors from a call to the external predictor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The request never got a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-success status, with the server's `detail` when it sent one
    #[error("HTTP error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// Success status but the body could not be decoded
    #[error("Failed to parse response: {0}")]
    Malformed(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl PredictError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            PredictError::Timeout(ms) => format!(
                "The prediction service did not respond within {} seconds",
                ms.div_ceil(1000)
            ),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_detail() {
        let err = PredictError::Status {
            status: 500,
            detail: Some("model unavailable".to_string()),
        };
        assert_eq!(err.user_message(), "model unavailable");
        assert_eq!(err.to_string(), "HTTP error 500: model unavailable");
    }

    #[test]
    fn test_user_message_falls_back() {
        let cases = vec![
            PredictError::Status {
                status: 502,
                detail: None,
            },
            PredictError::Network("Failed to fetch".to_string()),
            PredictError::Malformed("expected value at line 1".to_string()),
        ];
        for err in cases {
            assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_timeout_message_rounds_up_to_seconds() {
        assert_eq!(
            PredictError::Timeout(30_000).user_message(),
            "The prediction service did not respond within 30 seconds"
        );
        assert_eq!(
            PredictError::Timeout(1_500).user_message(),
            "The prediction service did not respond within 2 seconds"
        );
    }

    #[test]
    fn test_date_error_messages() {
        let err = DateError::Malformed("15/03/2024".to_string());
        assert_eq!(err.to_string(), "Invalid date: '15/03/2024' is not a YYYY-MM-DD date");

        let err = DateError::OutOfRange {
            date: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
            min: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            max: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date: 2031-01-01 is outside 2023-01-01 to 2030-12-31"
        );
    }
}
