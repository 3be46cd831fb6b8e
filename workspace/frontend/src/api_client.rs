pub mod predictor;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;
use traffy::PredictError;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, PredictError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - Request failed: {}", endpoint, e);
        PredictError::Network(e.to_string())
    })?;

    read_json("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, PredictError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            PredictError::Malformed(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            PredictError::Network(e.to_string())
        })?;

    read_json("POST", endpoint, response).await
}

/// Decodes a success body, or turns a failure body into `PredictError::Status`.
async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, PredictError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let body = response.text().await.unwrap_or_default();
        let err = PredictError::from_failure(status, &body);
        log::error!("{} {} - API error: {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
        PredictError::Malformed(e.to_string())
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

/// Races `request` against a timer; the timer winning yields `PredictError::Timeout`.
pub async fn with_timeout<T, F>(timeout_ms: u32, request: F) -> Result<T, PredictError>
where
    F: Future<Output = Result<T, PredictError>>,
{
    let request = Box::pin(request);
    match select(request, TimeoutFuture::new(timeout_ms)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::error!("Request timed out after {} ms", timeout_ms);
            Err(PredictError::Timeout(timeout_ms))
        }
    }
}
