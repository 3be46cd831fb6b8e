use crate::api_client;
use crate::settings;
use traffy::api::{HealthResponse, HEALTH_PATH, PREDICT_PATH, SUBDISTRICTS_PATH};
use traffy::{LocationCatalog, PredictError, PredictRequest, PredictResponse, SubdistrictsResponse};

/// Loads the subdistrict catalog. Any failure degrades to an empty catalog;
/// it is logged and never shown to the user.
pub async fn load_catalog() -> LocationCatalog {
    log::trace!("Fetching subdistrict catalog");
    match api_client::get::<SubdistrictsResponse>(SUBDISTRICTS_PATH).await {
        Ok(response) => {
            let catalog = response.into_catalog();
            log::info!("Loaded {} subdistricts", catalog.len());
            catalog
        }
        Err(e) => {
            log::error!("Failed to fetch subdistricts: {}", e);
            LocationCatalog::empty()
        }
    }
}

pub async fn get_health() -> Result<HealthResponse, PredictError> {
    log::trace!("Checking predictor health");
    let result = api_client::get::<HealthResponse>(HEALTH_PATH).await;

    if let Err(ref e) = result {
        log::warn!("Predictor health check failed: {}", e);
    }

    result
}

pub async fn predict(request: &PredictRequest) -> Result<PredictResponse, PredictError> {
    log::trace!(
        "Requesting prediction for {} on {}-{:02}-{:02}",
        request.subdistrict,
        request.year,
        request.month,
        request.day
    );
    let timeout_ms = settings::get_settings().request_timeout_ms;
    let result = api_client::with_timeout(
        timeout_ms,
        api_client::post::<PredictResponse, _>(PREDICT_PATH, request),
    )
    .await;

    match &result {
        Ok(response) => log::info!(
            "Prediction for {}: {:.2} complaints",
            request.subdistrict,
            response.total_predicted
        ),
        Err(e) => log::error!("Failed to fetch prediction: {}", e),
    }

    result
}
