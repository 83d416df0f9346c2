//! HTTP client for the prediction backend.

use agri_yield::{failure_message, PredictError, PredictionRequest, PredictionResponse};
use gloo_net::http::Request;

use crate::config::PREDICT_ENDPOINT;

/// POST one prediction request and settle with the parsed body or a
/// user-facing error. Never retried; the caller decides whether the
/// settled result still applies.
pub async fn predict(payload: &PredictionRequest) -> Result<PredictionResponse, PredictError> {
    log::debug!("POST {} crop={}", PREDICT_ENDPOINT, payload.crop);

    let response = Request::post(PREDICT_ENDPOINT)
        .json(payload)
        .map_err(|e| PredictError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - request failed: {}", PREDICT_ENDPOINT, e);
            PredictError::Transport(e.to_string())
        })?;

    if !response.ok() {
        log::warn!(
            "POST {} - non-OK response: {}",
            PREDICT_ENDPOINT,
            response.status()
        );
        let body = response.text().await.unwrap_or_default();
        return Err(PredictError::Backend(failure_message(&body)));
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| {
            log::error!("POST {} - unparsable body: {}", PREDICT_ENDPOINT, e);
            PredictError::MalformedBody(e.to_string())
        })
}
