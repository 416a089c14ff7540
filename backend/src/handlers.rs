//! HTTP handlers for the prediction service

use axum::{extract::State, Json};
use shared::{PredictionInput, PredictionResponse};
use validator::Validate;

use crate::error::ApiResult;
use crate::AppState;

/// Root endpoint
pub async fn root() -> &'static str {
    "Forest Fire Predictor API v1.0"
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Classify one set of measurements.
///
/// Range violations come back as 422 with a `detail` array; the form
/// surfaces the first message verbatim.
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> ApiResult<Json<PredictionResponse>> {
    input.validate()?;

    let label = state.model.predict(&input);
    tracing::info!(
        temp = input.temp,
        rh = input.rh,
        ws = input.ws,
        rain = input.rain,
        label,
        "served prediction"
    );

    Ok(Json(PredictionResponse {
        prediction: label.to_string(),
    }))
}
