//! HTTP client for the prediction service

use reqwest::Client;
use shared::{PredictionInput, PredictionResponse, ServiceErrorBody};
use thiserror::Error;

/// Local development endpoint of the prediction service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Why a prediction request did not produce a result
#[derive(Debug, Error)]
pub enum PredictError {
    /// The service answered with a non-success status. `message` carries
    /// the first machine-readable `detail[].msg` when the body had one.
    #[error("prediction service rejected the request")]
    Rejected { message: Option<String> },

    /// No usable response was obtained (connection refused, timeout,
    /// or an undecodable success body)
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the prediction service
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a client against the default local endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Issue exactly one `POST /predict` with the four numeric values.
    ///
    /// No retry and no cancellation: the request runs to completion and
    /// the outcome is reported as-is.
    pub async fn predict(
        &self,
        input: &PredictionInput,
    ) -> Result<PredictionResponse, PredictError> {
        let url = format!("{}/predict", self.base_url);

        let response = self.client.post(&url).json(input).send().await?;

        if !response.status().is_success() {
            let message = response
                .json::<ServiceErrorBody>()
                .await
                .ok()
                .and_then(|body| body.first_message().map(str::to_string));
            return Err(PredictError::Rejected { message });
        }

        Ok(response.json::<PredictionResponse>().await?)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}
