//! Wire models for the prediction service contract

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Label the service answers for the high-risk class
pub const FIRE_LABEL: &str = "Fire";

/// Label the service answers for the safe class
pub const NO_FIRE_LABEL: &str = "No Fire";

/// Payload for `POST /predict` — exactly four IEEE-754 doubles.
///
/// The `validate` ranges mirror the field table in `fields.rs`; a test pins
/// the two in sync. The messages match the form validator so a rejected
/// payload reads the same on either side of the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionInput {
    #[validate(range(
        min = -20.0,
        max = 60.0,
        message = "Temperature must be between -20 and 60"
    ))]
    pub temp: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0 and 100"))]
    pub rh: f64,
    #[validate(range(min = 0.0, max = 150.0, message = "Wind Speed must be between 0 and 150"))]
    pub ws: f64,
    #[validate(range(min = 0.0, max = 500.0, message = "Rain must be between 0 and 500"))]
    pub rain: f64,
}

/// Success response from the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub prediction: String,
}

impl PredictionResponse {
    /// Only the exact `"Fire"` label denotes high risk; anything else is
    /// treated as a safe classification.
    pub fn is_fire(&self) -> bool {
        self.prediction == FIRE_LABEL
    }
}

/// Error body in the FastAPI shape: `{"detail": [{"loc", "msg", "type"}]}`.
///
/// `detail` is optional on the wire; a missing or empty array means no
/// machine-readable message is available.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceErrorBody {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<ServiceErrorDetail>,
}

/// One entry of a service error's `detail` array
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceErrorDetail {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub error_type: String,
}

impl ServiceErrorBody {
    /// The first machine-readable message, if the service sent one
    pub fn first_message(&self) -> Option<&str> {
        self.detail.first().map(|d| d.msg.as_str())
    }
}
