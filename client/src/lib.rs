//! Native client for the Forest Fire Predictor service
//!
//! Owns the submission side of the form: the HTTP client speaking the
//! `/predict` contract and the controller that drives a
//! [`shared::FormState`] through one submission attempt.

pub mod api;
pub mod controller;

pub use api::{PredictError, PredictionClient, DEFAULT_BASE_URL};
pub use controller::{SubmissionController, SERVICE_REJECTED_FALLBACK, TRANSPORT_FALLBACK};
