//! Shared types and logic for the Forest Fire Predictor
//!
//! This crate contains everything shared between the backend, the native
//! client, and the browser (via WASM): the measurement field table, the
//! keystroke sanitizer, the range validator, the wire models for the
//! prediction service, and the form state machine.

pub mod fields;
pub mod form;
pub mod models;
pub mod sanitize;
pub mod validation;

pub use fields::*;
pub use form::*;
pub use models::*;
pub use sanitize::*;
pub use validation::*;
