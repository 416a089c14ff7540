//! Forest Fire Predictor - Prediction Service
//!
//! Serves fire-risk classifications for the four environmental
//! measurements (temperature, humidity, wind speed, rainfall) collected by
//! the form frontend.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;

pub use config::Config;
use model::FireModel;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<FireModel>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Permissive CORS for the local form frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
