//! Integration tests for the prediction API
//!
//! Exercises the router end to end: classification for both labels,
//! range rejection in the `detail` error shape, and the health endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use fire_predictor_backend::{
    config::{Config, ServerConfig},
    create_app,
    model::FireModel,
    AppState,
};

fn test_app() -> axum::Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
    };
    create_app(AppState {
        config: Arc::new(config),
        model: Arc::new(FireModel::new()),
    })
}

async fn post_predict(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_hot_dry_input_predicts_fire() {
    let (status, body) =
        post_predict(json!({"temp": 32.5, "rh": 45.0, "ws": 15.0, "rain": 0.2})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "Fire");
}

#[tokio::test]
async fn test_cool_wet_input_predicts_no_fire() {
    let (status, body) =
        post_predict(json!({"temp": 22.0, "rh": 90.0, "ws": 13.0, "rain": 8.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "No Fire");
}

#[tokio::test]
async fn test_boundary_values_are_accepted() {
    let (status, body) =
        post_predict(json!({"temp": 60.0, "rh": 100.0, "ws": 150.0, "rain": 500.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction"].is_string());

    let (status, _) =
        post_predict(json!({"temp": -20.0, "rh": 0.0, "ws": 0.0, "rain": 0.0})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_out_of_range_field_is_rejected_with_detail() {
    let (status, body) =
        post_predict(json!({"temp": 70.0, "rh": 45.0, "ws": 15.0, "rain": 0.2})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["msg"], "Temperature must be between -20 and 60");
    assert_eq!(body["detail"][0]["loc"][1], "temp");
}

#[tokio::test]
async fn test_violations_report_in_wire_order() {
    let (status, body) =
        post_predict(json!({"temp": -30.0, "rh": 200.0, "ws": 15.0, "rain": 0.2})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"][1], "temp");
    assert_eq!(body["detail"][1]["loc"][1], "rh");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (status, _) = post_predict(json!({"temp": 32.5, "rh": 45.0, "ws": 15.0})).await;
    assert!(!status.is_success());
}

#[tokio::test]
async fn test_health_endpoints() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
