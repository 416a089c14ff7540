//! Submission scenarios against an in-process stub of the prediction service
//!
//! Covers the full controller state machine: valid submissions for both
//! outcome labels, the no-network short-circuit on invalid input, service
//! rejections with and without a machine-readable detail, and a transport
//! failure against a dead port.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

use fire_predictor_client::{
    PredictionClient, SubmissionController, SERVICE_REJECTED_FALLBACK, TRANSPORT_FALLBACK,
};
use shared::{Field, FormState, SubmissionState, SUBMIT_BLOCKED};

/// Serve a fixed status/body from `/predict` on an ephemeral port
async fn spawn_stub(status: StatusCode, body: Value) -> SocketAddr {
    let app = Router::new().route(
        "/predict",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn controller_for(addr: SocketAddr) -> SubmissionController {
    SubmissionController::new(PredictionClient::with_base_url(format!("http://{addr}")))
}

fn valid_form() -> FormState {
    let mut form = FormState::new();
    form.set_field(Field::Temp, "32.5");
    form.set_field(Field::Rh, "45");
    form.set_field(Field::Ws, "15");
    form.set_field(Field::Rain, "0.2");
    form
}

#[tokio::test]
async fn test_fire_prediction_succeeds() {
    let addr = spawn_stub(StatusCode::OK, json!({"prediction": "Fire"})).await;
    let mut form = valid_form();

    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Succeeded("Fire".to_string())
    );
    assert!(form.errors().is_clean());
}

#[tokio::test]
async fn test_safe_prediction_succeeds_with_label_verbatim() {
    let addr = spawn_stub(StatusCode::OK, json!({"prediction": "NoFire"})).await;
    let mut form = valid_form();

    controller_for(addr).submit(&mut form).await;

    // Any label other than exactly "Fire" is a safe classification, and the
    // label itself is carried through untouched
    assert_eq!(
        form.submission(),
        &SubmissionState::Succeeded("NoFire".to_string())
    );
}

#[tokio::test]
async fn test_invalid_form_never_reaches_the_network() {
    // If a request were issued, the stub's message would surface instead of
    // the local validation banner
    let addr = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"detail": [{"msg": "the network was reached"}]}),
    )
    .await;
    let mut form = valid_form();
    form.set_field(Field::Temp, "70");

    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed(SUBMIT_BLOCKED.to_string())
    );
    assert_eq!(
        form.errors().get(Field::Temp),
        Some("Temperature must be between -20 and 60")
    );
}

#[tokio::test]
async fn test_empty_field_never_reaches_the_network() {
    let addr = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"detail": [{"msg": "the network was reached"}]}),
    )
    .await;
    let mut form = valid_form();
    form.set_field(Field::Rain, "");

    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed(SUBMIT_BLOCKED.to_string())
    );
    assert_eq!(form.errors().get(Field::Rain), Some("Rain is required"));
}

#[tokio::test]
async fn test_service_rejection_surfaces_detail_message() {
    let addr = spawn_stub(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"detail": [{"msg": "model unavailable"}]}),
    )
    .await;
    let mut form = valid_form();

    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed("model unavailable".to_string())
    );
}

#[tokio::test]
async fn test_service_rejection_without_detail_uses_fallback() {
    let addr = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
    let mut form = valid_form();

    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed(SERVICE_REJECTED_FALLBACK.to_string())
    );
}

#[tokio::test]
async fn test_connection_refused_uses_transport_message() {
    // Bind a port to learn a free address, then free it before submitting
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut form = valid_form();
    controller_for(addr).submit(&mut form).await;

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed(TRANSPORT_FALLBACK.to_string())
    );
}

#[tokio::test]
async fn test_reset_after_failure_returns_to_idle() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut form = valid_form();
    controller_for(addr).submit(&mut form).await;
    assert!(form.submission().is_resolved());

    form.reset();
    assert!(form.submission().is_idle());
    assert_eq!(form.values().get(Field::Temp), "");
}
