//! Error handling for the prediction service
//!
//! Responses use the `{"detail": [{"loc", "msg", "type"}]}` shape the form
//! client consumes, so validation messages travel to the banner verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::{Field, ServiceErrorBody, ServiceErrorDetail};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// One rejected payload field
#[derive(Debug, Clone)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldViolation {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();
        // field_errors iterates a HashMap; report in wire order instead
        violations.sort_by_key(|v| {
            Field::from_name(&v.field)
                .map(|f| Field::ALL.iter().position(|x| *x == f).unwrap_or(usize::MAX))
                .unwrap_or(usize::MAX)
        });
        ApiError::Validation(violations)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let (status, detail) = match &self {
            ApiError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                violations
                    .iter()
                    .map(|v| ServiceErrorDetail {
                        loc: vec![json!("body"), json!(v.field)],
                        msg: v.message.clone(),
                        error_type: "value_error".to_string(),
                    })
                    .collect(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                vec![ServiceErrorDetail {
                    loc: Vec::new(),
                    msg: "An internal server error occurred".to_string(),
                    error_type: "internal_error".to_string(),
                }],
            ),
        };

        (status, Json(ServiceErrorBody { detail })).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
