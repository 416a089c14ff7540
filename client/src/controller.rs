//! Submission controller: full-form sweep, single request, outcome reduction
//!
//! The controller owns every transition of the submission state machine:
//!
//! ```text
//! Idle --submit(invalid)--> Failed                 (no network call)
//! Idle --submit(valid)----> InFlight --success--> Succeeded
//!                           InFlight --failure--> Failed
//! Succeeded|Failed --reset()--> Idle              (FormState::reset)
//! ```
//!
//! No error escapes `submit`; every failure is reduced to the `Failed`
//! state. The caller must not invoke `submit` while the form is in flight —
//! there is no cancellation, so the UI disables the control instead.

use shared::{FormState, SUBMIT_BLOCKED};

use crate::api::{PredictError, PredictionClient};

/// Fallback when a rejection body carries no machine-readable message
pub const SERVICE_REJECTED_FALLBACK: &str = "Failed to fetch prediction from server";

/// Surfaced for transport-level failures (no response obtained)
pub const TRANSPORT_FALLBACK: &str =
    "Something went wrong. Please check if the backend is running.";

/// Drives a [`FormState`] through submission attempts
pub struct SubmissionController {
    client: PredictionClient,
}

impl SubmissionController {
    pub fn new(client: PredictionClient) -> Self {
        Self { client }
    }

    /// Run one submission attempt.
    ///
    /// Re-validates all four fields first, regardless of their advisory
    /// per-keystroke status. Only a fully clean form issues a network call.
    pub async fn submit(&self, form: &mut FormState) {
        let Some(payload) = form.run_submit_sweep() else {
            form.mark_failed(SUBMIT_BLOCKED.to_string());
            return;
        };

        form.mark_in_flight();

        match self.client.predict(&payload).await {
            Ok(response) => form.mark_succeeded(response.prediction),
            Err(err) => form.mark_failed(reduce_failure(err)),
        }
    }
}

/// Map a request failure to the message the banner shows.
///
/// Service rejections surface the service's own message when present.
/// Transport failures all read the same to the user; the underlying
/// description goes to the log.
pub fn reduce_failure(err: PredictError) -> String {
    match err {
        PredictError::Rejected { message } => {
            message.unwrap_or_else(|| SERVICE_REJECTED_FALLBACK.to_string())
        }
        PredictError::Transport(source) => {
            tracing::warn!(error = %source, "prediction request failed in transport");
            TRANSPORT_FALLBACK.to_string()
        }
    }
}
