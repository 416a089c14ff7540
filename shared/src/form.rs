//! Form state machine for the measurement form
//!
//! One `FormState` instance owns everything a form session mutates: the
//! four raw value strings, the per-field violations, and the submission
//! lifecycle. The UI reads it; keystrokes go through [`FormState::set_field`];
//! submission transitions go through the client's submission controller.

use std::collections::HashMap;

use crate::fields::Field;
use crate::models::PredictionInput;
use crate::sanitize::sanitize;
use crate::validation::{required_message, validate_field};

/// Banner message when the submit-time sweep finds violations
pub const SUBMIT_BLOCKED: &str = "Please correct the highlighted errors before analyzing.";

/// Raw value strings, one per field. Empty means "not yet provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    temp: String,
    rh: String,
    ws: String,
    rain: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Temp => &self.temp,
            Field::Rh => &self.rh,
            Field::Ws => &self.ws,
            Field::Rain => &self.rain,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Temp => &mut self.temp,
            Field::Rh => &mut self.rh,
            Field::Ws => &mut self.ws,
            Field::Rain => &mut self.rain,
        }
    }

    /// Parse all four strings into the wire payload.
    ///
    /// `None` if any field is empty or does not parse as a finite number.
    /// Range checking is not repeated here; the submit sweep owns that.
    pub fn parsed(&self) -> Option<PredictionInput> {
        let parse = |field: Field| {
            self.get(field)
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        };
        Some(PredictionInput {
            temp: parse(Field::Temp)?,
            rh: parse(Field::Rh)?,
            ws: parse(Field::Ws)?,
            rain: parse(Field::Rain)?,
        })
    }
}

/// Per-field violations. Absence of an entry means the field is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: HashMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.violations.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, violation: Option<String>) {
        match violation {
            Some(message) => {
                self.violations.insert(field, message);
            }
            None => {
                self.violations.remove(&field);
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Submission lifecycle. Exactly one of these exists per form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    /// The caller must disable the submit control while this is true;
    /// there is no cancellation once a request is issued.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// A result or error is showing, so the reset affordance is enabled
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        )
    }
}

/// The whole form session: values, violations, and submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ValidationErrors,
    submission: SubmissionState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Real-time feedback path: sanitize the edit, store it, re-validate
    /// the field. Never touches the submission state.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let clean = sanitize(raw);
        let violation = validate_field(field, &clean);
        *self.values.get_mut(field) = clean;
        self.errors.set(field, violation);
    }

    /// Clear values, violations, and submission state in one observable
    /// step. Callable at any time and always succeeds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit-time sweep over all four fields, authoritative regardless of
    /// the advisory per-keystroke results. Empty fields count as violations
    /// here (required-field enforcement). Per-field violations are recorded
    /// for the UI; the payload is returned only when every field is clean.
    pub fn run_submit_sweep(&mut self) -> Option<PredictionInput> {
        let mut clean = true;
        for field in Field::ALL {
            let value = self.values.get(field);
            let violation = if value.is_empty() {
                Some(required_message(field))
            } else {
                validate_field(field, value)
            };
            if violation.is_some() {
                clean = false;
            }
            self.errors.set(field, violation);
        }
        if !clean {
            return None;
        }
        self.values.parsed()
    }

    // Submission transitions. These are for the submission controller; the
    // UI must go through `reset` only.

    pub fn mark_in_flight(&mut self) {
        self.submission = SubmissionState::InFlight;
    }

    pub fn mark_succeeded(&mut self, label: String) {
        self.submission = SubmissionState::Succeeded(label);
    }

    pub fn mark_failed(&mut self, message: String) {
        self.submission = SubmissionState::Failed(message);
    }
}
