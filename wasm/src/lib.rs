//! WebAssembly module for the Forest Fire Predictor form
//!
//! Provides client-side logic for the browser UI:
//! - Keystroke sanitization of the measurement inputs
//! - Real-time range validation
//! - A form session with the submit-time sweep
//!
//! Submission itself stays with the page's `fetch`; a clean session hands
//! over the validated JSON payload.

use wasm_bindgen::prelude::*;

use shared::{sanitize, validate_field, Field, FormState, SUBMIT_BLOCKED};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("fire-predictor wasm module loaded"));
}

fn field_from_name(name: &str) -> Result<Field, JsValue> {
    Field::from_name(name).ok_or_else(|| JsValue::from_str(&format!("Unknown field: {name}")))
}

/// Sanitize one text edit of a measurement input
#[wasm_bindgen]
pub fn sanitize_input(raw: &str) -> String {
    sanitize(raw)
}

/// Validate a measurement value; returns the violation message or null
#[wasm_bindgen]
pub fn validate_measurement(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    Ok(validate_field(field_from_name(field)?, value))
}

/// Banner message shown when the submit sweep finds violations
#[wasm_bindgen]
pub fn submit_blocked_message() -> String {
    SUBMIT_BLOCKED.to_string()
}

/// One form session owning values, violations, and the submit sweep
#[wasm_bindgen]
pub struct FormSession {
    state: FormState,
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormSession {
        FormSession {
            state: FormState::new(),
        }
    }

    /// Real-time path: sanitize, store, re-validate. Returns the sanitized
    /// value so the input box can be kept in sync.
    pub fn set_field(&mut self, field: &str, raw: &str) -> Result<String, JsValue> {
        let field = field_from_name(field)?;
        self.state.set_field(field, raw);
        Ok(self.state.values().get(field).to_string())
    }

    /// Current raw value of a field
    pub fn value(&self, field: &str) -> Result<String, JsValue> {
        Ok(self.state.values().get(field_from_name(field)?).to_string())
    }

    /// Current violation of a field, or null when it is clean
    pub fn violation(&self, field: &str) -> Result<Option<String>, JsValue> {
        Ok(self
            .state
            .errors()
            .get(field_from_name(field)?)
            .map(str::to_string))
    }

    /// Submit-time sweep over all four fields. Returns the JSON payload for
    /// `fetch` when the form is clean, null when violations were recorded.
    pub fn payload_for_submit(&mut self) -> Result<Option<String>, JsValue> {
        match self.state.run_submit_sweep() {
            Some(input) => serde_json::to_string(&input)
                .map(Some)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(None),
        }
    }

    /// Clear values, violations, and submission state in one step
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
