//! Range validation for the measurement inputs
//!
//! The messages here are contractual: the UI renders them verbatim, so they
//! are built by hand instead of going through the `validator` derive (which
//! covers the backend payload in `models.rs`).

use crate::fields::Field;

/// Violation for a non-empty value that does not parse as a finite number
pub const INVALID_NUMBER: &str = "Please enter a valid number";

/// Validate one field's raw string.
///
/// Returns `None` when the value is acceptable. An empty string is
/// acceptable here — emptiness is a submit-time concern, not a range error
/// to flag while the user is still typing.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let number = match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return Some(INVALID_NUMBER.to_string()),
    };
    let range = field.range();
    if !range.contains(number) {
        return Some(out_of_range_message(field));
    }
    None
}

/// The exact out-of-range message for a field.
///
/// Integral bounds print without a fraction (`-20`, not `-20.0`), matching
/// the range table as users see it.
pub fn out_of_range_message(field: Field) -> String {
    let range = field.range();
    format!(
        "{} must be between {} and {}",
        range.label, range.min, range.max
    )
}

/// Submit-time message for a field left empty
pub fn required_message(field: Field) -> String {
    format!("{} is required", field.range().label)
}
