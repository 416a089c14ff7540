//! Keystroke sanitizer for the measurement inputs
//!
//! Reduces arbitrary text-box content to a numeric-literal candidate:
//! digits, at most one decimal point, and a minus sign only in the leading
//! position survive. Everything else is dropped silently.

/// Strip a raw text edit down to a numeric-literal candidate.
///
/// Applied on every keystroke, so it must accept any input and never fail.
/// The result still may not parse (e.g. `"-"` or `"."` mid-edit); that is
/// the validator's concern.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(c);
            }
            '-' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}
