//! Email normalization applied when the email field loses focus.

/// Trims surrounding whitespace and lower-cases the address.
///
/// No validation is done: malformed input is normalized the same way.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
