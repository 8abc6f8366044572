//! Per-keystroke input normalization for the two contact fields.

use shared::domain::ContactMethod;

pub const HANDLE_MAX_LEN: usize = 30;
pub const PHONE_MAX_LEN: usize = 16;

pub fn sanitize(method: ContactMethod, raw: &str) -> String {
    match method {
        ContactMethod::Handle => sanitize_handle(raw),
        ContactMethod::PhoneNumber => sanitize_phone(raw),
    }
}

/// Drops one leading `@`, keeps `[a-zA-Z0-9_.]`, caps at 30 characters.
pub fn sanitize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_at = trimmed.strip_prefix('@').unwrap_or(trimmed);

    without_at
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
        .take(HANDLE_MAX_LEN)
        .collect()
}

/// Keeps digits and a single leading `+`, caps at 16 characters.
///
/// A `+` typed anywhere in the value is moved to the front, and repeated
/// `+` signs collapse into one.
pub fn sanitize_phone(raw: &str) -> String {
    let mut has_plus = false;
    let digits: String = raw
        .chars()
        .filter(|c| {
            if *c == '+' {
                has_plus = true;
            }
            c.is_ascii_digit()
        })
        .collect();

    let normalized = if has_plus {
        format!("+{digits}")
    } else {
        digits
    };

    // Everything left is ASCII, so byte and char counts agree.
    normalized.chars().take(PHONE_MAX_LEN).collect()
}
