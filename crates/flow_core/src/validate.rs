//! Submission-time checks for the active contact field.

use std::sync::LazyLock;

use regex::Regex;
use shared::{domain::ContactMethod, error::ValidationError};

use crate::sanitize::HANDLE_MAX_LEN;

/// Optional `+`, no leading zero, 2-15 digits in total.
static E164_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("static E.164 pattern compiles"));

/// Validates `raw` for `method` and returns the trimmed value on success.
pub fn validate(method: ContactMethod, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    match method {
        ContactMethod::Handle => {
            let len = value.chars().count();
            if !(1..=HANDLE_MAX_LEN).contains(&len) {
                return Err(ValidationError::LengthOutOfRange { len });
            }
        }
        ContactMethod::PhoneNumber => {
            if !E164_PATTERN.is_match(value) {
                return Err(ValidationError::FormatInvalid);
            }
        }
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sanitize::{sanitize_handle, sanitize_phone};

    #[test]
    fn empty_or_blank_values_are_rejected_for_both_methods() {
        for method in ContactMethod::ALL {
            assert_eq!(validate(method, ""), Err(ValidationError::EmptyField));
            assert_eq!(validate(method, "   "), Err(ValidationError::EmptyField));
        }
    }

    #[test]
    fn handle_accepts_trimmed_value() {
        assert_eq!(validate(ContactMethod::Handle, " john.doe "), Ok("john.doe".to_string()));
    }

    #[test]
    fn overlong_handle_is_rejected_unless_sanitized_first() {
        let long = "a".repeat(31);
        assert_eq!(
            validate(ContactMethod::Handle, &long),
            Err(ValidationError::LengthOutOfRange { len: 31 })
        );
        assert!(validate(ContactMethod::Handle, &sanitize_handle(&long)).is_ok());
    }

    #[test]
    fn phone_accepts_e164_numbers() {
        assert_eq!(
            validate(ContactMethod::PhoneNumber, "+14155552671"),
            Ok("+14155552671".to_string())
        );
        assert!(validate(ContactMethod::PhoneNumber, "12").is_ok());
        assert!(validate(ContactMethod::PhoneNumber, "+123456789012345").is_ok());
    }

    #[test]
    fn phone_rejects_leading_zero_and_bad_lengths() {
        assert_eq!(
            validate(ContactMethod::PhoneNumber, "0123"),
            Err(ValidationError::FormatInvalid)
        );
        assert_eq!(
            validate(ContactMethod::PhoneNumber, "+1"),
            Err(ValidationError::FormatInvalid)
        );
        assert_eq!(
            validate(ContactMethod::PhoneNumber, "+1234567890123456"),
            Err(ValidationError::FormatInvalid)
        );
        assert_eq!(
            validate(ContactMethod::PhoneNumber, "+"),
            Err(ValidationError::FormatInvalid)
        );
    }

    #[test]
    fn messages_are_method_specific() {
        assert_eq!(ValidationError::EmptyField.to_string(), "This field is required");
        assert_eq!(
            ValidationError::LengthOutOfRange { len: 31 }.to_string(),
            "Instagram username must be 1-30 characters"
        );
        assert_eq!(
            ValidationError::FormatInvalid.to_string(),
            "Please enter a valid WhatsApp number with country code"
        );
    }

    proptest! {
        #[test]
        fn any_non_empty_sanitized_handle_validates(raw in any::<String>()) {
            let sanitized = sanitize_handle(&raw);
            let result = validate(ContactMethod::Handle, &sanitized);
            if sanitized.is_empty() {
                prop_assert_eq!(result, Err(ValidationError::EmptyField));
            } else {
                prop_assert_eq!(result, Ok(sanitized));
            }
        }

        #[test]
        fn valid_phone_numbers_survive_sanitizing(raw in "[+]?[1-9][0-9]{1,14}") {
            let sanitized = sanitize_phone(&raw);
            prop_assert_eq!(validate(ContactMethod::PhoneNumber, &sanitized), Ok(raw));
        }
    }
}
