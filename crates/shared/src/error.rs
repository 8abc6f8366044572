use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local validation failures. Display text is what the user sees next to the
/// offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("This field is required")]
    EmptyField,
    #[error("Instagram username must be 1-30 characters")]
    LengthOutOfRange { len: usize },
    #[error("Please enter a valid WhatsApp number with country code")]
    FormatInvalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}
