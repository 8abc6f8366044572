use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which of the two alternate contact inputs is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    #[default]
    Handle,
    PhoneNumber,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Handle, ContactMethod::PhoneNumber];

    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Handle => "Instagram",
            ContactMethod::PhoneNumber => "WhatsApp",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContactMethod::Handle => "📷",
            ContactMethod::PhoneNumber => "📞",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactMethod::Handle => "your.username",
            ContactMethod::PhoneNumber => "+14155552671",
        }
    }
}

/// A validated contact value, alive only long enough to be rendered and
/// handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub method: ContactMethod,
    pub raw_value: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(method: ContactMethod, raw_value: impl Into<String>) -> Self {
        Self::at(method, raw_value, Utc::now())
    }

    pub fn at(
        method: ContactMethod,
        raw_value: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            method,
            raw_value: raw_value.into(),
            submitted_at,
        }
    }

    /// Summary line shown on the success panel, without the icon.
    pub fn display_text(&self) -> String {
        match self.method {
            ContactMethod::Handle => format!("Instagram handle: @{}", self.raw_value),
            ContactMethod::PhoneNumber => format!("WhatsApp number: {}", self.raw_value),
        }
    }

    pub fn to_log_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
