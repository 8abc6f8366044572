//! Where validated submissions go once the success panel is shown.

use async_trait::async_trait;
use shared::{domain::ContactSubmission, error::SinkError};
use tracing::info;

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SinkError>;
}

/// Records each submission as one structured log line and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        let payload = submission
            .to_log_payload()
            .map_err(|err| SinkError::Rejected(format!("unserializable submission: {err}")))?;
        info!(
            method = ?submission.method,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            payload = %payload,
            "contact submitted"
        );
        Ok(())
    }
}
