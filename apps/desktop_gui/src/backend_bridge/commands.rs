//! Backend commands queued from UI to backend worker.

use shared::domain::ContactSubmission;

#[derive(Debug)]
pub enum BackendCommand {
    /// Hand a validated submission to the sink. The worker drops it afterwards.
    Deliver(ContactSubmission),
}
