//! Command orchestration from UI effects to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::SinkError;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), SinkError> {
    let cmd_name = match &cmd {
        BackendCommand::Deliver(_) => "deliver_submission",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(SinkError::Unavailable(
            "submission queue is full; please retry".to_string(),
        )),
        Err(TrySendError::Disconnected(_)) => Err(SinkError::Unavailable(
            "submission worker disconnected (possible startup failure)".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::{ContactMethod, ContactSubmission};

    use super::*;

    fn deliver() -> BackendCommand {
        BackendCommand::Deliver(ContactSubmission::new(ContactMethod::Handle, "john.doe"))
    }

    #[test]
    fn queues_command_when_worker_is_listening() {
        let (cmd_tx, cmd_rx) = bounded(1);
        dispatch_backend_command(&cmd_tx, deliver()).expect("queued");
        assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::Deliver(_))));
    }

    #[test]
    fn full_queue_is_reported_as_unavailable() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        dispatch_backend_command(&cmd_tx, deliver()).expect("first fits");
        let err = dispatch_backend_command(&cmd_tx, deliver()).expect_err("queue full");
        assert!(err.to_string().contains("queue is full"));
    }

    #[test]
    fn disconnected_worker_is_reported_as_unavailable() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let err = dispatch_backend_command(&cmd_tx, deliver()).expect_err("disconnected");
        assert!(err.to_string().contains("disconnected"));
    }
}
