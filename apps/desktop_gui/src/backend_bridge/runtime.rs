//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use flow_core::SubmissionSink;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    sink: Box<dyn SubmissionSink>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                // Dropping cmd_rx here makes later dispatches report a disconnect.
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        if ui_tx
            .try_send(UiEvent::Info("submission worker ready".to_string()))
            .is_err()
        {
            tracing::warn!("ui event queue unavailable; dropping worker ready notice");
        }

        for cmd in cmd_rx.iter() {
            let event = runtime.block_on(process_command(sink.as_ref(), cmd));
            if ui_tx.try_send(event).is_err() {
                tracing::warn!("ui event queue unavailable; dropping backend event");
            }
        }
        tracing::debug!("backend command queue closed; worker exiting");
    })
}

async fn process_command(sink: &dyn SubmissionSink, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Deliver(submission) => match sink.deliver(&submission).await {
            Ok(()) => UiEvent::Delivered {
                method: submission.method,
            },
            Err(err) => {
                tracing::warn!(method = ?submission.method, "submission delivery failed: {err}");
                UiEvent::DeliveryFailed(err)
            }
        },
    }
}
