//! Command orchestration helpers from UI actions to backend command queue.

use client_core::ShortenError;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    reducer::{reduce, ShortenerModel},
};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), ShortenError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(ShortenError::Dispatch(
                "UI command queue is full; please retry".to_string(),
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(ShortenError::Dispatch(
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string(),
            ))
        }
    }
}

/// Handles a submit action: starts the attempt and hands it to the backend worker.
///
/// A command that cannot be queued settles the attempt immediately so the form never sticks in
/// the pending state.
pub fn submit_form(model: &mut ShortenerModel, cmd_tx: &Sender<BackendCommand>) {
    let Some(cmd) = model.begin_submit() else {
        return;
    };
    let submission = model.current_submission();
    if let Err(err) = dispatch_backend_command(cmd_tx, cmd) {
        reduce(
            model,
            UiEvent::ShortenCompleted {
                submission,
                outcome: Err(err),
            },
        );
    }
}
