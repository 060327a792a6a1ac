//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::{ClientSettings, ErrorCategory, ShortenerClient, SubmissionController};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: ClientSettings,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("shortener-backend".to_string())
        .spawn(move || run_worker(cmd_rx, ui_tx, settings))
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    deliver(&ui_tx, UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            deliver(
                &ui_tx,
                UiEvent::Error(UiError::new(
                    ErrorCategory::Transport,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )),
            );
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let controller = Arc::new(SubmissionController::new(ShortenerClient::from_settings(
            &settings,
        )));
        tracing::info!(api_base = %settings.api_base, "backend worker ready");
        deliver(&ui_tx, UiEvent::BackendReady);

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Shorten {
                    submission,
                    request,
                } => {
                    let controller = Arc::clone(&controller);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let outcome = controller.shorten(&request).await;
                        deliver_completion(
                            &ui_tx,
                            UiEvent::ShortenCompleted {
                                submission,
                                outcome,
                            },
                        );
                    });
                }
            }
        }
        tracing::debug!("ui command queue closed; backend worker exiting");
    });
}

fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if let Err(err) = ui_tx.try_send(event) {
        tracing::error!("failed to deliver backend event to ui: {err}");
    }
}

/// Completions wait for queue space; only a closed UI drops them.
fn deliver_completion(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::warn!("ui event queue closed; dropping shorten completion");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use client_core::{ShortenResult, SubmissionId};
    use crossbeam_channel::bounded;
    use shared::domain::ShortCode;

    use super::*;

    fn completion() -> UiEvent {
        UiEvent::ShortenCompleted {
            submission: SubmissionId(1),
            outcome: Ok(ShortenResult {
                code: ShortCode::new("abc123").expect("code"),
                short_url: "http://localhost:8000/abc123".to_string(),
            }),
        }
    }

    #[test]
    fn completion_waits_for_a_full_ui_queue() {
        let (ui_tx, ui_rx) = bounded(1);
        deliver(&ui_tx, UiEvent::Info("Backend worker starting...".to_string()));

        let sender = thread::spawn(move || deliver_completion(&ui_tx, completion()));
        thread::sleep(Duration::from_millis(50));

        assert!(matches!(ui_rx.recv(), Ok(UiEvent::Info(_))));
        match ui_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(UiEvent::ShortenCompleted {
                submission,
                outcome,
            }) => {
                assert_eq!(submission, SubmissionId(1));
                assert_eq!(outcome.expect("result").code.as_str(), "abc123");
            }
            _ => panic!("completion was not delivered"),
        }
        sender.join().expect("sender thread");
    }

    #[test]
    fn completion_to_a_closed_ui_is_dropped() {
        let (ui_tx, ui_rx) = bounded(1);
        drop(ui_rx);
        deliver_completion(&ui_tx, completion());
    }
}
