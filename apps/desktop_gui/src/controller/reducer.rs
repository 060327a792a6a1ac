//! Reducer-like state transitions for the shortener window.
//!
//! The UI thread is the only writer of [`ShortenerModel`]; backend completions reach it as
//! [`UiEvent`]s drained once per frame.

use client_core::{can_submit, FormState, SubmissionId, SubmissionState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiEvent};

#[derive(Debug)]
pub struct ShortenerModel {
    pub form: FormState,
    pub submission: SubmissionState,
    pub status: String,
    pub status_banner: Option<UiError>,
    pub backend_ready: bool,
    current_submission: SubmissionId,
}

impl Default for ShortenerModel {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            submission: SubmissionState::Idle,
            status: "Backend worker not started".to_string(),
            status_banner: None,
            backend_ready: false,
            current_submission: SubmissionId::default(),
        }
    }
}

impl ShortenerModel {
    pub fn can_submit(&self) -> bool {
        can_submit(&self.form, &self.submission)
    }

    pub fn current_submission(&self) -> SubmissionId {
        self.current_submission
    }

    /// Clears stale output, validates the form and, when valid, goes pending and returns the
    /// command to queue. Returns `None` when submission is not allowed or the TTL is rejected.
    pub fn begin_submit(&mut self) -> Option<BackendCommand> {
        if !self.can_submit() {
            return None;
        }
        self.current_submission = self.current_submission.next();
        let request = self.submission.begin(&self.form)?;
        Some(BackendCommand::Shorten {
            submission: self.current_submission,
            request,
        })
    }
}

pub fn reduce(model: &mut ShortenerModel, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            model.status = message;
        }
        UiEvent::BackendReady => {
            model.backend_ready = true;
            model.status = "Backend worker ready".to_string();
        }
        UiEvent::Error(err) => {
            tracing::error!(
                category = err_label(err.category()),
                "{}",
                err.message()
            );
            model.status = err.message().to_string();
            model.status_banner = Some(err);
        }
        UiEvent::ShortenCompleted {
            submission,
            outcome,
        } => {
            if submission != model.current_submission {
                tracing::warn!(
                    ?submission,
                    current = ?model.current_submission,
                    "dropping completion for superseded submission"
                );
                return;
            }
            model.submission.complete(outcome);
        }
    }
}
