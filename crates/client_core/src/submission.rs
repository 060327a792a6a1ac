//! Submission lifecycle: clear stale output, validate, go pending, then settle on one outcome.

use shared::{
    domain::ShortCode,
    protocol::{ShortenRequest, ShortenResponse},
};
use tracing::{debug, info, warn};

use crate::{
    error::ShortenError,
    form::{FormState, ValidatedRequest},
    ShortenApi,
};

/// Sequence number of a submit action, used to attribute completions to the attempt that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub code: ShortCode,
    pub short_url: String,
}

impl From<ShortenResponse> for ShortenResult {
    fn from(response: ShortenResponse) -> Self {
        Self {
            code: response.code,
            short_url: response.short_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(ShortenResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn result(&self) -> Option<&ShortenResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Starts an attempt. Any previous result or error is discarded first.
    ///
    /// Returns the request to issue, or `None` when the TTL is rejected; in that case the state is
    /// already `Failed` and no request must be sent.
    pub fn begin(&mut self, form: &FormState) -> Option<ValidatedRequest> {
        *self = SubmissionState::Idle;
        match form.validate() {
            Ok(request) => {
                *self = SubmissionState::Pending;
                Some(request)
            }
            Err(err) => {
                debug!(ttl_text = form.ttl_text(), "rejected ttl before submission");
                *self = SubmissionState::Failed(err.user_message());
                None
            }
        }
    }

    /// Replaces `Pending` with the terminal state for this attempt.
    pub fn complete(&mut self, outcome: Result<ShortenResult, ShortenError>) {
        if !self.is_pending() {
            warn!("completing a submission that was not pending");
        }
        *self = match outcome {
            Ok(result) => {
                info!(code = %result.code, short_url = %result.short_url, "url shortened");
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                warn!(category = ?err.category(), "shorten attempt failed: {err}");
                SubmissionState::Failed(err.user_message())
            }
        };
    }
}

/// Drives shorten attempts against a [`ShortenApi`].
pub struct SubmissionController<A> {
    api: A,
}

impl<A: ShortenApi> SubmissionController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Issues the network call for an already validated request.
    pub async fn shorten(&self, request: &ValidatedRequest) -> Result<ShortenResult, ShortenError> {
        let wire = ShortenRequest::from(request);
        info!(url = %wire.url, ttl_seconds = ?wire.ttl_seconds, dedupe = wire.dedupe, "submitting shorten request");
        self.api.shorten(&wire).await.map(ShortenResult::from)
    }

    /// Runs one complete attempt: validation, request, and the final state transition.
    pub async fn submit(&self, form: &FormState, state: &mut SubmissionState) {
        let Some(request) = state.begin(form) else {
            return;
        };
        let outcome = self.shorten(&request).await;
        state.complete(outcome);
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
