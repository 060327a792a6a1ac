//! Backend commands queued from UI to backend worker.

use client_core::{SubmissionId, ValidatedRequest};

#[derive(Debug)]
pub enum BackendCommand {
    Shorten {
        submission: SubmissionId,
        request: ValidatedRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Shorten { .. } => "shorten",
        }
    }
}
