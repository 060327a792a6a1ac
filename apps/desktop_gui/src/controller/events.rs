//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{ErrorCategory, ShortenError, ShortenResult, SubmissionId};

pub enum UiEvent {
    Info(String),
    BackendReady,
    Error(UiError),
    ShortenCompleted {
        submission: SubmissionId,
        outcome: Result<ShortenResult, ShortenError>,
    },
}

/// A failure outside any single submission, shown in the status banner.
#[derive(Debug, Clone)]
pub struct UiError {
    category: ErrorCategory,
    message: String,
}

impl UiError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::Transport => "Transport",
        ErrorCategory::Validation => "Validation",
        ErrorCategory::Parse => "Response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_category_it_was_built_with() {
        // No keyword in the text decides the category.
        let err = UiError::new(ErrorCategory::Transport, "invalid json from parse");
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert_eq!(err.message(), "invalid json from parse");
        assert_eq!(err_label(err.category()), "Transport");
    }

    #[test]
    fn labels_each_category() {
        assert_eq!(err_label(ErrorCategory::Validation), "Validation");
        assert_eq!(err_label(ErrorCategory::Parse), "Response");
    }
}
