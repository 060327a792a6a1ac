//! Failure taxonomy for a single shorten attempt.

use thiserror::Error;

pub const INVALID_TTL_MESSAGE: &str = "TTL must be a positive number (seconds) or empty.";
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Transport,
    Parse,
}

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("TTL must be a positive number (seconds) or empty.")]
    InvalidTtl,
    /// Non-2xx reply; the body, when present, is the service's human-readable reason.
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    /// The request never left the process (worker queue full or gone).
    #[error("{0}")]
    Dispatch(String),
}

fn status_message(status: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("Request failed ({status})")
    } else {
        body.to_string()
    }
}

impl ShortenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShortenError::InvalidTtl => ErrorCategory::Validation,
            ShortenError::Status { .. } | ShortenError::Http(_) | ShortenError::Dispatch(_) => {
                ErrorCategory::Transport
            }
            ShortenError::Parse(_) => ErrorCategory::Parse,
        }
    }

    /// The one message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_body_text() {
        let err = ShortenError::Status {
            status: 409,
            body: "URL already exists with different TTL".to_string(),
        };
        assert_eq!(err.user_message(), "URL already exists with different TTL");
        assert_eq!(err.category(), ErrorCategory::Transport);
    }

    #[test]
    fn status_error_without_body_uses_template() {
        let err = ShortenError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed (500)");
    }

    #[test]
    fn empty_message_falls_back_to_generic_text() {
        let err = ShortenError::Dispatch(String::new());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn parse_errors_carry_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = source.to_string();
        let err = ShortenError::from(source);
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert_eq!(err.user_message(), expected);
    }

    #[test]
    fn invalid_ttl_message_is_exact() {
        assert_eq!(ShortenError::InvalidTtl.user_message(), INVALID_TTL_MESSAGE);
        assert_eq!(ShortenError::InvalidTtl.category(), ErrorCategory::Validation);
    }
}
