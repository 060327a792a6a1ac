//! Editable form fields and their conversion into a validated shorten request.

use shared::{domain::TtlSeconds, protocol::ShortenRequest};

use crate::{error::ShortenError, submission::SubmissionState};

/// Raw user input. Text is kept exactly as typed; nothing is validated until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    url: String,
    ttl_text: String,
    dedupe: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            url: String::new(),
            ttl_text: String::new(),
            dedupe: true,
        }
    }
}

impl FormState {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ttl_text(&self) -> &str {
        &self.ttl_text
    }

    pub fn dedupe(&self) -> bool {
        self.dedupe
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_ttl_text(&mut self, ttl_text: impl Into<String>) {
        self.ttl_text = ttl_text.into();
    }

    pub fn set_dedupe(&mut self, dedupe: bool) {
        self.dedupe = dedupe;
    }

    pub fn validate(&self) -> Result<ValidatedRequest, ShortenError> {
        Ok(ValidatedRequest {
            url: self.url.clone(),
            ttl_seconds: parse_ttl(&self.ttl_text)?,
            dedupe: self.dedupe,
        })
    }
}

/// Snapshot of the form taken at submit time. Owned by the in-flight attempt and never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub url: String,
    pub ttl_seconds: Option<TtlSeconds>,
    pub dedupe: bool,
}

impl From<&ValidatedRequest> for ShortenRequest {
    fn from(request: &ValidatedRequest) -> Self {
        ShortenRequest {
            url: request.url.clone(),
            ttl_seconds: request.ttl_seconds,
            dedupe: request.dedupe,
        }
    }
}

/// Blank means "no expiry"; anything else must be a positive, finite decimal number.
pub fn parse_ttl(text: &str) -> Result<Option<TtlSeconds>, ShortenError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let seconds = match parse_radix_literal(trimmed) {
        Some(parsed) => parsed.ok_or(ShortenError::InvalidTtl)?,
        None => trimmed
            .parse::<f64>()
            .map_err(|_| ShortenError::InvalidTtl)?,
    };
    TtlSeconds::new(seconds)
        .map(Some)
        .map_err(|_| ShortenError::InvalidTtl)
}

/// Unsigned `0x`/`0o`/`0b` integer literals, prefix case-insensitive.
///
/// Returns `None` when `text` carries no radix prefix, `Some(None)` when the prefix is present but
/// the digits are missing or invalid for that radix.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    }))
}

pub fn can_submit(form: &FormState, state: &SubmissionState) -> bool {
    !form.url.trim().is_empty() && !state.is_pending()
}
