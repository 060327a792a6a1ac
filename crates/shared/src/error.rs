use thiserror::Error;

/// Rejections raised while constructing domain values from raw input or wire data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("ttl must be finite, got {0}")]
    NonFiniteTtl(f64),
    #[error("ttl must be greater than zero, got {0}")]
    NonPositiveTtl(f64),
    #[error("short code must not be empty")]
    EmptyCode,
}
