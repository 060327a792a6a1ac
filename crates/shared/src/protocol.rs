use serde::{Deserialize, Serialize};

use crate::domain::{ShortCode, TtlSeconds};

pub const SHORTEN_PATH: &str = "/shorten";

/// Joins the configured API base with the shorten route, tolerating a trailing slash on the base.
pub fn shorten_endpoint(api_base: &str) -> String {
    format!("{}{SHORTEN_PATH}", api_base.trim_end_matches('/'))
}

/// JSON body of `POST /shorten`.
///
/// `ttl_seconds` is always written; `None` goes out as `null` so the service applies no expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    pub ttl_seconds: Option<TtlSeconds>,
    pub dedupe: bool,
}

/// Success payload of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: ShortCode,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_ttl_serializes_explicit_null() {
        let request = ShortenRequest {
            url: "https://example.com".to_string(),
            ttl_seconds: None,
            dedupe: true,
        };
        assert_eq!(
            serde_json::to_string(&request).expect("json"),
            r#"{"url":"https://example.com","ttl_seconds":null,"dedupe":true}"#
        );
    }

    #[test]
    fn request_with_ttl_serializes_integer_seconds() {
        let request = ShortenRequest {
            url: "https://example.com/a".to_string(),
            ttl_seconds: Some(TtlSeconds::new(60.0).expect("ttl")),
            dedupe: false,
        };
        assert_eq!(
            serde_json::to_string(&request).expect("json"),
            r#"{"url":"https://example.com/a","ttl_seconds":60,"dedupe":false}"#
        );
    }

    #[test]
    fn response_requires_code_and_short_url() {
        let ok: ShortenResponse =
            serde_json::from_str(r#"{"code":"abc123","short_url":"http://localhost:8000/abc123"}"#)
                .expect("response");
        assert_eq!(ok.code.as_str(), "abc123");
        assert_eq!(ok.short_url, "http://localhost:8000/abc123");

        assert!(serde_json::from_str::<ShortenResponse>(r#"{"code":"abc123"}"#).is_err());
        assert!(serde_json::from_str::<ShortenResponse>(r#"{"code":7,"short_url":"x"}"#).is_err());
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            shorten_endpoint("http://localhost:8000"),
            "http://localhost:8000/shorten"
        );
        assert_eq!(
            shorten_endpoint("http://localhost:8000/"),
            "http://localhost:8000/shorten"
        );
    }
}
