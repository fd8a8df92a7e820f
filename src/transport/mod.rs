//! Transport-facing capability set.
//!
//! The converter never performs network I/O. It reads a [`TransportResponse`]:
//! status code, lowercase multi-valued headers, raw body and an eager JSON decode
//! that can be told to skip the status check. [`HttpResponse`] is the materialised
//! implementation; [`http`] builds one from a `reqwest::Response` and [`sse`]
//! turns a streaming body into decoded events.

pub mod http;
pub mod sse;

use bytes::Bytes;
use serde_json::Value;
use std::collections::HashMap;

pub use sse::{SseConfig, SseDecoder};

/// Header name (lowercase) to every value received for it, in order.
pub type HeaderMap = HashMap<String, Vec<String>>;

/// Transport-level failures surfaced while decoding or streaming a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {status} returned by upstream")]
    Status { status: u16 },

    #[error("Response body is empty")]
    EmptyBody,

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("JSON content was expected to decode to an object, got {0}")]
    UnexpectedShape(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// First value of a header, treating a missing key and an empty list alike.
pub fn first_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(&name.to_ascii_lowercase())
        .and_then(|values| values.first())
        .map(String::as_str)
}

pub trait TransportResponse: Send + Sync {
    fn status_code(&self) -> u16;

    fn headers(&self) -> &HeaderMap;

    fn content(&self) -> &[u8];

    /// Decode the body into a JSON object.
    ///
    /// With `check_status` set, any status >= 300 fails before the body is read.
    /// Unreadable bodies fail either way.
    fn to_json(&self, check_status: bool) -> Result<Value, TransportError> {
        let status = self.status_code();
        if check_status && status >= 300 {
            return Err(TransportError::Status { status });
        }
        decode_object(self.content())
    }
}

fn decode_object(content: &[u8]) -> Result<Value, TransportError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(TransportError::EmptyBody);
    }
    match serde_json::from_slice::<Value>(content)? {
        value @ Value::Object(_) => Ok(value),
        Value::Array(_) => Err(TransportError::UnexpectedShape("array")),
        Value::String(_) => Err(TransportError::UnexpectedShape("string")),
        Value::Number(_) => Err(TransportError::UnexpectedShape("number")),
        Value::Bool(_) => Err(TransportError::UnexpectedShape("bool")),
        Value::Null => Err(TransportError::UnexpectedShape("null")),
    }
}

/// A fully received HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header value; the name is stored lowercase.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_json(self, body: &Value) -> Self {
        self.with_body(body.to_string())
    }
}

impl TransportResponse for HttpResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn content(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_header_is_case_insensitive() {
        let response = HttpResponse::new(200)
            .with_header("X-RateLimit-Remaining-Tokens", "9000")
            .with_header("x-ratelimit-remaining-tokens", "8000");
        assert_eq!(
            first_header(response.headers(), "x-ratelimit-remaining-tokens"),
            Some("9000")
        );
        assert_eq!(first_header(response.headers(), "retry-after"), None);
    }

    #[test]
    fn test_empty_header_list_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining-tokens".into(), Vec::new());
        assert_eq!(first_header(&headers, "x-ratelimit-remaining-tokens"), None);
    }

    #[test]
    fn test_to_json_checks_status_only_when_asked() {
        let response = HttpResponse::new(404).with_json(&json!({"error": {"message": "gone"}}));
        assert!(matches!(
            response.to_json(true),
            Err(TransportError::Status { status: 404 })
        ));
        assert_eq!(
            response.to_json(false).unwrap()["error"]["message"],
            "gone"
        );
    }

    #[test]
    fn test_to_json_rejects_unreadable_bodies() {
        assert!(matches!(
            HttpResponse::new(200).to_json(false),
            Err(TransportError::EmptyBody)
        ));
        assert!(matches!(
            HttpResponse::new(200).with_body("not json").to_json(true),
            Err(TransportError::Decode(_))
        ));
        assert!(matches!(
            HttpResponse::new(200).with_body("[1, 2]").to_json(true),
            Err(TransportError::UnexpectedShape("array"))
        ));
    }
}
