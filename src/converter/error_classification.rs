//! Error classification logic
//!
//! Pure functions of `(status, decoded body)`; the converter calls them but they carry
//! no state and can be exercised directly.

use crate::error::{ApiErrorDetail, Error};
use serde_json::Value;

pub const BAD_REQUEST_FALLBACK: &str = "Bad Request";
pub const UNAUTHORIZED_FALLBACK: &str = "Unauthorized";
pub const CONTENT_FILTER_FALLBACK: &str = "Content filtered";

const CONTENT_FILTER_CODE: &str = "content_filter";

/// Classify a response whose status-checked decode failed.
///
/// Only 400 and 401 are decided by status; everything else falls through to the body.
pub fn classify_status(status: u16, body: Option<&Value>) -> Option<Error> {
    let message = || {
        body.and_then(|b| b.pointer("/error/message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    match status {
        400 => Some(Error::BadRequest {
            message: message().unwrap_or_else(|| BAD_REQUEST_FALLBACK.to_string()),
        }),
        401 => Some(Error::Authentication {
            message: message().unwrap_or_else(|| UNAUTHORIZED_FALLBACK.to_string()),
        }),
        _ => None,
    }
}

/// Classify a decoded body carrying a non-null `error` sub-document.
pub fn classify_body(body: &Value) -> Option<Error> {
    body.get("error")
        .filter(|error| !error.is_null())
        .map(classify_error_document)
}

/// Turn an `error` sub-document into a typed error.
///
/// `content_filter` codes become [`Error::ContentFilter`]; everything else becomes a
/// runtime error with the `Error "{code}"-{type} ({param}): "{message}".` diagnostic.
pub fn classify_error_document(error: &Value) -> Error {
    let detail = ApiErrorDetail::from_value(error);
    if detail.code.as_deref() == Some(CONTENT_FILTER_CODE) {
        return Error::ContentFilter {
            message: detail
                .message
                .unwrap_or_else(|| CONTENT_FILTER_FALLBACK.to_string()),
        };
    }
    Error::api(detail)
}

/// Status first, then the body's `error` sub-document. `None` when neither indicates a failure.
pub fn classify(status: u16, body: Option<&Value>) -> Option<Error> {
    let error = classify_status(status, body).or_else(|| body.and_then(classify_body));
    if let Some(ref e) = error {
        tracing::debug!(status, code = %e.standard_code(), "classified upstream failure");
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bad_request_with_and_without_message() {
        let body = json!({"error": {"message": "Bad Request: invalid parameters"}});
        let err = classify(400, Some(&body)).unwrap();
        assert!(matches!(err, Error::BadRequest { .. }));
        assert_eq!(err.message(), "Bad Request: invalid parameters");

        let err = classify(400, None).unwrap();
        assert!(matches!(err, Error::BadRequest { .. }));
        assert_eq!(err.message(), "Bad Request");

        let err = classify(400, Some(&json!({"error": {}}))).unwrap();
        assert_eq!(err.message(), "Bad Request");
    }

    #[test]
    fn test_unauthorized() {
        let body = json!({"error": {"message": "Invalid API key provided: sk-invalid"}});
        let err = classify(401, Some(&body)).unwrap();
        assert!(matches!(err, Error::Authentication { .. }));
        assert_eq!(err.message(), "Invalid API key provided: sk-invalid");

        assert_eq!(classify(401, None).unwrap().message(), "Unauthorized");
    }

    #[test]
    fn test_status_wins_over_body_code() {
        let body = json!({"error": {"code": "content_filter", "message": "filtered"}});
        assert!(matches!(
            classify(400, Some(&body)),
            Some(Error::BadRequest { .. })
        ));
    }

    #[test]
    fn test_content_filter_regardless_of_status() {
        let body = json!({"error": {"code": "content_filter", "message": "Content was filtered"}});
        for status in [200, 403, 500] {
            let err = classify(status, Some(&body)).unwrap();
            assert!(matches!(err, Error::ContentFilter { .. }));
            assert_eq!(err.message(), "Content was filtered");
        }
    }

    #[test]
    fn test_generic_api_error() {
        let body = json!({"error": {
            "code": "invalid_request_error",
            "type": "invalid_request",
            "param": "model",
            "message": "The model `gpt-5` does not exist"
        }});
        let err = classify(404, Some(&body)).unwrap();
        assert_eq!(
            err.to_string(),
            "Error \"invalid_request_error\"-invalid_request (model): \"The model `gpt-5` does not exist\"."
        );
        assert_eq!(err.detail().and_then(|d| d.param.as_deref()), Some("model"));
    }

    #[test]
    fn test_no_failure() {
        assert!(classify(200, Some(&json!({"output": [], "error": null}))).is_none());
        assert!(classify(500, None).is_none());
    }
}
