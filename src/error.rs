use crate::error_code::StandardErrorCode;
use crate::transport::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Decoded `error` sub-document of a Responses API body.
///
/// Every field is optional; the API omits or nulls them freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub code: Option<String>,
    pub error_type: Option<String>,
    pub param: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorDetail {
    /// Read the known fields out of an `error` object. Non-string scalars
    /// (numeric codes, booleans) are rendered with their JSON text.
    pub fn from_value(error: &Value) -> Self {
        Self {
            code: scalar_text(error.get("code")),
            error_type: scalar_text(error.get("type")),
            param: scalar_text(error.get("param")),
            message: scalar_text(error.get("message")),
        }
    }

    /// `Error "{code}"-{type} ({param}): "{message}".` with absent fields left empty.
    pub fn diagnostic(&self) -> String {
        format!(
            "Error \"{}\"-{} ({}): \"{}\".",
            self.code.as_deref().unwrap_or_default(),
            self.error_type.as_deref().unwrap_or_default(),
            self.param.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default(),
        )
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}

/// Terminal failure of a conversion.
///
/// The four taxonomy variants display exactly their message; callers match on it.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP 401 from the upstream API.
    #[error("{message}")]
    Authentication { message: String },

    /// HTTP 400 from the upstream API, with or without a body.
    #[error("{message}")]
    BadRequest { message: String },

    /// Upstream rejected the content for policy reasons (`content_filter` code).
    #[error("{message}")]
    ContentFilter { message: String },

    /// Any other API error, or a structurally unusable body.
    #[error("{message}")]
    Runtime {
        message: String,
        detail: Option<ApiErrorDetail>,
    },

    /// Raised while pulling streaming events from the transport.
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime {
            message: message.into(),
            detail: None,
        }
    }

    /// Runtime error carrying the decoded API error sub-document.
    pub fn api(detail: ApiErrorDetail) -> Self {
        Error::Runtime {
            message: detail.diagnostic(),
            detail: Some(detail),
        }
    }

    /// The diagnostic text, identical to `Display` for the taxonomy variants.
    pub fn message(&self) -> String {
        match self {
            Error::Authentication { message }
            | Error::BadRequest { message }
            | Error::ContentFilter { message }
            | Error::Runtime { message, .. } => message.clone(),
            Error::Transport(e) => e.to_string(),
        }
    }

    pub fn detail(&self) -> Option<&ApiErrorDetail> {
        match self {
            Error::Runtime { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// Map onto the standard error code set.
    pub fn standard_code(&self) -> StandardErrorCode {
        match self {
            Error::Authentication { .. } => StandardErrorCode::Authentication,
            Error::BadRequest { .. } => StandardErrorCode::InvalidRequest,
            Error::ContentFilter { .. } => StandardErrorCode::ContentFiltered,
            Error::Runtime {
                detail: Some(detail),
                ..
            } => detail
                .code
                .as_deref()
                .and_then(StandardErrorCode::from_provider_code)
                .or_else(|| {
                    detail
                        .error_type
                        .as_deref()
                        .and_then(StandardErrorCode::from_provider_code)
                })
                .unwrap_or(StandardErrorCode::Unknown),
            Error::Runtime { detail: None, .. } => StandardErrorCode::Unknown,
            Error::Transport(TransportError::Status { status, .. }) => {
                StandardErrorCode::from_http_status(*status)
            }
            Error::Transport(_) => StandardErrorCode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_diagnostic_renders_all_fields() {
        let detail = ApiErrorDetail::from_value(&json!({
            "code": "invalid_request_error",
            "type": "invalid_request",
            "param": "model",
            "message": "The model `gpt-5` does not exist"
        }));
        assert_eq!(
            detail.diagnostic(),
            "Error \"invalid_request_error\"-invalid_request (model): \"The model `gpt-5` does not exist\"."
        );
    }

    #[test]
    fn test_diagnostic_keeps_empty_segments() {
        let detail = ApiErrorDetail::from_value(&json!({"message": "boom", "param": null}));
        assert_eq!(detail.diagnostic(), "Error \"\"- (): \"boom\".");
    }

    #[test]
    fn test_numeric_code_is_rendered() {
        let detail = ApiErrorDetail::from_value(&json!({"code": 500, "message": "oops"}));
        assert_eq!(detail.code.as_deref(), Some("500"));
    }

    #[test]
    fn test_standard_code_mapping() {
        let auth = Error::Authentication {
            message: "nope".into(),
        };
        assert_eq!(auth.standard_code(), StandardErrorCode::Authentication);

        let api = Error::api(ApiErrorDetail {
            code: Some("rate_limit_exceeded".into()),
            ..Default::default()
        });
        assert_eq!(api.standard_code(), StandardErrorCode::RateLimited);
        assert!(api.standard_code().retryable());

        let by_type = Error::api(ApiErrorDetail {
            code: Some("something_new".into()),
            error_type: Some("invalid_request_error".into()),
            ..Default::default()
        });
        assert_eq!(by_type.standard_code(), StandardErrorCode::InvalidRequest);

        assert_eq!(
            Error::runtime("Response does not contain output").standard_code(),
            StandardErrorCode::Unknown
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = Error::ContentFilter {
            message: "Content was filtered".into(),
        };
        assert_eq!(err.to_string(), "Content was filtered");
        assert_eq!(err.message(), "Content was filtered");
    }
}
