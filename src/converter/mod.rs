//! 结果转换模块：将原始响应转换为类型化结果，并对失败响应进行错误分类。
//!
//! # Result Converter
//!
//! Turns a [`RawResult`] into a [`ModelResult`] or a typed [`Error`].
//!
//! ```text
//! non-streaming:  to_json(check) ──ok──> error? ──> output[] ──> Text | ToolCalls | Choice
//!                       │                  │
//!                       └─fail─> status 400/401 ─> BadRequest | Authentication
//!                                          └─────> ContentFilter | Runtime
//!
//! streaming:      events ──> Delta("...")* ──> Usage(TokenUsage)?
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error_classification`] | Status and error sub-document classification |

pub mod error_classification;
mod stream;

use crate::raw::RawResult;
use crate::tokens::TokenUsageExtractor;
use crate::transport::TransportError;
use crate::types::{
    Choice, ChoiceResult, ModelResult, OutputItem, TextResult, ToolCall, ToolCallResult,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error_classification::{classify, classify_body, classify_error_document, classify_status};

pub const NO_OUTPUT_MESSAGE: &str = "Response does not contain output";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Convert the raw result's event stream instead of its body.
    pub stream: bool,
}

impl ConvertOptions {
    pub fn streaming() -> Self {
        Self { stream: true }
    }

    /// Read options from a loose option map; unknown keys are ignored.
    pub fn from_value(options: &Value) -> Self {
        Self {
            stream: options
                .get("stream")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

/// Stateless converter; one instance can serve any number of concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultConverter {
    usage: TokenUsageExtractor,
}

impl ResultConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a raw result.
    ///
    /// Streaming conversions return immediately; failures inside the stream surface as
    /// stream items. Non-streaming conversions yield exactly one result or one error.
    pub fn convert(&self, raw: &dyn RawResult, options: &ConvertOptions) -> Result<ModelResult> {
        if options.stream {
            return Ok(ModelResult::Stream(stream::convert_stream(raw, self.usage)));
        }

        let result = self.convert_response(raw);
        match &result {
            Ok(converted) => tracing::debug!(kind = converted.kind(), "converted response"),
            Err(e) => tracing::debug!(code = %e.standard_code(), error = %e, "response conversion failed"),
        }
        result
    }

    fn convert_response(&self, raw: &dyn RawResult) -> Result<ModelResult> {
        let response = raw
            .object()
            .ok_or_else(|| Error::runtime("Raw result does not carry an HTTP response"))?;

        let data = match response.to_json(true) {
            Ok(data) => {
                if let Some(error) = classify_body(&data) {
                    return Err(error);
                }
                data
            }
            Err(err) => {
                let status = response.status_code();
                let body = response.to_json(false).ok();
                if let Some(error) = classify(status, body.as_ref()) {
                    return Err(error);
                }
                body.ok_or_else(|| undecodable(status, &err))?
            }
        };

        let output = data
            .get("output")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::runtime(NO_OUTPUT_MESSAGE))?;

        let mut choices = Vec::with_capacity(output.len());
        for (index, item) in output.iter().enumerate() {
            if let Some(choice) = convert_output_item(index, item)? {
                choices.push(choice);
            }
        }

        if choices.len() > 1 {
            return Ok(ModelResult::Choice(ChoiceResult::new(choices)));
        }
        choices
            .pop()
            .map(ModelResult::from)
            .ok_or_else(|| Error::runtime(NO_OUTPUT_MESSAGE))
    }
}

fn undecodable(status: u16, err: &TransportError) -> Error {
    tracing::warn!(status, error = %err, "response body could not be decoded");
    Error::runtime(format!("Unable to decode response (HTTP {status}): {err}"))
}

/// `None` for items that carry no result value (reasoning summaries).
fn convert_output_item(index: usize, item: &Value) -> Result<Option<Choice>> {
    let parsed = OutputItem::deserialize(item)
        .map_err(|e| Error::runtime(format!("Malformed output item at index {index}: {e}")))?;

    let choice = match parsed {
        message @ OutputItem::Message { .. } => {
            Choice::Text(TextResult::new(message.output_text().unwrap_or_default()))
        }
        OutputItem::FunctionCall {
            id,
            name,
            arguments,
        } => Choice::ToolCalls(ToolCallResult::new(vec![ToolCall::decode(
            id, name, &arguments,
        )?])),
        OutputItem::Reasoning => return Ok(None),
        OutputItem::Unsupported => {
            let item_type = item.get("type").and_then(Value::as_str).unwrap_or_default();
            return Err(Error::runtime(format!(
                "Unsupported output item type \"{item_type}\""
            )));
        }
    };
    Ok(Some(choice))
}
