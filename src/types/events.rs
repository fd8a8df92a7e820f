//! Streaming events of the Responses API

use serde::Deserialize;
use serde_json::Value;

/// One decoded streaming event body, dispatched on its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ResponsesStreamEvent {
    /// Text fragment of the assistant message.
    #[serde(
        rename = "message.delta.output_text.delta",
        alias = "response.output_text.delta"
    )]
    OutputTextDelta { delta: String },

    /// Terminal event carrying the full response, including `usage`.
    #[serde(rename = "response.completed")]
    Completed {
        #[serde(default)]
        response: Value,
    },

    /// Any other event type; ignored by consumers.
    #[serde(other)]
    Other,
}
