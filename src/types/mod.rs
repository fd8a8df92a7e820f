//! 类型系统模块：定义转换结果类型与 Responses API 线上数据结构。
//!
//! # Types Module
//!
//! Typed values produced by conversion, plus the Responses API wire shapes they are
//! decoded from.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ModelResult`] | Outcome of a conversion (text, tool calls, choices, stream) |
//! | [`TokenUsage`] | Token accounting with independently optional counters |
//! | [`ToolCall`] | Function call requested by the model |
//! | [`StreamChunk`] | Element of a [`StreamResult`]: a text fragment or the final usage |
//! | [`OutputItem`] | One entry of a response's `output` list |
//! | [`ResponsesStreamEvent`] | One streaming event body |
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`result`] | Result variants |
//! | [`usage`] | Token usage record |
//! | [`tool`] | Tool call type |
//! | [`output`] | `output` item and content part wire shapes |
//! | [`events`] | Streaming event wire shapes |

pub mod events;
pub mod output;
pub mod result;
pub mod tool;
pub mod usage;

pub use events::ResponsesStreamEvent;
pub use output::{ContentPart, OutputItem};
pub use result::{
    Choice, ChoiceResult, ModelResult, StreamChunk, StreamResult, TextResult, ToolCallResult,
};
pub use tool::ToolCall;
pub use usage::TokenUsage;
