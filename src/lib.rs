//! # responses-convert
//!
//! 这是 Responses API 结果转换库，将原始响应统一转换为文本、工具调用、多选项或流式结果。
//!
//! Typed conversion of OpenAI-style Responses API payloads.
//!
//! ## Overview
//!
//! The crate sits between a transport (which performs the HTTP call) and a caller that wants
//! one uniform result value whatever shape the API produced. It:
//!
//! - converts a response body into text, tool calls or multiple choices,
//! - converts a streaming response into text fragments followed by token usage,
//! - classifies failure responses into a closed set of typed errors,
//! - extracts token accounting from the body and the rate-limit header.
//!
//! Every component is stateless; conversions are independent and may run concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use responses_convert::{ConvertOptions, HttpResponse, ModelResult, RawHttpResult, ResultConverter};
//!
//! let body = serde_json::json!({
//!     "output": [{
//!         "type": "message",
//!         "role": "assistant",
//!         "content": [{"type": "output_text", "text": "Hello world"}]
//!     }]
//! });
//! let raw = RawHttpResult::new(HttpResponse::new(200).with_json(&body));
//!
//! let result = ResultConverter::new().convert(&raw, &ConvertOptions::default())?;
//! match result {
//!     ModelResult::Text(text) => assert_eq!(text.content(), "Hello world"),
//!     other => panic!("unexpected {}", other.kind()),
//! }
//! # Ok::<(), responses_convert::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`converter`] | Result conversion and error classification |
//! | [`tokens`] | Token usage extraction |
//! | [`types`] | Result values and wire shapes |
//! | [`raw`] | Raw result capability set |
//! | [`transport`] | Transport response capability set, SSE decoding, reqwest adapter |
//! | [`error_code`] | Standard error codes |

pub mod converter;
pub mod error_code;
pub mod raw;
pub mod tokens;
pub mod transport;
pub mod types;

pub use converter::{ConvertOptions, ResultConverter};
pub use raw::{RawHttpResult, RawResult};
pub use tokens::TokenUsageExtractor;
pub use transport::{HttpResponse, TransportResponse};
pub use types::{
    Choice, ChoiceResult, ModelResult, StreamChunk, StreamResult, TextResult, TokenUsage,
    ToolCall, ToolCallResult,
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{ApiErrorDetail, Error};
