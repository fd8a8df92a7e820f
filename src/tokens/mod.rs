//! Token 用量模块：从响应体和限流响应头中提取 Token 统计。
//!
//! # Token Usage Module
//!
//! Normalises the `usage` sub-document of a Responses API body and the
//! `x-ratelimit-remaining-tokens` header into a [`TokenUsage`](crate::types::TokenUsage).
//!
//! | Source | Field |
//! |--------|-------|
//! | `usage.input_tokens` | `prompt_tokens` |
//! | `usage.output_tokens` | `completion_tokens` |
//! | `usage.output_tokens_details.reasoning_tokens` | `thinking_tokens` |
//! | `usage.input_tokens_details.cached_tokens` | `cached_tokens` |
//! | `usage.total_tokens` | `total_tokens` |
//! | `x-ratelimit-remaining-tokens` header | `remaining_tokens` |
//!
//! ```rust
//! use responses_convert::tokens::TokenUsageExtractor;
//!
//! let data = serde_json::json!({"usage": {"input_tokens": 11, "total_tokens": 18}});
//! let usage = TokenUsageExtractor::new().from_data(&data, Some("9000"));
//! assert_eq!(usage.prompt_tokens(), Some(11));
//! assert_eq!(usage.completion_tokens(), None);
//! assert_eq!(usage.remaining_tokens(), Some(9000));
//! ```

mod extractor;

pub use extractor::{TokenUsageExtractor, RATE_LIMIT_REMAINING_TOKENS};
