//! Token usage extraction from Responses API bodies.

use crate::converter::ConvertOptions;
use crate::raw::RawResult;
use crate::transport::first_header;
use crate::types::TokenUsage;
use serde_json::Value;

/// Response header carrying the rate-limit token budget left.
pub const RATE_LIMIT_REMAINING_TOKENS: &str = "x-ratelimit-remaining-tokens";

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsageExtractor;

impl TokenUsageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Usage of a non-streaming call.
    ///
    /// Streaming usage arrives with the terminal event and is reported by the stream itself,
    /// so this returns `None` for streaming calls, for results without an HTTP response and
    /// for bodies without a `usage` key.
    pub fn extract(&self, raw: &dyn RawResult, options: &ConvertOptions) -> Option<TokenUsage> {
        if options.stream {
            return None;
        }

        let response = raw.object()?;
        let data = raw.data();
        if data.get("usage").is_none() {
            return None;
        }

        let remaining = first_header(response.headers(), RATE_LIMIT_REMAINING_TOKENS);
        Some(self.from_data(&data, remaining))
    }

    /// Map the `usage` sub-document of `data` onto a [`TokenUsage`].
    ///
    /// Missing paths stay absent. `remaining_tokens` is the raw header value.
    pub fn from_data(&self, data: &Value, remaining_tokens: Option<&str>) -> TokenUsage {
        let count = |path: &str| data.pointer(path).and_then(Value::as_u64);

        TokenUsage::new()
            .with_prompt_tokens(count("/usage/input_tokens"))
            .with_completion_tokens(count("/usage/output_tokens"))
            .with_thinking_tokens(count("/usage/output_tokens_details/reasoning_tokens"))
            .with_cached_tokens(count("/usage/input_tokens_details/cached_tokens"))
            .with_remaining_tokens(remaining_tokens.and_then(parse_remaining))
            .with_total_tokens(count("/usage/total_tokens"))
    }
}

fn parse_remaining(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(tokens) => Some(tokens),
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "ignoring unparsable {}", RATE_LIMIT_REMAINING_TOKENS);
            None
        }
    }
}
