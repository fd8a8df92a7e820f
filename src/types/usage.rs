use serde::Serialize;

/// Token accounting for one call.
///
/// Each counter is independently optional: a counter the source did not report
/// stays `None` rather than becoming zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TokenUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cached_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_tokens: Option<u64>,
}

impl TokenUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt_tokens(mut self, tokens: Option<u64>) -> Self {
        self.prompt_tokens = tokens;
        self
    }

    pub fn with_completion_tokens(mut self, tokens: Option<u64>) -> Self {
        self.completion_tokens = tokens;
        self
    }

    pub fn with_thinking_tokens(mut self, tokens: Option<u64>) -> Self {
        self.thinking_tokens = tokens;
        self
    }

    pub fn with_cached_tokens(mut self, tokens: Option<u64>) -> Self {
        self.cached_tokens = tokens;
        self
    }

    pub fn with_remaining_tokens(mut self, tokens: Option<u64>) -> Self {
        self.remaining_tokens = tokens;
        self
    }

    pub fn with_total_tokens(mut self, tokens: Option<u64>) -> Self {
        self.total_tokens = tokens;
        self
    }

    pub fn prompt_tokens(&self) -> Option<u64> {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> Option<u64> {
        self.completion_tokens
    }

    /// Reasoning tokens spent before the visible completion.
    pub fn thinking_tokens(&self) -> Option<u64> {
        self.thinking_tokens
    }

    pub fn cached_tokens(&self) -> Option<u64> {
        self.cached_tokens
    }

    /// Rate-limit budget left, as reported by the response header.
    pub fn remaining_tokens(&self) -> Option<u64> {
        self.remaining_tokens
    }

    pub fn total_tokens(&self) -> Option<u64> {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
