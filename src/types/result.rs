//! Result variants produced by the converter.

use super::{TokenUsage, ToolCall};
use crate::{BoxStream, Result};
use futures::Stream;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    content: String,
}

impl TextResult {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallResult {
    tool_calls: Vec<ToolCall>,
}

impl ToolCallResult {
    pub fn new(tool_calls: Vec<ToolCall>) -> Self {
        Self { tool_calls }
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    pub fn into_tool_calls(self) -> Vec<ToolCall> {
        self.tool_calls
    }
}

/// One alternative inside a [`ChoiceResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Text(TextResult),
    ToolCalls(ToolCallResult),
}

impl Choice {
    pub fn as_text(&self) -> Option<&TextResult> {
        match self {
            Choice::Text(text) => Some(text),
            Choice::ToolCalls(_) => None,
        }
    }

    pub fn as_tool_calls(&self) -> Option<&ToolCallResult> {
        match self {
            Choice::ToolCalls(calls) => Some(calls),
            Choice::Text(_) => None,
        }
    }
}

/// Several output items, in the order the API returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceResult {
    choices: Vec<Choice>,
}

impl ChoiceResult {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn into_choices(self) -> Vec<Choice> {
        self.choices
    }
}

/// Element of a [`StreamResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    /// Text fragment, in arrival order.
    Delta(String),
    /// Usage of the whole call; always the last element when present.
    Usage(TokenUsage),
}

/// Single-pass stream of fragments followed by an optional terminal usage record.
///
/// Dropping it before exhaustion stops pulling from the transport.
pub struct StreamResult {
    stream: BoxStream<'static, StreamChunk>,
}

impl StreamResult {
    pub fn new(stream: BoxStream<'static, StreamChunk>) -> Self {
        Self { stream }
    }

    pub fn into_stream(self) -> BoxStream<'static, StreamChunk> {
        self.stream
    }
}

impl Stream for StreamResult {
    type Item = Result<StreamChunk>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.stream.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for StreamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamResult").finish_non_exhaustive()
    }
}

/// Outcome of a successful conversion.
#[derive(Debug)]
pub enum ModelResult {
    Text(TextResult),
    ToolCalls(ToolCallResult),
    Choice(ChoiceResult),
    Stream(StreamResult),
}

impl ModelResult {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelResult::Text(_) => "text",
            ModelResult::ToolCalls(_) => "tool_calls",
            ModelResult::Choice(_) => "choice",
            ModelResult::Stream(_) => "stream",
        }
    }

    pub fn as_text(&self) -> Option<&TextResult> {
        match self {
            ModelResult::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_tool_calls(&self) -> Option<&ToolCallResult> {
        match self {
            ModelResult::ToolCalls(calls) => Some(calls),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&ChoiceResult> {
        match self {
            ModelResult::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn into_stream(self) -> Option<StreamResult> {
        match self {
            ModelResult::Stream(stream) => Some(stream),
            _ => None,
        }
    }
}

impl From<Choice> for ModelResult {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Text(text) => ModelResult::Text(text),
            Choice::ToolCalls(calls) => ModelResult::ToolCalls(calls),
        }
    }
}
