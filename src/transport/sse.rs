//! Server-sent event decoding (Bytes -> JSON Value).

use crate::BoxStream;
use bytes::Bytes;
use futures::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SseConfig {
    /// Frame delimiter. Carriage returns are dropped before splitting.
    pub delimiter: String,
    /// Prefix stripped from data lines.
    pub prefix: String,
    /// Payload that terminates the stream.
    pub done_signal: String,
}

impl Default for SseConfig {
    fn default() -> Self {
        Self {
            delimiter: "\n\n".to_string(),
            prefix: "data: ".to_string(),
            done_signal: "[DONE]".to_string(),
        }
    }
}

enum Frame {
    Event(Value),
    Done,
    Skip,
}

struct DecodeState {
    input: BoxStream<'static, Bytes>,
    buf: Vec<u8>,
    finished: bool,
}

/// Incremental SSE decoder:
/// - splits by delimiter (default "\n\n")
/// - joins the `data:` lines of each frame, ignoring `event:`/`id:` fields and comments
/// - stops on `done_signal` (default "[DONE]")
/// - skips frames whose payload is not JSON
#[derive(Debug, Clone, Default)]
pub struct SseDecoder {
    config: SseConfig,
}

impl SseDecoder {
    pub fn new(config: SseConfig) -> Self {
        Self { config }
    }

    pub fn decode_stream(&self, input: BoxStream<'static, Bytes>) -> BoxStream<'static, Value> {
        let delimiter: Vec<u8> = self
            .config
            .delimiter
            .bytes()
            .filter(|b| *b != b'\r')
            .collect();
        let prefix = self.config.prefix.clone();
        let done_signal = self.config.done_signal.clone();

        let state = DecodeState {
            input,
            buf: Vec::new(),
            finished: false,
        };

        let stream = stream::unfold(state, move |mut state| {
            let delimiter = delimiter.clone();
            let prefix = prefix.clone();
            let done_signal = done_signal.clone();
            async move {
                if state.finished {
                    return None;
                }

                loop {
                    if let Some(idx) = find(&state.buf, &delimiter) {
                        let frame: Vec<u8> = state.buf.drain(..idx + delimiter.len()).collect();
                        let frame = String::from_utf8_lossy(&frame[..idx]);
                        match parse_frame(&frame, &prefix, &done_signal) {
                            Frame::Event(v) => return Some((Ok(v), state)),
                            Frame::Done => return None,
                            Frame::Skip => continue,
                        }
                    }

                    match state.input.next().await {
                        Some(Ok(bytes)) => {
                            state
                                .buf
                                .extend(bytes.iter().copied().filter(|b| *b != b'\r'));
                        }
                        Some(Err(e)) => {
                            state.finished = true;
                            return Some((Err(e), state));
                        }
                        None => {
                            // EOF: the remainder may hold one unterminated frame.
                            state.finished = true;
                            let rest = std::mem::take(&mut state.buf);
                            let rest = String::from_utf8_lossy(&rest);
                            return match parse_frame(&rest, &prefix, &done_signal) {
                                Frame::Event(v) => Some((Ok(v), state)),
                                Frame::Done | Frame::Skip => None,
                            };
                        }
                    }
                }
            }
        });

        Box::pin(stream)
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn parse_frame(frame: &str, prefix: &str, done_signal: &str) -> Frame {
    let mut data = Vec::new();
    for line in frame.lines() {
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        if let Some(rest) = line.strip_prefix(prefix) {
            data.push(rest);
        } else if let Some(rest) = line.strip_prefix("data:") {
            data.push(rest.trim_start());
        }
    }

    if data.is_empty() {
        return Frame::Skip;
    }
    let payload = data.join("\n");
    let payload = payload.trim();
    if payload == done_signal {
        return Frame::Done;
    }

    match serde_json::from_str(payload) {
        Ok(v) => Frame::Event(v),
        Err(e) => {
            tracing::debug!(error = %e, "skipping non-JSON SSE frame");
            Frame::Skip
        }
    }
}
