use crate::raw::RawResult;
use crate::tokens::{TokenUsageExtractor, RATE_LIMIT_REMAINING_TOKENS};
use crate::transport::first_header;
use crate::types::{ResponsesStreamEvent, StreamChunk, StreamResult};
use crate::{BoxStream, Error};
use futures::{stream, StreamExt};
use serde_json::Value;

struct StreamState {
    events: BoxStream<'static, Value>,
    remaining_tokens: Option<String>,
    finished: bool,
}

/// Lazily map streaming events to text fragments and the terminal usage record.
///
/// Nothing is pulled until the caller polls. After `response.completed` (or an error)
/// the source is not polled again.
pub(crate) fn convert_stream(raw: &dyn RawResult, extractor: TokenUsageExtractor) -> StreamResult {
    // The header is read now; the stream must not borrow the raw result.
    let remaining_tokens = raw
        .object()
        .and_then(|response| first_header(response.headers(), RATE_LIMIT_REMAINING_TOKENS))
        .map(str::to_owned);

    let state = StreamState {
        events: raw.data_stream(),
        remaining_tokens,
        finished: false,
    };

    let chunks = stream::unfold(state, move |mut state| async move {
        if state.finished {
            return None;
        }

        while let Some(event) = state.events.next().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    state.finished = true;
                    return Some((Err(e), state));
                }
            };

            if event.get("type").and_then(Value::as_str).is_none() {
                tracing::debug!(event = %event, "skipping stream event without a type");
                continue;
            }

            match serde_json::from_value::<ResponsesStreamEvent>(event) {
                Ok(ResponsesStreamEvent::OutputTextDelta { delta }) => {
                    return Some((Ok(StreamChunk::Delta(delta)), state));
                }
                Ok(ResponsesStreamEvent::Completed { response }) => {
                    state.finished = true;
                    let usage =
                        extractor.from_data(&response, state.remaining_tokens.as_deref());
                    return Some((Ok(StreamChunk::Usage(usage)), state));
                }
                Ok(ResponsesStreamEvent::Other) => continue,
                Err(e) => {
                    state.finished = true;
                    let error = Error::runtime(format!("Malformed stream event: {e}"));
                    return Some((Err(error), state));
                }
            }
        }

        tracing::debug!("event stream ended without response.completed");
        None
    });

    StreamResult::new(Box::pin(chunks))
}
