//! Raw results handed over by the transport layer.

use crate::converter::ConvertOptions;
use crate::transport::{http, HttpResponse, SseDecoder, TransportResponse};
use crate::{BoxStream, Result};
use futures::stream;
use serde_json::{Map, Value};
use std::sync::Mutex;

/// What the converter reads from a finished (or streaming) call.
pub trait RawResult: Send + Sync {
    /// The fully decoded body, or an empty object when there is none.
    fn data(&self) -> Value;

    /// Incrementally decoded event bodies. Consumed at most once.
    fn data_stream(&self) -> BoxStream<'static, Value>;

    /// The underlying HTTP response, if the transport produced one.
    fn object(&self) -> Option<&dyn TransportResponse>;
}

/// [`RawResult`] backed by an [`HttpResponse`] and, for streaming calls, its event stream.
pub struct RawHttpResult {
    response: HttpResponse,
    events: Mutex<Option<BoxStream<'static, Value>>>,
}

impl RawHttpResult {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            events: Mutex::new(None),
        }
    }

    pub fn with_events(response: HttpResponse, events: BoxStream<'static, Value>) -> Self {
        Self {
            response,
            events: Mutex::new(Some(events)),
        }
    }

    /// Wrap a `reqwest` response. Streaming calls keep the body unread and decode it as SSE
    /// while the caller pulls; otherwise the body is buffered here.
    pub async fn from_reqwest(response: reqwest::Response, options: &ConvertOptions) -> Result<Self> {
        if options.stream {
            let (head, events) = http::into_event_stream(response, &SseDecoder::default());
            return Ok(Self::with_events(head, events));
        }
        Ok(Self::new(HttpResponse::from_reqwest(response).await?))
    }

    pub fn response(&self) -> &HttpResponse {
        &self.response
    }
}

impl RawResult for RawHttpResult {
    fn data(&self) -> Value {
        self.response.to_json(false).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "response body unavailable, using empty object");
            Value::Object(Map::new())
        })
    }

    fn data_stream(&self) -> BoxStream<'static, Value> {
        let taken = self.events.lock().ok().and_then(|mut events| events.take());
        match taken {
            Some(events) => events,
            None => {
                tracing::warn!("event stream requested but none is available");
                Box::pin(stream::empty())
            }
        }
    }

    fn object(&self) -> Option<&dyn TransportResponse> {
        Some(&self.response)
    }
}
