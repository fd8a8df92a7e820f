use super::{HeaderMap, HttpResponse, SseDecoder, TransportError};
use crate::{BoxStream, Error};
use futures::TryStreamExt;
use serde_json::Value;

impl HttpResponse {
    /// Buffer a `reqwest` response into a materialised [`HttpResponse`].
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, TransportError> {
        let head = response_head(&response);
        let body = response.bytes().await?;
        Ok(head.with_body(body))
    }
}

/// Status and headers of a response, without its body.
pub(crate) fn response_head(response: &reqwest::Response) -> HttpResponse {
    let mut headers = HeaderMap::new();
    for (name, value) in response.headers() {
        headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    let mut head = HttpResponse::new(response.status().as_u16());
    head.headers = headers;
    head
}

/// Split a streaming response into its head and a lazily decoded SSE event stream.
pub(crate) fn into_event_stream(
    response: reqwest::Response,
    decoder: &SseDecoder,
) -> (HttpResponse, BoxStream<'static, Value>) {
    let head = response_head(&response);
    tracing::debug!(status = head.status, "opening response event stream");

    let bytes = response
        .bytes_stream()
        .map_err(|e| Error::Transport(TransportError::Http(e)));
    (head, decoder.decode_stream(Box::pin(bytes)))
}
