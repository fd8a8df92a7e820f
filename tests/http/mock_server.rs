//! Mock HTTP server setup for adapter tests

use mockito::{Mock, Server, ServerGuard};

/// Test fixture that manages a mock Responses endpoint
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// JSON response with an optional rate-limit header
    pub async fn mock_json_response(
        &mut self,
        path: &str,
        status: usize,
        body: &str,
        remaining_tokens: Option<&str>,
    ) -> Mock {
        let mut mock = self
            .server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body);
        if let Some(remaining) = remaining_tokens {
            mock = mock.with_header("x-ratelimit-remaining-tokens", remaining);
        }
        mock.create_async().await
    }

    /// SSE response; each event is framed as `event: {type}` plus `data: {json}`
    pub async fn mock_sse_stream(&mut self, path: &str, events: &[serde_json::Value]) -> Mock {
        let body = events
            .iter()
            .map(|event| {
                let name = event["type"].as_str().unwrap_or("message");
                format!("event: {}\ndata: {}\n\n", name, event)
            })
            .chain(std::iter::once("data: [DONE]\n\n".to_string()))
            .collect::<String>();

        self.server
            .mock("POST", path)
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_header("x-ratelimit-remaining-tokens", "7777")
            .with_body(body)
            .create_async()
            .await
    }
}
