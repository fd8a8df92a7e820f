//! End-to-end: reqwest response -> RawHttpResult -> ResultConverter.

mod http;

use futures::StreamExt;
use http::mock_server::MockServerFixture;
use responses_convert::tokens::TokenUsageExtractor;
use responses_convert::{
    ConvertOptions, Error, HttpResponse, RawHttpResult, ResultConverter, StreamChunk,
};
use serde_json::json;

async fn post(url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .json(&json!({"model": "gpt-4o", "input": "Hi"}))
        .send()
        .await
        .expect("request")
}

#[tokio::test]
async fn test_buffered_response_converts_and_reports_usage() {
    let mut fixture = MockServerFixture::new().await;
    let body = json!({
        "output": [{"type": "message", "content": [{"type": "output_text", "text": "Hi there"}]}],
        "usage": {"input_tokens": 5, "output_tokens": 2, "total_tokens": 7}
    });
    let mock = fixture
        .mock_json_response("/v1/responses", 200, &body.to_string(), Some("900"))
        .await;

    let options = ConvertOptions::default();
    let response = post(&fixture.url("/v1/responses")).await;
    let raw = RawHttpResult::from_reqwest(response, &options).await.unwrap();

    let result = ResultConverter::new().convert(&raw, &options).unwrap();
    assert_eq!(result.as_text().unwrap().content(), "Hi there");

    let usage = TokenUsageExtractor::new().extract(&raw, &options).unwrap();
    assert_eq!(usage.total_tokens(), Some(7));
    assert_eq!(usage.remaining_tokens(), Some(900));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "/v1/responses",
            401,
            r#"{"error":{"message":"Invalid API key provided: sk-invalid","type":"invalid_request_error"}}"#,
            None,
        )
        .await;

    let response = HttpResponse::from_reqwest(post(&fixture.url("/v1/responses")).await)
        .await
        .unwrap();
    let err = ResultConverter::new()
        .convert(&RawHttpResult::new(response), &ConvertOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(err.message(), "Invalid API key provided: sk-invalid");
}

#[tokio::test]
async fn test_streaming_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_sse_stream(
            "/v1/responses",
            &[
                json!({"type": "response.created", "response": {"id": "resp_1"}}),
                json!({"type": "response.output_text.delta", "output_index": 0, "content_index": 0, "delta": "Hel"}),
                json!({"type": "response.output_text.delta", "output_index": 0, "content_index": 0, "delta": "lo"}),
                json!({"type": "response.completed", "response": {"usage": {"input_tokens": 4, "output_tokens": 2, "total_tokens": 6}}}),
            ],
        )
        .await;

    let options = ConvertOptions::streaming();
    let response = post(&fixture.url("/v1/responses")).await;
    let raw = RawHttpResult::from_reqwest(response, &options).await.unwrap();

    let stream = ResultConverter::new()
        .convert(&raw, &options)
        .unwrap()
        .into_stream()
        .unwrap();
    let chunks: Vec<StreamChunk> = stream.map(|chunk| chunk.unwrap()).collect().await;

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], StreamChunk::Delta("Hel".into()));
    assert_eq!(chunks[1], StreamChunk::Delta("lo".into()));
    match &chunks[2] {
        StreamChunk::Usage(usage) => {
            assert_eq!(usage.prompt_tokens(), Some(4));
            assert_eq!(usage.remaining_tokens(), Some(7777));
        }
        other => panic!("expected usage, got {other:?}"),
    }

    assert!(TokenUsageExtractor::new().extract(&raw, &options).is_none());
}
