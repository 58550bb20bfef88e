use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::common::{TestClient, TestStateBuilder, TestResponse, app, mock_model_reply};

fn throttled(responses: &[TestResponse]) -> Vec<&TestResponse> {
    responses
        .iter()
        .filter(|response| response.status == StatusCode::TOO_MANY_REQUESTS)
        .collect()
}

#[tokio::test]
async fn test_assistant_throttling_uses_error_body() {
    let model = MockServer::start().await;
    mock_model_reply(&model, "a quiz").await;

    let client = TestClient::new(app(TestStateBuilder::new(&model).build()));

    // Model routes allow a burst of 5 per client IP
    let mut responses = Vec::new();
    for _ in 0..8 {
        responses.push(client.post_json("/quiz", &json!({ "topic": "kanji" })).await);
    }

    assert!(
        responses.iter().any(|response| response.status == StatusCode::OK),
        "Some requests should succeed within the burst"
    );
    let limited = throttled(&responses);
    assert!(!limited.is_empty(), "Requests past the burst should be rate limited");
    for response in limited {
        let body: Value = response.json();
        assert!(body["error"].as_str().is_some_and(|e| e.contains("Too Many Requests")));
        assert!(response.headers.contains_key("retry-after"));
    }
}

#[tokio::test]
async fn test_generation_throttling_uses_detail_body() {
    let model = MockServer::start().await;

    // Without persistence every admitted request fails fast with 500
    let client = TestClient::new(app(TestStateBuilder::new(&model).build()));
    let body = json!({ "sentence": "猫が好きです。", "user_id": "user-1" });

    let mut responses = Vec::new();
    for _ in 0..8 {
        responses.push(client.post_json("/generate_study_set", &body).await);
    }

    let limited = throttled(&responses);
    assert!(!limited.is_empty(), "Requests past the burst should be rate limited");
    for response in limited {
        assert!(response.detail().contains("Too Many Requests"));
    }
}
