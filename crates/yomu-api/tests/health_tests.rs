use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::common::{TestClient, TestStateBuilder, app};

#[tokio::test]
async fn test_health() {
    let model = MockServer::start().await;
    let client = TestClient::new(app(TestStateBuilder::new(&model).build()));

    client.get("/health").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_without_database() {
    let model = MockServer::start().await;
    let client = TestClient::new(app(TestStateBuilder::new(&model).build()));

    let response = client.get("/health/ready").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ready", "database": "disabled" }));
}

#[tokio::test]
async fn test_readiness_with_unreachable_database() {
    let model = MockServer::start().await;
    let state = TestStateBuilder::new(&model)
        .with_unreachable_database()
        .build();
    let client = TestClient::new(app(state));

    let response = client.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["database"], "down");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let model = MockServer::start().await;
    let client = TestClient::new(app(TestStateBuilder::new(&model).build()));

    let response = client.get("/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "The requested resource was not found");
}
