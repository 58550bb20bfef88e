//! Prometheus metrics for request throughput, model calls and persistence.

use std::{sync::LazyLock, time::Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

static UUID_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("uuid pattern is valid")
});

static USER_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/users/[^/]+").expect("user pattern is valid"));

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    // Model calls dominate latency, so the buckets reach further than usual
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            &[
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0,
            ],
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Replace ids in URL paths with placeholders to keep label cardinality low
fn normalize_path(path: &str) -> String {
    let path = UUID_SEGMENT.replace_all(path, ":id");
    USER_SEGMENT.replace_all(&path, "/users/:user_id").into_owned()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record one call to the model provider
pub fn record_model_call(kind: &'static str, duration_secs: f64, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!("model_calls_total", "kind" => kind, "status" => status).increment(1);
    histogram!("model_call_duration_seconds", "kind" => kind).record(duration_secs);
}

/// Record a persisted study set
pub fn record_study_set_saved(card_count: usize) {
    counter!("study_sets_saved_total").increment(1);
    counter!("cards_saved_total").increment(card_count as u64);
}

/// Record a subscription activation
pub fn record_subscription_activation(profile_found: bool) {
    let outcome = if profile_found { "updated" } else { "missing_profile" };

    counter!("subscription_activations_total", "outcome" => outcome).increment(1);
}
