use axum::{
    Json, Router,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::SmartIpKeyExtractor,
};

/// Sustained generations per second per client IP
pub const GENERATION_RATE_PER_SECOND: u64 = 1;
/// Burst of generations allowed before throttling
pub const GENERATION_BURST_SIZE: u32 = 5;

/// JSON field carrying the message of a throttled response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottledBody {
    /// `{"detail": ...}`, the shape of [`crate::error::ApiError`]
    Detail,
    /// `{"error": ...}`, the shape of the assistant routes
    Error,
}

impl ThrottledBody {
    const fn field(self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Error => "error",
        }
    }
}

/// Rate limit the model-backed routes of `router` per client IP
///
/// Client IPs come from `X-Forwarded-For`/`X-Real-IP`/`Forwarded` and fall
/// back to the peer address, so the server must be started with connect info.
pub fn model_rate_limit<S>(router: Router<S>, body: ThrottledBody) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(GENERATION_RATE_PER_SECOND)
        .burst_size(GENERATION_BURST_SIZE)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
        .expect("Failed to build model rate limiter configuration");

    let layer = GovernorLayer::new(governor_conf)
        .error_handler(move |error| throttled_response(error, body));

    router.layer(layer)
}

/// Governor rejection as JSON, keeping its status and rate-limit headers
fn throttled_response(error: GovernorError, body: ThrottledBody) -> Response {
    let (parts, message) = error.into_response().into_parts();
    if parts.status.is_server_error() {
        tracing::error!(%message, "Rate limiter failed to identify client");
    }

    let field = body.field();
    let mut response = (parts.status, Json(json!({ field: message }))).into_response();
    response.headers_mut().extend(parts.headers);
    response
}
