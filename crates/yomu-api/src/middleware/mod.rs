pub mod cors;
pub mod rate_limit;
pub mod request_id;

use axum::{Router, middleware};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use self::cors::AllowedOrigins;

/// Wrap a router in the HTTP layers shared by every binary
///
/// Outermost first: request id, metrics, HTTP tracing, origin guard, CORS.
pub fn apply_http_layers<S>(router: Router<S>, allowed_origins: &[String]) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let allowed = AllowedOrigins::new(allowed_origins);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(cors::create_cors_layer(&allowed))
        .layer(middleware::from_fn_with_state(
            allowed,
            cors::reject_unlisted_origin,
        ))
        .layer(trace_layer)
        .layer(middleware::from_fn(crate::metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware))
}
