use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Parsed CORS allow-list
#[derive(Clone, Debug)]
pub struct AllowedOrigins(Arc<[HeaderValue]>);

impl AllowedOrigins {
    /// Invalid header values are skipped.
    pub fn new(origins: &[String]) -> Self {
        let parsed = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();

        Self(parsed.into())
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    fn to_vec(&self) -> Vec<HeaderValue> {
        self.0.to_vec()
    }
}

/// Creates the CORS layer answering preflights for allowed origins
///
/// - Standard HTTP methods (GET, POST, OPTIONS)
/// - Standard headers (Content-Type, Accept, Authorization)
/// - Credentials enabled
pub fn create_cors_layer(allowed: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed.to_vec()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Reject cross-origin requests from origins outside the allow-list
///
/// Requests without an `Origin` header (same-origin navigation, server to
/// server calls) pass through.
pub async fn reject_unlisted_origin(
    State(allowed): State<AllowedOrigins>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(origin) = req.headers().get(header::ORIGIN)
        && !allowed.contains(origin)
    {
        tracing::warn!(origin = ?origin, uri = %req.uri(), "Rejected request from unlisted origin");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Origin not allowed" })),
        )
            .into_response();
    }

    next.run(req).await
}
