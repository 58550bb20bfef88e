//! JSON body extractors that keep rejections in the API's error shapes.
//!
//! axum's own [`Json`] extractor answers a malformed body with a plain-text
//! response. [`ApiJson`] turns it into an [`ApiError`] (`{"detail": ...}`),
//! [`AssistantJson`] into the `{"error": ...}` body of the assistant routes.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::error::ApiError;

/// JSON body rejected with [`ApiError::Validation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// JSON body rejected with a 200 `{"error": ...}` response
#[derive(Debug, Clone, Copy, Default)]
pub struct AssistantJson<T>(pub T);

impl<T, S> FromRequest<S> for AssistantJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Json<Value>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Assistant request body rejected");
                Err(Json(json!({ "error": rejection.body_text() })))
            }
        }
    }
}
