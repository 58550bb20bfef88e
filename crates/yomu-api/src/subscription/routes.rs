use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use validator::Validate;
use yomu_db::repositories::profile as profile_repo;

use crate::{ApiState, error::ApiError, extract::ApiJson, metrics, validation::validate_body};

/// Create the subscription routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/activate-subscription", post(activate_subscription))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActivateSubscriptionRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub user_id: String,
    /// Identifier of the subscription at the payment provider
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub subscription_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivateSubscriptionResponse {
    pub success: bool,
}

/// Upgrade a profile to the pro tier.
///
/// The subscription is not verified with the payment provider. Repeating the
/// call with the same ids leaves the profile unchanged.
async fn activate_subscription(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<ActivateSubscriptionRequest>,
) -> Result<Json<ActivateSubscriptionResponse>, ApiError> {
    let pool = state.pool()?;
    validate_body(&request)?;

    let updated =
        profile_repo::activate_subscription(pool, &request.user_id, &request.subscription_id)
            .await?;
    metrics::record_subscription_activation(updated);

    if updated {
        tracing::info!(user_id = %request.user_id, "Subscription activated");
    } else {
        tracing::warn!(user_id = %request.user_id, "Subscription activation for unknown profile");
    }

    Ok(Json(ActivateSubscriptionResponse { success: true }))
}
