use axum::{Json, Router, extract::State, routing::post};

use super::{
    model::{StudyRequest, StudySetResponse},
    service,
};
use crate::{
    ApiState,
    error::ApiError,
    extract::ApiJson,
    middleware::rate_limit::{self, ThrottledBody},
};

/// Create the study-set routes
pub fn routes() -> Router<ApiState> {
    let generation = Router::new().route("/generate_study_set", post(generate_study_set));

    rate_limit::model_rate_limit(generation, ThrottledBody::Detail)
}

async fn generate_study_set(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<StudyRequest>,
) -> Result<Json<StudySetResponse>, ApiError> {
    service::generate_study_set(&state, request).await.map(Json)
}
