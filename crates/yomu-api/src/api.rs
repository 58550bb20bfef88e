use axum::Router;

use crate::{assistant, deck, state::ApiState, study, subscription};

/// Application routes, served both at the root and under `/api`
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(study::routes())
        .merge(subscription::routes())
        .merge(assistant::routes())
        .merge(deck::routes())
}
