use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use yomu_db::{
    models::{Card, Deck, DeckSummary},
    repositories::{card as card_repo, deck as deck_repo},
};

use crate::{ApiState, error::ApiError};

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

/// Create the deck routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/decks/public", get(get_public_decks))
        .route("/decks/{deck_id}", get(get_deck))
        .route("/users/{user_id}/decks", get(get_user_decks))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<i64>,
}

impl ListParams {
    fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// A deck together with its cards
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckWithCards {
    #[serde(flatten)]
    pub deck: Deck,
    pub cards: Vec<Card>,
}

/// Public library, newest first
async fn get_public_decks(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    let pool = state.pool()?;
    let decks = deck_repo::list_public_decks(pool, params.limit()).await?;
    Ok(Json(decks))
}

async fn get_user_decks(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<DeckSummary>>, ApiError> {
    let pool = state.pool()?;
    let decks = deck_repo::list_user_decks(pool, &user_id, params.limit()).await?;
    Ok(Json(decks))
}

async fn get_deck(
    State(state): State<ApiState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeckWithCards>, ApiError> {
    let pool = state.pool()?;

    let deck = deck_repo::find_deck(pool, deck_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Deck {deck_id} not found")))?;
    let cards = card_repo::list_deck_cards(pool, deck_id).await?;

    Ok(Json(DeckWithCards { deck, cards }))
}
