use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use yomu_db::{
    models::{NewCard, NewDeck},
    repositories::{card as card_repo, deck as deck_repo, profile as profile_repo},
};
use yomu_llm::{StudySet, TargetLanguage};

use super::model::{StudyRequest, StudySetResponse, deck_title};
use crate::{
    ApiState,
    error::ApiError,
    metrics,
    validation::{parse_target_language, validate_body},
};

/// Generate a study set for a sentence and persist it as a deck with cards
///
/// Steps, each failing the whole request:
/// 1. persistence must be configured
/// 2. the request must be valid
/// 3. free-tier users must be under their daily quota (when one is configured)
/// 4. the model must return a well-formed study set
/// 5. the deck and its cards are written in one transaction
pub async fn generate_study_set(
    state: &ApiState,
    request: StudyRequest,
) -> Result<StudySetResponse, ApiError> {
    let pool = state.pool()?;

    validate_body(&request)?;
    let target = parse_target_language(&request.target_language)?;
    if request.is_blank() {
        return Err(ApiError::Validation(
            "Sentence cannot be blank".to_string(),
        ));
    }

    if let Some(limit) = state.free_daily_generation_limit {
        enforce_daily_quota(pool, &request.user_id, limit).await?;
    }

    tracing::info!(user_id = %request.user_id, %target, "Generating study set");
    let study_set = request_study_set(state, target, &request.sentence).await?;

    let deck_id =
        save_study_set(pool, &request.user_id, target, &request.sentence, &study_set).await?;
    tracing::info!(%deck_id, cards = study_set.flashcards.len(), "Study set saved");

    Ok(StudySetResponse {
        success: true,
        deck_id,
        data: study_set,
    })
}

async fn request_study_set(
    state: &ApiState,
    target: TargetLanguage,
    sentence: &str,
) -> Result<StudySet, ApiError> {
    let start = Instant::now();
    let result = state.llm.generate_study_set(target, sentence).await;
    metrics::record_model_call("study_set", start.elapsed().as_secs_f64(), result.is_ok());

    result.map_err(ApiError::from)
}

/// Write the deck then its cards, atomically.
async fn save_study_set(
    pool: &PgPool,
    user_id: &str,
    target: TargetLanguage,
    sentence: &str,
    study_set: &StudySet,
) -> Result<uuid::Uuid, ApiError> {
    let title = deck_title(sentence);
    let mut tx = pool.begin().await?;

    let deck_id = deck_repo::insert_deck(
        &mut *tx,
        &NewDeck {
            user_id,
            title: &title,
            source_text: sentence,
            grammar_text: &study_set.grammar_explanation,
            target_language: target.code(),
        },
    )
    .await?;

    let cards = study_set
        .flashcards
        .iter()
        .map(|card| NewCard {
            front: &card.front,
            back: &card.back,
            reading: &card.reading,
            example_sentence: &card.example,
        })
        .collect::<Vec<_>>();
    card_repo::insert_cards(&mut *tx, deck_id, user_id, &cards).await?;

    tx.commit().await?;
    metrics::record_study_set_saved(cards.len());

    Ok(deck_id)
}

/// Start of the current UTC day
fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map_or(now, |midnight| midnight.and_utc())
}

async fn enforce_daily_quota(pool: &PgPool, user_id: &str, limit: u32) -> Result<(), ApiError> {
    let is_pro = profile_repo::find_profile(pool, user_id)
        .await?
        .is_some_and(|profile| profile.is_pro());
    if is_pro {
        return Ok(());
    }

    let generated_today =
        deck_repo::count_decks_since(pool, user_id, start_of_day(Utc::now())).await?;
    if generated_today >= i64::from(limit) {
        tracing::info!(%user_id, generated_today, limit, "Daily generation quota reached");
        return Err(ApiError::QuotaExceeded(limit));
    }

    Ok(())
}
