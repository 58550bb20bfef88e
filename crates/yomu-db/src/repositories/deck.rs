use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{Deck, DeckSummary, NewDeck};

/// Insert a deck and return its generated id.
pub async fn insert_deck<'e, E>(executor: E, deck: &NewDeck<'_>) -> Result<Uuid, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO decks (user_id, title, source_text, grammar_text, target_language)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
        "#,
    )
    .bind(deck.user_id)
    .bind(deck.title)
    .bind(deck.source_text)
    .bind(deck.grammar_text)
    .bind(deck.target_language)
    .fetch_one(executor)
    .await
}

pub async fn find_deck<'e, E>(executor: E, deck_id: Uuid) -> Result<Option<Deck>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, title, source_text, grammar_text, target_language, is_public, created_at
            FROM decks
            WHERE id = $1
        "#,
    )
    .bind(deck_id)
    .fetch_optional(executor)
    .await
}

/// Count the decks a user created at or after `since`.
pub async fn count_decks_since<'e, E>(
    executor: E,
    user_id: &str,
    since: DateTime<Utc>,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM decks
            WHERE user_id = $1 AND created_at >= $2
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_one(executor)
    .await
}

pub async fn list_user_decks<'e, E>(
    executor: E,
    user_id: &str,
    limit: i64,
) -> Result<Vec<DeckSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                d.id,
                d.user_id,
                d.title,
                d.target_language,
                d.is_public,
                COUNT(c.id) AS card_count,
                d.created_at
            FROM decks d
            LEFT JOIN cards c ON c.deck_id = d.id
            WHERE d.user_id = $1
            GROUP BY d.id
            ORDER BY d.created_at DESC
            LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// Public library listing, newest first.
pub async fn list_public_decks<'e, E>(executor: E, limit: i64) -> Result<Vec<DeckSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                d.id,
                d.user_id,
                d.title,
                d.target_language,
                d.is_public,
                COUNT(c.id) AS card_count,
                d.created_at
            FROM decks d
            LEFT JOIN cards c ON c.deck_id = d.id
            WHERE d.is_public
            GROUP BY d.id
            ORDER BY d.created_at DESC
            LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await
}
