use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::{Card, INITIAL_EASE_FACTOR, INITIAL_INTERVAL, NewCard};

/// Insert all cards of a deck in a single statement.
///
/// Each card's `position` is its index in `cards`. Spaced-repetition fields
/// start at [`INITIAL_INTERVAL`] and [`INITIAL_EASE_FACTOR`]. Returns the
/// number of inserted rows.
pub async fn insert_cards<'e, E>(
    executor: E,
    deck_id: Uuid,
    user_id: &str,
    cards: &[NewCard<'_>],
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    if cards.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        r#"INSERT INTO cards (deck_id, user_id, front, back, reading, example_sentence, position, "interval", ease_factor) "#,
    );
    builder.push_values(cards.iter().zip(0_i32..), |mut row, (card, position)| {
        row.push_bind(deck_id)
            .push_bind(user_id)
            .push_bind(card.front)
            .push_bind(card.back)
            .push_bind(card.reading)
            .push_bind(card.example_sentence)
            .push_bind(position)
            .push_bind(INITIAL_INTERVAL)
            .push_bind(INITIAL_EASE_FACTOR);
    });

    let result = builder.build().execute(executor).await?;
    Ok(result.rows_affected())
}

pub async fn list_deck_cards<'e, E>(executor: E, deck_id: Uuid) -> Result<Vec<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, deck_id, user_id, front, back, reading, example_sentence,
                   position, "interval", ease_factor, created_at
            FROM cards
            WHERE deck_id = $1
            ORDER BY position
        "#,
    )
    .bind(deck_id)
    .fetch_all(executor)
    .await
}
