use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Spaced-repetition interval (days) given to freshly generated cards
pub const INITIAL_INTERVAL: i32 = 0;

/// Spaced-repetition ease factor given to freshly generated cards
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Subscription tier written by subscription activation
pub const PRO_TIER: &str = "pro";

/// Deck model - one generated study set
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Deck {
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// Display title, a truncated prefix of the source sentence
    pub title: String,
    /// Sentence the study set was generated from
    pub source_text: String,
    /// Grammar explanation returned by the model
    pub grammar_text: String,
    /// Language being studied (ISO 639-1)
    pub target_language: String,
    /// Whether the deck is listed in the public library
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Deck listing row with its card count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeckSummary {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub target_language: String,
    pub is_public: bool,
    pub card_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Card model - a flashcard owned by a deck
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub user_id: String,
    pub front: String,
    pub back: String,
    /// Reading or pronunciation
    pub reading: String,
    pub example_sentence: String,
    /// Index of the card within its deck, in generation order
    pub position: i32,
    /// Spaced-repetition interval in days
    pub interval: i32,
    /// Spaced-repetition ease factor
    pub ease_factor: f64,
    pub created_at: DateTime<Utc>,
}

/// Insert struct for Deck
#[derive(Debug, Clone)]
pub struct NewDeck<'a> {
    pub user_id: &'a str,
    pub title: &'a str,
    pub source_text: &'a str,
    pub grammar_text: &'a str,
    pub target_language: &'a str,
}

/// Insert struct for Card, the owning deck and user are given to the batch insert
#[derive(Debug, Clone)]
pub struct NewCard<'a> {
    pub front: &'a str,
    pub back: &'a str,
    pub reading: &'a str,
    pub example_sentence: &'a str,
}

/// Profile model - subscription state of a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: String,
    pub subscription_tier: String,
    pub paypal_subscription_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn is_pro(&self) -> bool {
        self.subscription_tier == PRO_TIER
    }
}
