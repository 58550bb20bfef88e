use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Structured output of a study-set generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySet {
    /// Natural translation of the source sentence
    pub translation: String,
    /// Short explanation of the key grammar point
    pub grammar_explanation: String,
    /// Keyword flashcards, possibly empty
    pub flashcards: Vec<Flashcard>,
}

/// Flashcard as produced by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub reading: String,
    pub example: String,
}

impl StudySet {
    /// Parse the raw completion text of a study-set request.
    ///
    /// Every field is required. A missing `flashcards` key or a value of the
    /// wrong type rejects the whole output; an empty list is accepted.
    pub fn from_completion(content: &str) -> Result<Self, LlmError> {
        Ok(serde_json::from_str(content.trim())?)
    }
}
