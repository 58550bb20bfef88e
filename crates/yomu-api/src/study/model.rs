use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use yomu_llm::StudySet;

/// Characters of the source sentence kept in a deck title
pub const TITLE_MAX_CHARS: usize = 30;

/// Marker appended to titles cut from long sentences
pub const TITLE_ELLIPSIS: &str = "...";

fn default_target_language() -> String {
    "ja".to_string()
}

/// Body of `POST /generate_study_set`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudyRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub sentence: String,
    #[validate(length(min = 1, max = 128, message = "must be 1 to 128 characters"))]
    pub user_id: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

/// Response of a successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySetResponse {
    pub success: bool,
    pub deck_id: Uuid,
    pub data: StudySet,
}

impl StudyRequest {
    /// Whether the sentence holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.sentence.trim().is_empty()
    }
}

/// Display title for a deck built from `sentence`
///
/// Sentences of [`TITLE_MAX_CHARS`] characters or more keep their first
/// [`TITLE_MAX_CHARS`] characters followed by [`TITLE_ELLIPSIS`]; shorter
/// sentences are used whole.
pub fn deck_title(sentence: &str) -> String {
    if sentence.chars().count() < TITLE_MAX_CHARS {
        return sentence.to_string();
    }

    let mut title = sentence.chars().take(TITLE_MAX_CHARS).collect::<String>();
    title.push_str(TITLE_ELLIPSIS);
    title
}
