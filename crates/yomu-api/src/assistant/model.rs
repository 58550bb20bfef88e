use serde::Deserialize;

fn default_target_language() -> String {
    "ja".to_string()
}

fn default_politeness() -> String {
    "casual".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// casual, polite or business
    #[serde(default = "default_politeness")]
    pub politeness: String,
}

#[derive(Debug, Deserialize)]
pub struct FlashcardRequest {
    pub word: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// e.g. kanji, vocabulary, grammar
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct GrammarRequest {
    pub sentence: String,
}
