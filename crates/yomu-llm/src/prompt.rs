//! Prompt construction for the study-set generator and the assistant endpoints.

use std::{fmt, str::FromStr};

/// JSON shape the model must return for a study set.
pub const STUDY_SET_SCHEMA: &str = r#"{
    "translation": "...",
    "grammar_explanation": "...",
    "flashcards": [
        {"front": "Word", "back": "Meaning", "reading": "Pronunciation", "example": "Short example sentence"}
    ]
}"#;

pub const TRANSLATION_PERSONA: &str = "You are a helpful translation assistant.";
pub const FLASHCARD_PERSONA: &str = "You are a helpful language learning assistant.";
pub const QUIZ_PERSONA: &str = "You are a helpful language learning quiz assistant.";
pub const GRAMMAR_PERSONA: &str = "You are a helpful Japanese grammar assistant.";

/// Language the learner is studying.
///
/// The direction decides both the teaching persona and the language the
/// grammar explanation is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetLanguage {
    /// English speaker studying Japanese
    #[default]
    Japanese,
    /// Japanese speaker studying English
    English,
}

impl TargetLanguage {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code has no teaching persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported target language: '{}'. Must be one of 'ja', 'en'",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for TargetLanguage {
    type Err = UnsupportedLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "ja" => Ok(Self::Japanese),
            "en" => Ok(Self::English),
            _ => Err(UnsupportedLanguage(code.to_string())),
        }
    }
}

/// Build the system instruction for study-set generation.
///
/// # Examples
/// ```
/// use yomu_llm::prompt::{TargetLanguage, study_system_prompt};
///
/// let prompt = study_system_prompt(TargetLanguage::Japanese);
/// assert!(prompt.contains("Japanese language teacher"));
/// ```
pub fn study_system_prompt(target: TargetLanguage) -> String {
    let (persona, translate_into, explain_in, reading) = match target {
        TargetLanguage::Japanese => (
            "You are a Japanese language teacher for English speakers.",
            "English",
            "English",
            "the reading in hiragana",
        ),
        TargetLanguage::English => (
            "You are an English language teacher for Japanese speakers.",
            "Japanese",
            "Japanese",
            "the pronunciation in katakana",
        ),
    };

    format!(
        "{persona}\n\
         Analyze the user's sentence.\n\
         1. Translate it naturally into {translate_into}.\n\
         2. Explain the key grammar point briefly, written in {explain_in}.\n\
         3. Extract 3-5 keywords and create flashcards for them, using {reading} as the reading.\n\
         \n\
         Output strictly valid JSON matching this structure:\n\
         {STUDY_SET_SCHEMA}"
    )
}

pub fn translation_prompt(text: &str, target_language: &str, politeness: &str) -> String {
    format!("Translate the following text to {target_language} with {politeness} tone:\n{text}")
}

pub fn flashcard_prompt(word: &str, target_language: &str) -> String {
    format!(
        "Generate a flashcard for the word '{word}' in {target_language}. \
         Include: reading, meaning, and example sentence."
    )
}

pub fn quiz_prompt(topic: &str) -> String {
    format!(
        "Generate a short quiz for topic '{topic}'. \
         Include 3 multiple-choice questions with answers."
    )
}

pub fn grammar_prompt(sentence: &str) -> String {
    format!(
        "Analyze the following Japanese sentence and explain the grammar, \
         particles, verb forms, and sentence structure clearly:\n{sentence}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_language() {
        assert_eq!("ja".parse::<TargetLanguage>(), Ok(TargetLanguage::Japanese));
        assert_eq!("EN".parse::<TargetLanguage>(), Ok(TargetLanguage::English));
        assert_eq!(" en ".parse::<TargetLanguage>(), Ok(TargetLanguage::English));

        assert!("".parse::<TargetLanguage>().is_err());
        assert!("fr".parse::<TargetLanguage>().is_err());
        assert!("japanese".parse::<TargetLanguage>().is_err());
    }

    #[test]
    fn test_japanese_target_selects_japanese_teacher() {
        let prompt = study_system_prompt(TargetLanguage::Japanese);

        assert!(prompt.starts_with("You are a Japanese language teacher"));
        assert!(prompt.contains("written in English"));
        assert!(prompt.contains("hiragana"));
        assert!(!prompt.contains("English language teacher"));
    }

    #[test]
    fn test_english_target_swaps_persona_and_explanation_language() {
        let prompt = study_system_prompt(TargetLanguage::English);

        assert!(prompt.starts_with("You are an English language teacher"));
        assert!(prompt.contains("written in Japanese"));
        assert!(prompt.contains("katakana"));
        assert!(!prompt.contains("Japanese language teacher"));
    }

    #[test]
    fn test_study_prompt_embeds_schema() {
        for target in [TargetLanguage::Japanese, TargetLanguage::English] {
            let prompt = study_system_prompt(target);
            assert!(prompt.contains("\"grammar_explanation\""));
            assert!(prompt.contains("\"flashcards\""));
            assert!(prompt.ends_with(STUDY_SET_SCHEMA));
        }
    }

    #[test]
    fn test_assistant_prompts_embed_request_fields() {
        assert_eq!(
            translation_prompt("good morning", "ja", "polite"),
            "Translate the following text to ja with polite tone:\ngood morning"
        );
        assert!(flashcard_prompt("猫", "ja").contains("'猫' in ja"));
        assert!(quiz_prompt("kanji").contains("'kanji'"));
        assert!(grammar_prompt("猫が好きです").ends_with("\n猫が好きです"));
    }
}
