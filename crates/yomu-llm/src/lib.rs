//! Language-model plumbing for the yomu study backend
//!
//! This crate builds the teaching prompts, talks to an OpenAI-compatible
//! chat-completions endpoint and parses the structured study-set output.

pub mod client;
pub mod error;
pub mod prompt;
pub mod study;

pub use client::{ChatMessage, ChatRequest, LlmClient};
pub use error::LlmError;
pub use prompt::TargetLanguage;
pub use study::{Flashcard, StudySet};

/// Model used for structured study-set generation.
pub const STUDY_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for study-set generation.
pub const STUDY_TEMPERATURE: f32 = 0.3;

/// Lower-cost model used by the assistant endpoints.
pub const ASSISTANT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for the assistant endpoints.
pub const ASSISTANT_TEMPERATURE: f32 = 0.5;
