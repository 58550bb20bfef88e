//! Minimal client for OpenAI-compatible chat-completions endpoints.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    ASSISTANT_MODEL, ASSISTANT_TEMPERATURE, STUDY_MODEL, STUDY_TEMPERATURE,
    error::LlmError,
    prompt::{TargetLanguage, study_system_prompt},
    study::StudySet,
};

/// Default base URL of the model provider
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Output format constraint sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonObject,
}

/// Body of a chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Chat-completions client
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    /// Create a client for the provider at `base_url`.
    ///
    /// Without an API key requests are sent unauthenticated and the provider
    /// is expected to reject them.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat-completions request and return the first choice's content.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %request.model, %url, "Sending chat completion request");

        let mut builder = self.http.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }

    /// Generate a study set for `sentence` in strict JSON mode.
    pub async fn generate_study_set(
        &self,
        target: TargetLanguage,
        sentence: &str,
    ) -> Result<StudySet, LlmError> {
        let request = ChatRequest {
            model: STUDY_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(study_system_prompt(target)),
                ChatMessage::user(sentence),
            ],
            temperature: STUDY_TEMPERATURE,
            response_format: Some(ResponseFormat::JsonObject),
        };

        let content = self.chat(&request).await?;
        StudySet::from_completion(&content)
    }

    /// Free-text completion used by the assistant endpoints.
    pub async fn assist(&self, persona: &str, prompt: String) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: ASSISTANT_MODEL.to_string(),
            messages: vec![ChatMessage::system(persona), ChatMessage::user(prompt)],
            temperature: ASSISTANT_TEMPERATURE,
            response_format: None,
        };

        self.chat(&request).await
    }
}
