use std::time::Instant;

use axum::{Json, Router, extract::State, routing::post};
use serde_json::{Value, json};
use yomu_llm::{LlmError, prompt};

use super::model::{FlashcardRequest, GrammarRequest, QuizRequest, TranslationRequest};
use crate::{
    ApiState,
    extract::AssistantJson,
    metrics,
    middleware::rate_limit::{self, ThrottledBody},
};

/// Create the assistant routes
///
/// These endpoints pass a formatted instruction to the model and return its
/// raw text. Failures, including unreadable request bodies, are reported in
/// the body as `{"error": ...}` with a 200 status, which is what the frontend
/// checks for. Throttled requests keep their 429 status with the same body.
pub fn routes() -> Router<ApiState> {
    let assistant = Router::new()
        .route("/translate", post(translate))
        .route("/flashcards", post(flashcard))
        .route("/quiz", post(quiz))
        .route("/grammar", post(grammar));

    rate_limit::model_rate_limit(assistant, ThrottledBody::Error)
}

async fn ask(
    state: &ApiState,
    kind: &'static str,
    field: &'static str,
    persona: &str,
    instruction: String,
) -> Json<Value> {
    let start = Instant::now();
    let result: Result<String, LlmError> = state.llm.assist(persona, instruction).await;
    metrics::record_model_call(kind, start.elapsed().as_secs_f64(), result.is_ok());

    match result {
        Ok(text) => Json(json!({ field: text })),
        Err(e) => {
            tracing::warn!(error = %e, kind, "Assistant request failed");
            Json(json!({ "error": e.to_string() }))
        }
    }
}

async fn translate(
    State(state): State<ApiState>,
    AssistantJson(req): AssistantJson<TranslationRequest>,
) -> Json<Value> {
    let instruction = prompt::translation_prompt(&req.text, &req.target_language, &req.politeness);
    ask(&state, "translate", "translation", prompt::TRANSLATION_PERSONA, instruction).await
}

async fn flashcard(
    State(state): State<ApiState>,
    AssistantJson(req): AssistantJson<FlashcardRequest>,
) -> Json<Value> {
    let instruction = prompt::flashcard_prompt(&req.word, &req.target_language);
    ask(&state, "flashcard", "flashcard", prompt::FLASHCARD_PERSONA, instruction).await
}

async fn quiz(
    State(state): State<ApiState>,
    AssistantJson(req): AssistantJson<QuizRequest>,
) -> Json<Value> {
    let instruction = prompt::quiz_prompt(&req.topic);
    ask(&state, "quiz", "quiz", prompt::QUIZ_PERSONA, instruction).await
}

async fn grammar(
    State(state): State<ApiState>,
    AssistantJson(req): AssistantJson<GrammarRequest>,
) -> Json<Value> {
    let instruction = prompt::grammar_prompt(&req.sentence);
    ask(&state, "grammar", "analysis", prompt::GRAMMAR_PERSONA, instruction).await
}
