use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Model request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Model provider returned {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("Model returned no completion content")]
    EmptyCompletion,
    #[error("Model output is not a valid study set: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}
