use validator::{Validate, ValidationErrors};
use yomu_llm::TargetLanguage;

use crate::error::ApiError;

/// Run the `validator` rules of a request body.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate()
        .map_err(|errors| ApiError::Validation(describe(&errors)))
}

/// Parse a target language code into the supported teaching directions.
///
/// # Examples
/// ```
/// use yomu_api::validation::parse_target_language;
///
/// assert!(parse_target_language("ja").is_ok());
/// assert!(parse_target_language("invalid").is_err());
/// ```
pub fn parse_target_language(code: &str) -> Result<TargetLanguage, ApiError> {
    if code.trim().is_empty() {
        return Err(ApiError::Validation(
            "Target language cannot be empty".to_string(),
        ));
    }

    code.parse()
        .map_err(|e: yomu_llm::prompt::UnsupportedLanguage| ApiError::Validation(e.to_string()))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {reason}")
        })
        .collect::<Vec<_>>();
    fields.sort();

    format!("Invalid request: {}", fields.join(", "))
}
