//! Typed validators composed into text prompts

use super::error::PromptError;

/// Reject empty or whitespace-only input
pub fn require_non_empty(input: &str) -> Result<(), PromptError> {
    if input.trim().is_empty() {
        Err(PromptError::ValidationFailed("Value is required".to_string()))
    } else {
        Ok(())
    }
}

/// Parse input as an integer
pub fn parse_int(input: &str) -> Result<i64, PromptError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| PromptError::ValidationFailed("must be an integer".to_string()))
}

/// Adapt a typed validator to inquire's validator shape
pub(crate) fn to_validation<T>(
    result: Result<T, PromptError>,
) -> Result<inquire::validator::Validation, inquire::CustomUserError> {
    use inquire::validator::Validation;

    Ok(match result {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}
