//! Failures of a single prompt

use thiserror::Error;

/// Errors returned by a [`super::Prompter`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The session cannot show a prompt
    #[error("prompt: non interactive")]
    NotInteractive,

    /// The user cancelled the prompt (Esc or Ctrl-C)
    #[error("prompt aborted")]
    Aborted,

    /// Submitted input failed a required-field or type check
    #[error("{0}")]
    ValidationFailed(String),

    /// The prompt library failed for another reason (I/O, configuration)
    #[error("prompt failed: {0}")]
    Failed(String),
}

impl From<inquire::InquireError> for PromptError {
    fn from(err: inquire::InquireError) -> Self {
        use inquire::InquireError;

        match err {
            InquireError::NotTTY => PromptError::NotInteractive,
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PromptError::Aborted
            }
            other => PromptError::Failed(other.to_string()),
        }
    }
}
