//! Prompt adapter
//!
//! A uniform surface over the primitive prompt kinds. Resolvers only talk to
//! [`Prompter`]; [`InquirePrompter`] is the terminal implementation.

use super::error::PromptError;
use super::gate::Interactivity;
use super::render::select_render_config;
use super::validate::{parse_int, require_non_empty, to_validation};
use inquire::{Confirm, MultiSelect, Password, PasswordDisplayMode, Select, Text};

/// Number of options visible at once in select lists
pub const SELECT_PAGE_SIZE: usize = 15;

/// Primitive prompts used by every resolver
///
/// Every method fails with [`PromptError::NotInteractive`] when prompting is not
/// possible at call time and with [`PromptError::Aborted`] when the user cancels.
pub trait Prompter {
    /// Free text. `required` rejects empty input with `ValidationFailed`.
    fn text(&self, message: &str, default: &str, required: bool) -> Result<String, PromptError>;

    /// Text that is not echoed
    fn secret(&self, message: &str, required: bool) -> Result<String, PromptError>;

    /// Yes/no question, defaulting to no
    fn confirm(&self, message: &str) -> Result<bool, PromptError>;

    /// Pick one option; returns its index into `options`
    ///
    /// `default_option` is the label the cursor starts on, if any.
    fn select(
        &self,
        message: &str,
        options: &[String],
        default_option: Option<&str>,
    ) -> Result<usize, PromptError>;

    /// Pick any number of options; returns ascending indices without duplicates
    fn multi_select(
        &self,
        message: &str,
        options: &[String],
        default_indices: &[usize],
    ) -> Result<Vec<usize>, PromptError>;

    /// Integer input. The answer is parsed before it is returned.
    fn int(&self, message: &str, default: i64, required: bool) -> Result<i64, PromptError> {
        let answer = self.text(message, &default.to_string(), required)?;
        parse_int(&answer)
    }
}

/// Ask whether an existing file may be overwritten
pub fn confirm_overwrite<P: Prompter + ?Sized>(
    prompter: &P,
    filename: &str,
) -> Result<bool, PromptError> {
    prompter.confirm(&format!("Overwrite \"{}\"?", filename))
}

/// Terminal prompts rendered with inquire
pub struct InquirePrompter<G> {
    gate: G,
}

impl<G: Interactivity> InquirePrompter<G> {
    pub fn new(gate: G) -> Self {
        Self { gate }
    }

    fn ensure_interactive(&self) -> Result<(), PromptError> {
        if self.gate.can_prompt() {
            Ok(())
        } else {
            Err(PromptError::NotInteractive)
        }
    }
}

impl<G: Interactivity> Prompter for InquirePrompter<G> {
    fn text(&self, message: &str, default: &str, required: bool) -> Result<String, PromptError> {
        self.ensure_interactive()?;

        let mut prompt = Text::new(message);
        if !default.is_empty() {
            prompt = prompt.with_default(default);
        }
        if required {
            prompt = prompt.with_validator(|input: &str| to_validation(require_non_empty(input)));
        }

        let answer = prompt.prompt()?;
        if required {
            require_non_empty(&answer)?;
        }
        Ok(answer)
    }

    fn secret(&self, message: &str, required: bool) -> Result<String, PromptError> {
        self.ensure_interactive()?;

        let mut prompt = Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Hidden);
        if required {
            prompt = prompt.with_validator(|input: &str| to_validation(require_non_empty(input)));
        }

        let answer = prompt.prompt()?;
        if required {
            require_non_empty(&answer)?;
        }
        Ok(answer)
    }

    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        self.ensure_interactive()?;

        Ok(Confirm::new(message).with_default(false).prompt()?)
    }

    fn select(
        &self,
        message: &str,
        options: &[String],
        default_option: Option<&str>,
    ) -> Result<usize, PromptError> {
        self.ensure_interactive()?;

        let mut prompt = Select::new(message, options.to_vec())
            .with_render_config(select_render_config())
            .with_page_size(SELECT_PAGE_SIZE)
            .with_help_message("↑↓ to move, Enter to select, Esc to cancel");
        if let Some(cursor) =
            default_option.and_then(|def| options.iter().position(|o| o == def))
        {
            prompt = prompt.with_starting_cursor(cursor);
        }

        Ok(prompt.raw_prompt()?.index)
    }

    fn multi_select(
        &self,
        message: &str,
        options: &[String],
        default_indices: &[usize],
    ) -> Result<Vec<usize>, PromptError> {
        self.ensure_interactive()?;

        let chosen = MultiSelect::new(message, options.to_vec())
            .with_render_config(select_render_config())
            .with_page_size(SELECT_PAGE_SIZE)
            .with_default(default_indices)
            .with_help_message("↑↓ to move, Space to toggle, Enter to confirm")
            .raw_prompt()?;

        let mut indices: Vec<usize> = chosen.into_iter().map(|o| o.index).collect();
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    fn int(&self, message: &str, default: i64, required: bool) -> Result<i64, PromptError> {
        self.ensure_interactive()?;

        let default = default.to_string();
        let answer = Text::new(message)
            .with_default(&default)
            .with_validator(move |input: &str| {
                if required {
                    if let Err(e) = require_non_empty(input) {
                        return to_validation::<()>(Err(e));
                    }
                }
                to_validation(parse_int(input))
            })
            .prompt()?;

        parse_int(&answer)
    }
}
