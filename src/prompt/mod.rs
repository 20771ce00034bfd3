//! Prompting primitives
//!
//! - [`gate`] decides whether a prompt may be shown at all
//! - [`adapter`] exposes text, secret, confirm, select and multi-select prompts
//! - [`validate`] holds the typed validators composed into text prompts

pub mod adapter;
pub mod error;
pub mod gate;
pub mod render;
pub mod validate;

pub use adapter::{confirm_overwrite, InquirePrompter, Prompter, SELECT_PAGE_SIZE};
pub use error::PromptError;
pub use gate::{FixedGate, Interactivity, TerminalGate};
