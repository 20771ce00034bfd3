//! Interactivity gate
//!
//! Decides whether a terminal prompt may be attempted right now.

use std::io::{self, IsTerminal};

/// Predicate guarding every prompt
pub trait Interactivity {
    /// Returns true when a prompt can be shown and answered
    fn can_prompt(&self) -> bool;
}

/// Gate backed by the process's standard streams
///
/// Prompts are read from stdin and rendered on stderr, so both must be attached
/// to a terminal. The streams are inspected on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGate {
    /// Set by `--non-interactive`
    force_non_interactive: bool,
}

impl TerminalGate {
    pub fn new(force_non_interactive: bool) -> Self {
        Self {
            force_non_interactive,
        }
    }
}

impl Interactivity for TerminalGate {
    fn can_prompt(&self) -> bool {
        !self.force_non_interactive && io::stdin().is_terminal() && io::stderr().is_terminal()
    }
}

/// Gate with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub bool);

impl Interactivity for FixedGate {
    fn can_prompt(&self) -> bool {
        self.0
    }
}
