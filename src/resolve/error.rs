//! Resolution failures

use crate::platform::api::PlatformApiError;
use crate::prompt::PromptError;
use std::fmt;
use thiserror::Error;

/// The kind of value being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Organization,
    Region,
    VmSize,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Organization => "organization",
            ResourceKind::Region => "region",
            ResourceKind::VmSize => "vm size",
        })
    }
}

/// The flag or config value a non-interactive run must supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredValue {
    OrgSlug,
    RegionCode,
    RegionCodes,
    VmSize,
}

impl fmt::Display for RequiredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredValue::OrgSlug => "org slug must be specified when not running interactively",
            RequiredValue::RegionCode => {
                "region code must be specified when not running interactively"
            }
            RequiredValue::RegionCodes => {
                "regions codes must be specified in a comma-separated when not running interactively"
            }
            RequiredValue::VmSize => "vm size must be specified when not running interactively",
        })
    }
}

/// Discriminant callers match on to decide exit behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FetchFailed,
    NotInteractive,
    NotFound,
    /// Rejected input, and also prompts the terminal library could not run
    /// (I/O failure, or an empty option list)
    ValidationFailed,
    Aborted,
}

/// Errors returned by the resolvers
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The catalog call failed
    #[error(transparent)]
    Fetch(#[from] PlatformApiError),

    /// A pre-set value matched no candidate
    #[error("{resource} {value} not found")]
    NotFound {
        resource: ResourceKind,
        value: String,
    },

    /// Prompting was needed but the session is not interactive
    #[error("{0}")]
    Required(RequiredValue),

    /// The prompt was aborted or its input rejected
    #[error(transparent)]
    Prompt(PromptError),
}

impl ResolveError {
    pub(crate) fn not_found(resource: ResourceKind, value: &str) -> Self {
        ResolveError::NotFound {
            resource,
            value: value.to_string(),
        }
    }

    /// Wrap a prompt failure, naming `required` if the session can't prompt
    pub(crate) fn from_prompt(err: PromptError, required: RequiredValue) -> Self {
        match err {
            PromptError::NotInteractive => {
                log::warn!("Cannot prompt: {}", required);
                ResolveError::Required(required)
            }
            other => ResolveError::Prompt(other),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Fetch(_) => ErrorKind::FetchFailed,
            ResolveError::NotFound { .. } => ErrorKind::NotFound,
            ResolveError::Required(_) => ErrorKind::NotInteractive,
            ResolveError::Prompt(PromptError::Aborted) => ErrorKind::Aborted,
            // Non-interactive prompts are always wrapped by `from_prompt`
            ResolveError::Prompt(PromptError::NotInteractive) => ErrorKind::NotInteractive,
            ResolveError::Prompt(PromptError::ValidationFailed(_)) => ErrorKind::ValidationFailed,
            // No separate kind for prompt library failures
            ResolveError::Prompt(PromptError::Failed(_)) => ErrorKind::ValidationFailed,
        }
    }
}
