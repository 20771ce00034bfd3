//! # select-ctl
//!
//! Resolves the organization, region, region set or VM size a platform command
//! needs. Values come from flags, environment or `~/.select-ctl.toml`; when one
//! is missing and the session is interactive the user picks from a list.
//!
//! ## Example
//!
//! ```rust,no_run
//! use select_ctl::platform::api::PlatformApiClient;
//! use select_ctl::prompt::{InquirePrompter, TerminalGate};
//! use select_ctl::resolve::{Resolver, SelectionContext};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlatformApiClient::new(Some("token".to_string()))?;
//! let prompter = InquirePrompter::new(TerminalGate::default());
//! let context = SelectionContext::new().with_region_code("ams");
//!
//! let mut resolver = Resolver::new(&client, &prompter, &context, std::io::stderr());
//! let org = resolver.organization().await?;
//! let region = resolver.region("").await?;
//! println!("{} in {}", org.slug, region.code);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod platform;
pub mod prompt;
pub mod providers;
pub mod resolve;

pub use error::{Result, SelectCtlError};
pub use format::Candidate;
pub use resolve::{
    multi_select_from_list, select_from_list, ErrorKind, Resolver, ResolveError,
    SelectionContext,
};

use cli::Cli;
use platform::api::PlatformApiClient;
use prompt::{InquirePrompter, TerminalGate};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the selection context from flags layered over the config file
pub fn selection_context(cli: &Cli, config: &config::types::Config) -> SelectionContext {
    SelectionContext {
        org_slug: cli.org.clone().or_else(|| config.organization.clone()),
        region_code: cli.region.clone().or_else(|| config.region.clone()),
        region_codes: cli.regions.clone(),
    }
}

pub async fn run_command(cli: Cli) -> Result<String> {
    let config = config::load_config(cli.config.as_deref())?;
    let context = selection_context(&cli, &config);

    let token = cli
        .access_token
        .clone()
        .or_else(|| config.platform.valid_access_token());
    let client = match cli.api_url.clone().or_else(|| config.platform.api_url.clone()) {
        Some(url) => PlatformApiClient::with_url(url, token),
        None => PlatformApiClient::new(token),
    }
    .map_err(ResolveError::from)?;
    log::info!("Using platform API at {}", client.api_url());

    let prompter = InquirePrompter::new(TerminalGate::new(cli.non_interactive));
    let mut resolver = Resolver::new(&client, &prompter, &context, std::io::stderr());

    let command = match cli.command {
        cli::Commands::VmSize { size: None } => cli::Commands::VmSize {
            size: config.vm_size.clone(),
        },
        other => other,
    };
    handlers::handle_resolve(&mut resolver, command, cli.json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["select-ctl", "--org", "flagged", "org"]).unwrap();
        let config = config::types::Config {
            organization: Some("configured".to_string()),
            region: Some("ams".to_string()),
            ..Default::default()
        };

        let ctx = selection_context(&cli, &config);
        assert_eq!(ctx.org_slug(), Some("flagged"));
        assert_eq!(ctx.region_code(), Some("ams"));
    }
}
