//! Command handlers: resolve a selection and print it

use crate::cli::Commands;
use crate::error::Result;
use crate::format::Candidate;
use crate::platform::PlatformCatalog;
use crate::prompt::Prompter;
use crate::resolve::Resolver;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Run one resolution subcommand and render its outcome
pub async fn handle_resolve<C, P, W>(
    resolver: &mut Resolver<'_, C, P, W>,
    command: Commands,
    json: bool,
) -> Result<String>
where
    C: PlatformCatalog,
    P: Prompter + ?Sized,
    W: Write,
{
    let output = match command {
        Commands::Org => {
            let org = resolver.organization().await?;
            render_one("organization", &org, json)?
        }
        Commands::Region { message } => {
            let region = resolver.region(&message).await?;
            render_one("region", &region, json)?
        }
        Commands::Regions {
            message,
            current,
            exclude,
        } => {
            let regions = resolver.regions(&message, &current, &exclude).await?;
            render_many("regions", &regions, json)?
        }
        Commands::VmSize { size } => {
            let size = resolver.vm_size(size.as_deref().unwrap_or_default()).await?;
            render_one("VM size", &size, json)?
        }
    };
    Ok(output)
}

fn render_one<T: Candidate + Serialize>(what: &str, value: &T, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(value)?);
    }
    Ok(format!(
        "{} Selected {}: {}",
        "✓".green(),
        what,
        value.label().cyan()
    ))
}

fn render_many<T: Candidate + Serialize>(what: &str, values: &[T], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(values)?);
    }
    let mut lines = vec![format!("{} Selected {}:", "✓".green(), what)];
    lines.extend(values.iter().map(|v| format!("  {}", v.label().cyan())));
    Ok(lines.join("\n"))
}
