pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".select-ctl.toml";

/// Get the global config file path (~/.select-ctl.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or from the global config file
///
/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub fn load_config(path: Option<&Path>) -> Result<types::Config> {
    let path = match path.map(Path::to_path_buf).or_else(global_config_path) {
        Some(p) => p,
        None => return Ok(types::Config::default()),
    };

    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return Ok(types::Config::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&content)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<types::Config> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}
