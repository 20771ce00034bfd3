use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default organization slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Default region code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Default VM size name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<String>,
    pub platform: PlatformConfig,
}

/// Platform API access
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PlatformConfig {
    /// Overrides the default API URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Unix timestamp after which `access_token` is ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl PlatformConfig {
    /// The access token, unless it has expired
    pub fn valid_access_token(&self) -> Option<String> {
        if let Some(expires_at) = self.expires_at {
            let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
            if now > expires_at {
                log::debug!("Configured access token expired at {}", expires_at);
                return None;
            }
        }
        self.access_token.clone()
    }
}
