//! API response types for the platform catalog
//!
//! These types mirror the backend DTOs for organizations, regions and VM sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResponse<T> {
    /// The response data
    pub data: T,
}

/// Organization category as reported by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationType {
    /// The implicit single-member organization every user owns
    Personal,
    /// A team organization
    Shared,
    #[serde(other)]
    Unknown,
}

impl OrganizationType {
    /// Returns the uppercase wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationType::Personal => "PERSONAL",
            OrganizationType::Shared => "SHARED",
            OrganizationType::Unknown => "UNKNOWN",
        }
    }

    /// Sort bucket: non-personal organizations come before personal ones
    pub(crate) fn bucket(&self) -> u8 {
        match self {
            OrganizationType::Shared => 0,
            OrganizationType::Unknown => 1,
            OrganizationType::Personal => 2,
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Organization information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique organization identifier
    pub id: String,
    /// Organization display name
    pub name: String,
    /// URL-friendly slug, used as the `--org` value
    pub slug: String,
    /// Organization category
    #[serde(rename = "type")]
    pub org_type: OrganizationType,
}

impl Organization {
    /// Returns true for the user's personal organization
    pub fn is_personal(&self) -> bool {
        self.org_type == OrganizationType::Personal
    }
}

/// A platform region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Region code (e.g., "ams", "iad")
    pub code: String,
    /// Human-readable name (e.g., "Amsterdam, Netherlands")
    pub name: String,
    /// Whether the region hosts a gateway
    #[serde(default)]
    pub gateway_available: bool,
}

/// Response of the platform regions endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRegions {
    /// All regions open for deployments
    pub regions: Vec<Region>,
    /// The region the platform suggests for this client, if any
    #[serde(default)]
    pub nearest_region: Option<Region>,
}

/// A machine size offered by the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VmSize {
    /// Size name (e.g., "shared-cpu-1x")
    pub name: String,
    /// Number of CPU cores
    pub cpu_cores: f32,
    /// Memory in megabytes
    #[serde(rename = "memoryMB")]
    pub memory_mb: u32,
    /// Monthly price in USD
    #[serde(default)]
    pub price_month: f32,
}

/// API error response format
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: Option<String>,
    /// Detailed error message
    pub message: Option<String>,
}

impl ApiErrorResponse {
    /// Get the error message, preferring `message` over `error`
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
