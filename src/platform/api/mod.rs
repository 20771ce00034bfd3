//! Platform API client module
//!
//! Provides authenticated access to the platform catalog: organizations,
//! regions and VM sizes.
//!
//! # Example
//!
//! ```rust,ignore
//! use select_ctl::platform::{api::PlatformApiClient, PlatformCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlatformApiClient::new(Some("token".to_string()))?;
//!
//!     for org in client.list_organizations().await? {
//!         println!("Organization: {}", org.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::PlatformApiClient;
pub use error::{PlatformApiError, Result};
pub use types::{Organization, OrganizationType, PlatformRegions, Region, VmSize};
