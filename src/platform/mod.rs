//! Platform module for platform catalog access
//!
//! This module provides:
//! - The [`PlatformCatalog`] seam the candidate providers fetch through
//! - API client for the platform catalog endpoints

pub mod api;
pub mod catalog;

pub use catalog::PlatformCatalog;
