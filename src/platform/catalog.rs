//! The remote data service the candidate providers read from

use super::api::error::Result;
use super::api::types::{Organization, PlatformRegions, VmSize};
use std::future::Future;

/// Source of the three candidate lists
///
/// Implemented by [`super::api::PlatformApiClient`] for the real platform and by
/// in-memory catalogs in tests. Errors are returned as-is; implementations do
/// not retry or cache.
pub trait PlatformCatalog {
    /// Organizations the current user belongs to
    fn list_organizations(&self) -> impl Future<Output = Result<Vec<Organization>>>;

    /// Regions open for deployments, plus the platform's suggested default
    fn platform_regions(&self) -> impl Future<Output = Result<PlatformRegions>>;

    /// Machine sizes offered by the platform
    fn platform_vm_sizes(&self) -> impl Future<Output = Result<Vec<VmSize>>>;
}
