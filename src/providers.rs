//! Candidate providers
//!
//! Each provider fetches one candidate list from the catalog and puts it in
//! display order. Fetch errors are passed through untouched.

use crate::platform::PlatformCatalog;
use crate::platform::api::types::{Organization, Region, VmSize};
use crate::platform::api::Result;

/// Non-personal organizations first, then by name, then by slug
pub fn sort_organizations(orgs: &mut [Organization]) {
    orgs.sort_by(|a, b| {
        a.org_type
            .bucket()
            .cmp(&b.org_type.bucket())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// By name, ties broken by code
pub fn sort_regions(regions: &mut [Region]) {
    regions.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
}

/// Smallest memory first, ties broken by name
pub fn sort_vm_sizes(sizes: &mut [VmSize]) {
    sizes.sort_by(|a, b| a.memory_mb.cmp(&b.memory_mb).then_with(|| a.name.cmp(&b.name)));
}

pub async fn sorted_organizations<C: PlatformCatalog>(
    catalog: &C,
) -> Result<Vec<Organization>> {
    let mut orgs = catalog.list_organizations().await?;
    sort_organizations(&mut orgs);
    log::debug!("Fetched {} organizations", orgs.len());
    Ok(orgs)
}

/// Sorted regions plus the platform's suggested default region, if any
pub async fn sorted_regions<C: PlatformCatalog>(
    catalog: &C,
) -> Result<(Vec<Region>, Option<Region>)> {
    let platform = catalog.platform_regions().await?;
    let mut regions = platform.regions;
    sort_regions(&mut regions);
    log::debug!(
        "Fetched {} regions (suggested: {})",
        regions.len(),
        platform
            .nearest_region
            .as_ref()
            .map(|r| r.code.as_str())
            .unwrap_or("none")
    );
    Ok((regions, platform.nearest_region))
}

pub async fn sorted_vm_sizes<C: PlatformCatalog>(catalog: &C) -> Result<Vec<VmSize>> {
    let mut sizes = catalog.platform_vm_sizes().await?;
    sort_vm_sizes(&mut sizes);
    log::debug!("Fetched {} VM sizes", sizes.len());
    Ok(sizes)
}
