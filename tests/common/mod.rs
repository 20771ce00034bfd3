//! Shared fakes for the integration tests

#![allow(dead_code)]

use select_ctl::platform::api::types::{
    Organization, OrganizationType, PlatformRegions, Region, VmSize,
};
use select_ctl::platform::api::{PlatformApiError, Result};
use select_ctl::platform::PlatformCatalog;
use select_ctl::prompt::{PromptError, Prompter};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct FakeCatalog {
    pub organizations: Vec<Organization>,
    pub regions: Vec<Region>,
    pub nearest_region: Option<Region>,
    pub vm_sizes: Vec<VmSize>,
    pub unavailable: bool,
}

impl FakeCatalog {
    fn available(&self) -> Result<()> {
        if self.unavailable {
            Err(PlatformApiError::ServerError {
                status: 502,
                message: "bad gateway".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl PlatformCatalog for FakeCatalog {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.available()?;
        Ok(self.organizations.clone())
    }

    async fn platform_regions(&self) -> Result<PlatformRegions> {
        self.available()?;
        Ok(PlatformRegions {
            regions: self.regions.clone(),
            nearest_region: self.nearest_region.clone(),
        })
    }

    async fn platform_vm_sizes(&self) -> Result<Vec<VmSize>> {
        self.available()?;
        Ok(self.vm_sizes.clone())
    }
}

/// Prompter that answers every select with the same index and records the
/// option lists it was shown. `interactive = false` behaves like a pipe.
pub struct FakePrompter {
    pub interactive: bool,
    pub select_index: usize,
    pub multi_indices: Vec<usize>,
    pub shown: RefCell<Vec<Vec<String>>>,
    pub prechecked: RefCell<Vec<usize>>,
    pub prompts: Cell<usize>,
}

impl FakePrompter {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            select_index: 0,
            multi_indices: vec![],
            shown: RefCell::new(vec![]),
            prechecked: RefCell::new(vec![]),
            prompts: Cell::new(0),
        }
    }

    pub fn answering(index: usize) -> Self {
        Self {
            select_index: index,
            ..Self::new(true)
        }
    }

    fn enter(&self) -> std::result::Result<(), PromptError> {
        self.prompts.set(self.prompts.get() + 1);
        if self.interactive {
            Ok(())
        } else {
            Err(PromptError::NotInteractive)
        }
    }
}

impl Prompter for FakePrompter {
    fn text(&self, _: &str, default: &str, _: bool) -> std::result::Result<String, PromptError> {
        self.enter()?;
        Ok(default.to_string())
    }

    fn secret(&self, _: &str, _: bool) -> std::result::Result<String, PromptError> {
        self.enter()?;
        Ok(String::new())
    }

    fn confirm(&self, _: &str) -> std::result::Result<bool, PromptError> {
        self.enter()?;
        Ok(false)
    }

    fn select(
        &self,
        _: &str,
        options: &[String],
        _: Option<&str>,
    ) -> std::result::Result<usize, PromptError> {
        self.enter()?;
        self.shown.borrow_mut().push(options.to_vec());
        Ok(self.select_index)
    }

    fn multi_select(
        &self,
        _: &str,
        options: &[String],
        default_indices: &[usize],
    ) -> std::result::Result<Vec<usize>, PromptError> {
        self.enter()?;
        self.shown.borrow_mut().push(options.to_vec());
        *self.prechecked.borrow_mut() = default_indices.to_vec();
        Ok(self.multi_indices.clone())
    }
}

pub fn org(name: &str, slug: &str, org_type: OrganizationType) -> Organization {
    Organization {
        id: format!("org-{}", slug),
        name: name.to_string(),
        slug: slug.to_string(),
        org_type,
    }
}

pub fn region(name: &str, code: &str) -> Region {
    Region {
        code: code.to_string(),
        name: name.to_string(),
        gateway_available: false,
    }
}

pub fn vm_size(name: &str, memory_mb: u32) -> VmSize {
    VmSize {
        name: name.to_string(),
        cpu_cores: 1.0,
        memory_mb,
        price_month: 0.0,
    }
}
