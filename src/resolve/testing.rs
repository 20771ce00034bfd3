//! In-memory catalog and scripted prompter for resolver tests

use crate::platform::api::types::{
    Organization, OrganizationType, PlatformRegions, Region, VmSize,
};
use crate::platform::api::{PlatformApiError, Result};
use crate::platform::PlatformCatalog;
use crate::prompt::{PromptError, Prompter};
use std::cell::RefCell;

#[derive(Default)]
pub struct MemoryCatalog {
    pub organizations: Vec<Organization>,
    pub regions: Vec<Region>,
    pub nearest_region: Option<Region>,
    pub vm_sizes: Vec<VmSize>,
    pub fail: bool,
}

impl MemoryCatalog {
    fn check(&self) -> Result<()> {
        if self.fail {
            Err(PlatformApiError::ServerError {
                status: 503,
                message: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl PlatformCatalog for MemoryCatalog {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.check()?;
        Ok(self.organizations.clone())
    }

    async fn platform_regions(&self) -> Result<PlatformRegions> {
        self.check()?;
        Ok(PlatformRegions {
            regions: self.regions.clone(),
            nearest_region: self.nearest_region.clone(),
        })
    }

    async fn platform_vm_sizes(&self) -> Result<Vec<VmSize>> {
        self.check()?;
        Ok(self.vm_sizes.clone())
    }
}

/// A select or multi-select call as the prompter saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub message: String,
    pub options: Vec<String>,
    pub default_option: Option<String>,
    pub default_indices: Vec<usize>,
}

/// Answers selects from a script; `None` answers mean "not interactive"
pub struct ScriptedPrompter {
    pub select_answer: Option<std::result::Result<usize, PromptError>>,
    pub multi_answer: Option<std::result::Result<Vec<usize>, PromptError>>,
    pub calls: RefCell<Vec<SelectCall>>,
}

impl ScriptedPrompter {
    pub fn non_interactive() -> Self {
        Self {
            select_answer: None,
            multi_answer: None,
            calls: RefCell::new(vec![]),
        }
    }

    pub fn selecting(index: usize) -> Self {
        Self {
            select_answer: Some(Ok(index)),
            ..Self::non_interactive()
        }
    }

    pub fn multi_selecting(indices: Vec<usize>) -> Self {
        Self {
            multi_answer: Some(Ok(indices)),
            ..Self::non_interactive()
        }
    }

    pub fn failing(err: PromptError) -> Self {
        Self {
            select_answer: Some(Err(err.clone())),
            multi_answer: Some(Err(err)),
            calls: RefCell::new(vec![]),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, _: &str, _: &str, _: bool) -> std::result::Result<String, PromptError> {
        Err(PromptError::NotInteractive)
    }

    fn secret(&self, _: &str, _: bool) -> std::result::Result<String, PromptError> {
        Err(PromptError::NotInteractive)
    }

    fn confirm(&self, _: &str) -> std::result::Result<bool, PromptError> {
        Err(PromptError::NotInteractive)
    }

    fn select(
        &self,
        message: &str,
        options: &[String],
        default_option: Option<&str>,
    ) -> std::result::Result<usize, PromptError> {
        self.calls.borrow_mut().push(SelectCall {
            message: message.to_string(),
            options: options.to_vec(),
            default_option: default_option.map(str::to_string),
            default_indices: vec![],
        });
        self.select_answer
            .clone()
            .unwrap_or(Err(PromptError::NotInteractive))
    }

    fn multi_select(
        &self,
        message: &str,
        options: &[String],
        default_indices: &[usize],
    ) -> std::result::Result<Vec<usize>, PromptError> {
        self.calls.borrow_mut().push(SelectCall {
            message: message.to_string(),
            options: options.to_vec(),
            default_option: None,
            default_indices: default_indices.to_vec(),
        });
        self.multi_answer
            .clone()
            .unwrap_or(Err(PromptError::NotInteractive))
    }
}

pub fn org(name: &str, slug: &str, org_type: OrganizationType) -> Organization {
    Organization {
        id: format!("id-{}", slug),
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
