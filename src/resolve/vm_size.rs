use super::error::{RequiredValue, ResolveError, ResourceKind};
use super::select::{find_by_key, select_from_list};
use super::Resolver;
use crate::platform::api::types::VmSize;
use crate::platform::PlatformCatalog;
use crate::prompt::Prompter;
use crate::providers::sorted_vm_sizes;
use std::io::Write;

impl<C, P, W> Resolver<'_, C, P, W>
where
    C: PlatformCatalog,
    P: Prompter + ?Sized,
    W: Write,
{
    /// The VM size named `preset`, or the one the user picks when `preset`
    /// is empty
    pub async fn vm_size(&mut self, preset: &str) -> Result<VmSize, ResolveError> {
        let sizes = sorted_vm_sizes(self.catalog).await?;

        let preset = preset.trim();
        if !preset.is_empty() {
            log::debug!("Looking up VM size '{}'", preset);
            return find_by_key(&sizes, preset)
                .cloned()
                .ok_or_else(|| ResolveError::not_found(ResourceKind::VmSize, preset));
        }

        log::debug!("Prompting for VM size among {}", sizes.len());
        select_from_list(self.prompter, "Select VM size:", &sizes, None)
            .cloned()
            .map_err(|e| ResolveError::from_prompt(e, RequiredValue::VmSize))
    }
}
