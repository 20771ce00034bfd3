use super::error::{RequiredValue, ResolveError, ResourceKind};
use super::select::{find_by_key, select_from_list};
use super::Resolver;
use crate::platform::api::types::Organization;
use crate::platform::PlatformCatalog;
use crate::providers::sorted_organizations;
use crate::prompt::Prompter;
use std::io::Write;

impl<C, P, W> Resolver<'_, C, P, W>
where
    C: PlatformCatalog,
    P: Prompter + ?Sized,
    W: Write,
{
    /// The organization named by `--org`, the only personal one, or the one
    /// the user picks
    pub async fn organization(&mut self) -> Result<Organization, ResolveError> {
        let orgs = sorted_organizations(self.catalog).await?;

        if let Some(slug) = self.context.org_slug() {
            log::debug!("Looking up organization '{}'", slug);
            return find_by_key(&orgs, slug)
                .cloned()
                .ok_or_else(|| ResolveError::not_found(ResourceKind::Organization, slug));
        }

        // Slug isn't checked here, unlike the [personal] label callout.
        if let [only] = orgs.as_slice()
            && only.is_personal()
        {
            log::debug!("Auto-selecting organization '{}'", only.slug);
            let only = only.clone();
            self.notice(&format!(
                "automatically selected {} organization: {}",
                only.org_type.as_str().to_lowercase(),
                only.name
            ));
            return Ok(only);
        }

        log::debug!("Prompting for organization among {}", orgs.len());
        select_from_list(self.prompter, "Select Organization:", &orgs, None)
            .cloned()
            .map_err(|e| ResolveError::from_prompt(e, RequiredValue::OrgSlug))
    }
}
