use super::error::{RequiredValue, ResolveError, ResourceKind};
use super::select::{find_by_key, multi_select_from_list, select_from_list};
use super::Resolver;
use crate::platform::api::types::Region;
use crate::platform::PlatformCatalog;
use crate::prompt::{PromptError, Prompter};
use crate::providers::sorted_regions;
use std::io::Write;

const DEFAULT_REGION_MESSAGE: &str = "Select regions:";

fn message_or_default(message: &str) -> &str {
    if message.is_empty() {
        DEFAULT_REGION_MESSAGE
    } else {
        message
    }
}

impl<C, P, W> Resolver<'_, C, P, W>
where
    C: PlatformCatalog,
    P: Prompter + ?Sized,
    W: Write,
{
    /// The region named by `--region`, or the one the user picks
    ///
    /// The cursor starts on the platform's suggested region.
    pub async fn region(&mut self, message: &str) -> Result<Region, ResolveError> {
        let (regions, suggested) = sorted_regions(self.catalog).await?;

        if let Some(code) = self.context.region_code() {
            log::debug!("Looking up region '{}'", code);
            return find_by_key(&regions, code)
                .cloned()
                .ok_or_else(|| ResolveError::not_found(ResourceKind::Region, code));
        }

        let default_code = suggested.as_ref().map(|r| r.code.as_str());
        log::debug!("Prompting for region among {}", regions.len());
        select_from_list(
            self.prompter,
            message_or_default(message),
            &regions,
            default_code,
        )
        .cloned()
        .map_err(|e| ResolveError::from_prompt(e, RequiredValue::RegionCode))
    }

    /// A non-empty set of regions, never including `exclude`
    ///
    /// Codes in `current` start checked. Pre-set codes from `--regions` are
    /// returned in the order given, and each must name a region other than
    /// `exclude`.
    pub async fn regions(
        &mut self,
        message: &str,
        current: &[String],
        exclude: &str,
    ) -> Result<Vec<Region>, ResolveError> {
        let (regions, _) = sorted_regions(self.catalog).await?;
        let included: Vec<Region> = regions.into_iter().filter(|r| r.code != exclude).collect();

        if let Some(codes) = self.context.region_codes() {
            log::debug!("Looking up regions {:?}", codes);
            return codes
                .into_iter()
                .map(|code| {
                    find_by_key(&included, code)
                        .cloned()
                        .ok_or_else(|| ResolveError::not_found(ResourceKind::Region, code))
                })
                .collect();
        }

        log::debug!("Prompting for regions among {}", included.len());
        let chosen = multi_select_from_list(
            self.prompter,
            message_or_default(message),
            &included,
            current,
        )
        .map_err(|e| ResolveError::from_prompt(e, RequiredValue::RegionCodes))?;

        if chosen.is_empty() {
            return Err(ResolveError::Prompt(PromptError::ValidationFailed(
                "at least one region must be selected".to_string(),
            )));
        }
        Ok(chosen.into_iter().cloned().collect())
    }
}
