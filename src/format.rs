//! Selection labels for each candidate kind

use crate::platform::api::types::{Organization, Region, VmSize};

/// One selectable item
pub trait Candidate {
    /// The value users pass on the command line to pick this candidate
    fn key(&self) -> &str;

    /// Label shown in select lists
    fn label(&self) -> String;
}

impl Candidate for Organization {
    fn key(&self) -> &str {
        &self.slug
    }

    /// `"<name> (<slug>)"`, with ` [personal]` appended for a personal
    /// organization whose slug isn't literally `personal`
    fn label(&self) -> String {
        let personal_callout = if self.is_personal() && self.slug != "personal" {
            " [personal]"
        } else {
            ""
        };
        format!("{} ({}){}", self.name, self.slug, personal_callout)
    }
}

impl Candidate for Region {
    fn key(&self) -> &str {
        &self.code
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl Candidate for VmSize {
    fn key(&self) -> &str {
        &self.name
    }

    fn label(&self) -> String {
        format!("{} - {}", self.name, self.memory_mb)
    }
}

/// Labels for every candidate, in list order
pub fn labels<T: Candidate>(candidates: &[T]) -> Vec<String> {
    candidates.iter().map(Candidate::label).collect()
}

/// Label of the candidate whose key is `key`, if any
pub fn default_label<T: Candidate>(candidates: &[T], key: &str) -> Option<String> {
    candidates
        .iter()
        .find(|c| c.key() == key)
        .map(Candidate::label)
}
