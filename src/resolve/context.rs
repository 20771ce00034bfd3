//! Pre-set values consulted by the resolvers

use std::collections::HashSet;

/// Values supplied ahead of resolution by flags, environment or config
///
/// Built once per command and never mutated while resolving. Empty strings
/// count as "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Organization slug
    pub org_slug: Option<String>,
    /// Single region code
    pub region_code: Option<String>,
    /// Region codes for multi-region selection
    pub region_codes: Option<Vec<String>>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org_slug(mut self, slug: impl Into<String>) -> Self {
        self.org_slug = Some(slug.into());
        self
    }

    pub fn with_region_code(mut self, code: impl Into<String>) -> Self {
        self.region_code = Some(code.into());
        self
    }

    pub fn with_region_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.region_codes = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn org_slug(&self) -> Option<&str> {
        non_empty(self.org_slug.as_deref())
    }

    pub fn region_code(&self) -> Option<&str> {
        non_empty(self.region_code.as_deref())
    }

    /// Non-empty region codes without repeats, in first-given order, or
    /// `None` if nothing usable was supplied
    pub fn region_codes(&self) -> Option<Vec<&str>> {
        let mut seen = HashSet::new();
        let codes: Vec<&str> = self
            .region_codes
            .iter()
            .flatten()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .collect();
        (!codes.is_empty()).then_some(codes)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
