//! Resolvers
//!
//! Each resolver produces one selection (organization, region, region set or
//! VM size) following the same protocol:
//!
//! 1. Fetch the sorted candidates; fetch errors are returned as-is.
//! 2. A pre-set value must match a candidate key exactly, otherwise the
//!    resolution fails with `NotFound`. It never falls through to a prompt.
//! 3. Organizations only: a lone personal organization is picked without asking.
//! 4. Otherwise prompt. A session that can't prompt yields
//!    [`ResolveError::Required`] naming the missing flag.

mod context;
mod error;
mod organization;
mod region;
mod select;
mod vm_size;

#[cfg(test)]
pub(crate) mod testing;

pub use context::SelectionContext;
pub use error::{ErrorKind, RequiredValue, ResolveError, ResourceKind};
pub use select::{multi_select_from_list, select_from_list};

use crate::platform::PlatformCatalog;
use crate::prompt::Prompter;
use std::io::Write;

/// Drives resolutions for one command invocation
///
/// `out` receives informational notices, such as the organization auto-select
/// line.
pub struct Resolver<'a, C, P: ?Sized, W> {
    catalog: &'a C,
    prompter: &'a P,
    context: &'a SelectionContext,
    out: W,
}

impl<'a, C, P, W> Resolver<'a, C, P, W>
where
    C: PlatformCatalog,
    P: Prompter + ?Sized,
    W: Write,
{
    pub fn new(catalog: &'a C, prompter: &'a P, context: &'a SelectionContext, out: W) -> Self {
        Self {
            catalog,
            prompter,
            context,
            out,
        }
    }

    fn notice(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write notice: {}", e);
        }
    }
}
