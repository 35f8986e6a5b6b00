//!
//! Helps break down the pieces of running the `list` command.
//!

use crate::package::{
    InstalledPackage,
    port::{PackageStore, StoreError},
};

/// Which installed packages a listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,

    /// Packages the operator asked for, not ones pulled in as dependencies
    Explicit,

    Locked,
}

impl ListFilter {
    #[must_use]
    pub fn matches(self, package: &InstalledPackage) -> bool {
        match self {
            Self::All => true,
            Self::Explicit => !package.automatic,
            Self::Locked => package.locked,
        }
    }
}

/// Installed packages that pass `filter`, in store order.
///
/// # Errors
///
/// Returns [`StoreError`] if the installed list cannot be read.
pub fn list_installed<S>(store: &S, filter: ListFilter) -> Result<Vec<InstalledPackage>, StoreError>
where
    S: PackageStore + ?Sized,
{
    let packages: Vec<_> = store
        .list_installed()?
        .into_iter()
        .filter(|pkg| filter.matches(pkg))
        .collect();

    tracing::debug!(?filter, count = packages.len(), "listing installed packages");

    Ok(packages)
}
