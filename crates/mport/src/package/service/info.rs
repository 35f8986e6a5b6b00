//! Everything the database knows about one package name.

use thiserror::Error;

use crate::package::{
    IndexEntry, InstalledPackage,
    port::{PackageStore, StoreError},
    service::ExitCode,
};

/// The installed record, who still needs it, and what the index offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub installed: Option<InstalledPackage>,

    /// Empty when the package is not installed
    pub required_by: Vec<String>,

    /// Index entries for the name, in file order
    pub available: Vec<IndexEntry>,
}

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("Package {0} is neither installed nor in the index")]
    Unknown(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExitCode for InfoError {
    fn exit_code(&self) -> i32 {
        1
    }
}

/// Gather [`PackageInfo`] for `name`.
///
/// # Errors
///
/// Returns [`InfoError::Unknown`] when neither the database nor the index
/// has the name, and [`InfoError::Store`] if either cannot be read.
pub fn package_info<S>(store: &S, name: &str) -> Result<PackageInfo, InfoError>
where
    S: PackageStore + ?Sized,
{
    let installed = store.find_installed(name)?;
    let available = store.lookup_index(name)?;

    if installed.is_none() && available.is_empty() {
        return Err(InfoError::Unknown(name.to_string()));
    }

    let required_by = match &installed {
        Some(_) => store
            .dependents(name)?
            .into_iter()
            .map(|pkg| pkg.name)
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(
        name,
        installed = installed.is_some(),
        available = available.len(),
        "collected package info"
    );

    Ok(PackageInfo {
        name: name.to_string(),
        installed,
        required_by,
        available,
    })
}
