//! Package store port and error types
//!
//! This module defines the core port the services talk to. The
//! `PackageStore` trait abstracts the package database and the remote index
//! so the update, install and removal algorithms can be driven by a YAML file
//! database, a real package database, or a mock in tests.

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    commands::CommandError,
    package::{IndexEntry, InstallOutcome, InstalledPackage},
};

/// Port for package store operations (Hexagonal Architecture)
///
/// Every query returns owned values evaluated against the store's current
/// state. Callers must not assume a result stays valid after a mutating call.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait PackageStore {
    /// List every installed package, in store order
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be read.
    fn list_installed(&self) -> Result<Vec<InstalledPackage>, StoreError>;

    /// All index entries whose package name is exactly `name`, in index order
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the index cannot be read.
    fn lookup_index(&self, name: &str) -> Result<Vec<IndexEntry>, StoreError>;

    /// Index entries whose name or comment matches `query`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the index cannot be read.
    fn search_index(&self, query: &str) -> Result<Vec<IndexEntry>, StoreError>;

    /// Install `pkgname` at `version` as an explicit package, pulling in its
    /// dependencies
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the entry or one of its dependencies is not
    /// in the index, or the database cannot be updated.
    fn install_explicit(&self, pkgname: &str, version: &str)
    -> Result<InstallOutcome, StoreError>;

    /// Installed packages that still depend on `name`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be read.
    fn dependents(&self, name: &str) -> Result<Vec<InstalledPackage>, StoreError>;

    /// Remove `name` from the database
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the package is not installed, is locked, is
    /// still required, or its removal fails.
    fn delete_package(&self, name: &str) -> Result<(), StoreError>;

    /// Look up a single installed package by name
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be read.
    fn find_installed(&self, name: &str) -> Result<Option<InstalledPackage>, StoreError> {
        Ok(self
            .list_installed()?
            .into_iter()
            .find(|pkg| pkg.name == name))
    }
}

/// Errors from package store operations
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Failed to read {}: {source_message}", path.display())]
    Read {
        path: PathBuf,
        source_message: String,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Arc<serde_yaml::Error>,
    },

    #[error("Failed to write {}: {source_message}", path.display())]
    Write {
        path: PathBuf,
        source_message: String,
    },

    #[error("Package database directory not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Package {name}-{version} not found in the index")]
    NotInIndex { name: String, version: String },

    #[error("Dependency {dependency} of {package} not found in the index")]
    MissingDependency { package: String, dependency: String },

    #[error("Package {0} is not installed")]
    NotInstalled(String),

    #[error("Package {0} is locked")]
    Locked(String),

    #[error("Package {name} is still required by: {}", dependents.join(", "))]
    StillRequired {
        name: String,
        dependents: Vec<String>,
    },

    #[error("Delete command for {name} failed: {source}")]
    HookFailed {
        name: String,
        #[source]
        source: CommandError,
    },
}
