//! Package domain types
//!
//! [`InstalledPackage`] and [`IndexEntry`] are plain snapshots handed out by a
//! [`port::PackageStore`]. The services in [`service`] never hold on to them
//! across store mutations.

pub mod builder;
pub mod port;
pub mod prompt;
pub mod service;
pub mod store;
pub mod version;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A package recorded in the local database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// OS release the package was installed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_release: Option<String>,

    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub locked: bool,

    /// Installed only to satisfy a dependency
    #[serde(default)]
    pub automatic: bool,

    /// Names of the packages this one requires
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
}

impl InstalledPackage {
    /// `name-version`, or just `name` when the version is unknown.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{}-{version}", self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for InstalledPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// A package available from the remote index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub pkgname: String,

    /// Empty when the index carries no version for this entry
    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_release: Option<String>,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub origin: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
}

impl IndexEntry {
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.pkgname.clone()
        } else {
            format!("{}-{}", self.pkgname, self.version)
        }
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// What `install_explicit` did to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The package was added; `dependencies` lists what was pulled in with it
    Installed { dependencies: Vec<String> },

    /// The package was already present as a dependency and is now explicit
    MarkedExplicit,

    /// The requested version was already installed explicitly
    AlreadyInstalled,
}
