//! YAML file package database
//!
//! The database directory holds two files:
//!
//! - `installed.yaml`: a list of [`InstalledPackage`] records
//! - `index.yaml`: a list of [`IndexEntry`] records
//!
//! Both are read again on every call, so each query sees the effect of every
//! earlier mutation. A missing or empty file is an empty list.

use std::{
    cmp::Ordering,
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{
    commands::{CommandError, CommandRunner},
    fs::FileSystem,
    package::{
        IndexEntry, InstallOutcome, InstalledPackage,
        port::{PackageStore, StoreError},
        version::{PkgVersion, VersionComparator},
    },
};

pub const INSTALLED_FILE: &str = "installed.yaml";
pub const INDEX_FILE: &str = "index.yaml";

/// Placeholder in `delete_command` replaced with the package name
pub const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Clone)]
pub struct YamlPackageStore<F: FileSystem, CR: CommandRunner> {
    fs: F,
    runner: CR,
    database_dir: PathBuf,
    os_release: String,
    delete_command: Option<String>,
}

impl<F: FileSystem, CR: CommandRunner> YamlPackageStore<F, CR> {
    pub fn new(fs: F, runner: CR, database_dir: PathBuf, os_release: &str) -> Self {
        Self {
            fs,
            runner,
            database_dir,
            os_release: os_release.to_string(),
            delete_command: None,
        }
    }

    /// Run `command` (with `{name}` substituted) before each deletion.
    #[must_use]
    pub fn with_delete_command(mut self, command: Option<String>) -> Self {
        self.delete_command = command;
        self
    }

    #[must_use]
    pub fn database_dir(&self) -> &Path {
        &self.database_dir
    }

    fn installed_path(&self) -> PathBuf {
        self.database_dir.join(INSTALLED_FILE)
    }

    fn index_path(&self) -> PathBuf {
        self.database_dir.join(INDEX_FILE)
    }

    fn load_list<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, StoreError> {
        if !self.fs.path_exists(&self.database_dir) {
            return Err(StoreError::DatabaseNotFound(self.database_dir.clone()));
        }
        if !self.fs.path_exists(path) {
            return Ok(Vec::new());
        }

        let content = self.fs.read_file(path).map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source_message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }

    fn load_installed(&self) -> Result<Vec<InstalledPackage>, StoreError> {
        self.load_list(&self.installed_path())
    }

    fn load_index(&self) -> Result<Vec<IndexEntry>, StoreError> {
        self.load_list(&self.index_path())
    }

    fn save_installed(&self, packages: &[InstalledPackage]) -> Result<(), StoreError> {
        let path = self.installed_path();
        let content = serde_yaml::to_string(packages).map_err(|e| StoreError::Write {
            path: path.clone(),
            source_message: e.to_string(),
        })?;

        self.fs
            .write_file(&path, content.as_bytes())
            .map_err(|e| StoreError::Write {
                path,
                source_message: e.to_string(),
            })
    }

    fn record_for(&self, entry: &IndexEntry, automatic: bool) -> InstalledPackage {
        InstalledPackage {
            name: entry.pkgname.clone(),
            version: (!entry.version.is_empty()).then(|| entry.version.clone()),
            os_release: Some(self.os_release.clone()),
            origin: entry.origin.clone(),
            comment: entry.comment.clone(),
            locked: false,
            automatic,
            depends: entry.depends.clone(),
        }
    }

    /// Append records for every dependency of `entry` that is not installed
    /// yet, deepest first.
    fn add_missing_dependencies(
        &self,
        entry: &IndexEntry,
        index: &[IndexEntry],
        installed: &mut Vec<InstalledPackage>,
        visiting: &mut BTreeSet<String>,
        added: &mut Vec<String>,
    ) -> Result<(), StoreError> {
        for dependency in &entry.depends {
            if installed.iter().any(|pkg| &pkg.name == dependency)
                || !visiting.insert(dependency.clone())
            {
                continue;
            }

            let candidate = newest_entry(index, dependency).ok_or_else(|| {
                StoreError::MissingDependency {
                    package: entry.pkgname.clone(),
                    dependency: dependency.clone(),
                }
            })?;

            self.add_missing_dependencies(candidate, index, installed, visiting, added)?;

            tracing::debug!(
                package = %entry.pkgname,
                dependency = %candidate.display_name(),
                "adding dependency"
            );
            installed.push(self.record_for(candidate, true));
            added.push(candidate.display_name());
        }

        Ok(())
    }

    fn run_delete_hook(&self, name: &str) -> Result<(), StoreError> {
        let Some(template) = self.delete_command.as_deref() else {
            return Ok(());
        };

        let command = template.replace(NAME_PLACEHOLDER, name);
        let output = self
            .runner
            .execute(&command)
            .map_err(|source| StoreError::HookFailed {
                name: name.to_string(),
                source,
            })?;

        if !output.is_success() {
            return Err(StoreError::HookFailed {
                name: name.to_string(),
                source: CommandError::non_zero_exit(&command, &output),
            });
        }

        Ok(())
    }
}

/// Highest version of `name` in the index.
fn newest_entry<'a>(index: &'a [IndexEntry], name: &str) -> Option<&'a IndexEntry> {
    index
        .iter()
        .filter(|entry| entry.pkgname == name)
        .fold(None, |best: Option<&IndexEntry>, entry| match best {
            Some(current) if PkgVersion.compare(&entry.version, &current.version) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(entry),
        })
}

/// Matches a query against names and comments.
///
/// `*` and `?` make the query a glob over the whole field; anything else is a
/// substring match.
enum Matcher<'a> {
    Glob(Regex),
    Substring(&'a str),
}

impl<'a> Matcher<'a> {
    fn new(query: &'a str) -> Self {
        if !query.contains(['*', '?']) {
            return Self::Substring(query);
        }

        let mut pattern = String::from("^");
        for c in query.chars() {
            match c {
                '*' => pattern.push_str(".*"),
                '?' => pattern.push('.'),
                other => pattern.push_str(&regex::escape(&other.to_string())),
            }
        }
        pattern.push('$');

        match Regex::new(&pattern) {
            Ok(regex) => Self::Glob(regex),
            Err(e) => {
                tracing::warn!(query, error = %e, "invalid search pattern, matching literally");
                Self::Substring(query)
            }
        }
    }

    fn is_match(&self, field: &str) -> bool {
        match self {
            Self::Glob(regex) => regex.is_match(field),
            Self::Substring(query) => field.contains(query),
        }
    }
}

impl<F: FileSystem, CR: CommandRunner> PackageStore for YamlPackageStore<F, CR> {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>, StoreError> {
        self.load_installed()
    }

    fn lookup_index(&self, name: &str) -> Result<Vec<IndexEntry>, StoreError> {
        Ok(self
            .load_index()?
            .into_iter()
            .filter(|entry| entry.pkgname == name)
            .collect())
    }

    fn search_index(&self, query: &str) -> Result<Vec<IndexEntry>, StoreError> {
        let matcher = Matcher::new(query);

        Ok(self
            .load_index()?
            .into_iter()
            .filter(|entry| matcher.is_match(&entry.pkgname) || matcher.is_match(&entry.comment))
            .collect())
    }

    fn install_explicit(
        &self,
        pkgname: &str,
        version: &str,
    ) -> Result<InstallOutcome, StoreError> {
        let index = self.load_index()?;
        let entry = index
            .iter()
            .find(|entry| entry.pkgname == pkgname && entry.version == version)
            .ok_or_else(|| StoreError::NotInIndex {
                name: pkgname.to_string(),
                version: version.to_string(),
            })?;

        let mut installed = self.load_installed()?;

        if let Some(existing) = installed.iter_mut().find(|pkg| pkg.name == pkgname) {
            if existing.version.as_deref().unwrap_or_default() == version {
                if !existing.automatic {
                    return Ok(InstallOutcome::AlreadyInstalled);
                }
                existing.automatic = false;
                self.save_installed(&installed)?;
                tracing::info!(package = %pkgname, "marked explicit");
                return Ok(InstallOutcome::MarkedExplicit);
            }
        }

        let mut visiting = BTreeSet::from([pkgname.to_string()]);
        let mut added = Vec::new();
        self.add_missing_dependencies(entry, &index, &mut installed, &mut visiting, &mut added)?;

        let record = self.record_for(entry, false);
        match installed.iter_mut().find(|pkg| pkg.name == pkgname) {
            Some(existing) => {
                tracing::info!(
                    package = %pkgname,
                    from = existing.version.as_deref().unwrap_or_default(),
                    to = version,
                    "replacing installed version"
                );
                *existing = InstalledPackage {
                    locked: existing.locked,
                    ..record
                };
            }
            None => installed.push(record),
        }

        self.save_installed(&installed)?;
        tracing::info!(package = %pkgname, version, dependencies = added.len(), "installed");

        Ok(InstallOutcome::Installed {
            dependencies: added,
        })
    }

    fn dependents(&self, name: &str) -> Result<Vec<InstalledPackage>, StoreError> {
        Ok(self
            .load_installed()?
            .into_iter()
            .filter(|pkg| pkg.name != name && pkg.depends.iter().any(|dep| dep == name))
            .collect())
    }

    fn delete_package(&self, name: &str) -> Result<(), StoreError> {
        let mut installed = self.load_installed()?;

        let package = installed
            .iter()
            .find(|pkg| pkg.name == name)
            .ok_or_else(|| StoreError::NotInstalled(name.to_string()))?;

        if package.locked {
            return Err(StoreError::Locked(name.to_string()));
        }

        let dependents: Vec<String> = installed
            .iter()
            .filter(|pkg| pkg.name != name && pkg.depends.iter().any(|dep| dep == name))
            .map(|pkg| pkg.name.clone())
            .collect();
        if !dependents.is_empty() {
            return Err(StoreError::StillRequired {
                name: name.to_string(),
                dependents,
            });
        }

        self.run_delete_hook(name)?;

        installed.retain(|pkg| pkg.name != name);
        self.save_installed(&installed)
    }
}
