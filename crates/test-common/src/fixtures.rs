//! Temporary package databases and config directories for integration tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mport::package::{
    IndexEntry, InstalledPackage,
    store::yaml::{INDEX_FILE, INSTALLED_FILE},
};
use tempfile::TempDir;

use crate::constants::TEST_OS_RELEASE;

/// A database directory and a config directory inside one temp dir.
///
/// # Example
/// ```rust
/// let db = TestDatabase::new()
///     .with_installed(&[installed("bash", "5.2", &[])])
///     .with_index(&[index_entry("bash", "5.3")]);
/// ```
pub struct TestDatabase {
    root: TempDir,
}

impl TestDatabase {
    /// Creates an empty database with no config file.
    ///
    /// # Panics
    ///
    /// Panics if the temp dir cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("db")).unwrap();
        fs::create_dir_all(root.path().join("config")).unwrap();
        Self { root }
    }

    #[must_use]
    pub fn database_dir(&self) -> PathBuf {
        self.root.path().join("db")
    }

    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_installed(self, packages: &[InstalledPackage]) -> Self {
        let yaml = serde_yaml::to_string(packages).unwrap();
        fs::write(self.database_dir().join(INSTALLED_FILE), yaml).unwrap();
        self
    }

    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_index(self, entries: &[IndexEntry]) -> Self {
        let yaml = serde_yaml::to_string(entries).unwrap();
        fs::write(self.database_dir().join(INDEX_FILE), yaml).unwrap();
        self
    }

    /// Writes `config.yaml` pointing at this database, with `extra` YAML lines
    /// appended.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_config(self, extra: &str) -> Self {
        create_config_file(&self.config_dir(), &self.database_dir(), extra);
        self
    }

    /// Reads back the installed records.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or malformed.
    #[must_use]
    pub fn installed(&self) -> Vec<InstalledPackage> {
        let content = fs::read_to_string(self.database_dir().join(INSTALLED_FILE)).unwrap();
        if content.trim().is_empty() {
            return Vec::new();
        }
        serde_yaml::from_str(&content).unwrap()
    }

    #[must_use]
    pub fn installed_names(&self) -> Vec<String> {
        self.installed().into_iter().map(|pkg| pkg.name).collect()
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a `config.yaml` into `config_dir`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn create_config_file(config_dir: &Path, database_dir: &Path, extra: &str) -> PathBuf {
    let content = format!(
        "database_directory: \"{}\"\nos_release: \"{TEST_OS_RELEASE}\"\nuse_colors: false\n{extra}",
        database_dir.display()
    );
    let path = config_dir.join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}
