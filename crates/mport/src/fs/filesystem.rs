//! File access port
//!
//! The config loader and the YAML package database only reach the disk
//! through [`FileSystem`], so both can run against [`MockFileSystem`] in
//! unit tests.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait FileSystem {
    /// Whole file as UTF-8
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, unreadable, or not UTF-8.
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Replace the file at `path` with `data`, creating parent directories
    ///
    /// # Errors
    ///
    /// Fails when a directory cannot be created or the write fails.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError>;

    fn path_exists(&self, path: &Path) -> bool;

    /// `~/db` becomes `$HOME/db`; other paths are returned unchanged
    ///
    /// # Errors
    ///
    /// [`FileSystemError::HomeDirNotFound`] when `~` cannot be resolved.
    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError>;

    /// Directory holding `config.yaml`
    ///
    /// # Errors
    ///
    /// Fails when no home directory is known and no override is set.
    fn config_dir(&self) -> Result<PathBuf, FileSystemError>;
}

#[derive(Error, Debug, Clone)]
pub enum FileSystemError {
    #[error("File access failed: {0}")]
    IoError(Arc<io::Error>),

    #[error("Cannot locate a home directory for the config lookup")]
    HomeDirNotFound,
}

impl From<io::Error> for FileSystemError {
    fn from(error: io::Error) -> Self {
        Self::IoError(Arc::new(error))
    }
}

#[cfg(test)]
impl MockFileSystem {
    pub(crate) fn mock_read_file<P, S>(&mut self, path: P, content: S)
    where
        PathBuf: From<P>,
        S: ToString,
    {
        let content = content.to_string();
        self.expect_read_file()
            .with(mockall::predicate::eq(PathBuf::from(path)))
            .returning(move |_| Ok(content.clone()));
    }

    pub(crate) fn mock_path_exists<P>(&mut self, path: P, exists: bool)
    where
        PathBuf: From<P>,
    {
        self.expect_path_exists()
            .with(mockall::predicate::eq(PathBuf::from(path)))
            .return_const(exists);
    }

    pub(crate) fn mock_config_dir_ok<P>(&mut self, path: P)
    where
        PathBuf: From<P>,
    {
        let dir = PathBuf::from(path);
        self.expect_config_dir().return_once(move || Ok(dir));
    }

    /// `config_dir` holds `config.yaml` with `config_yaml` and no `config.yml`
    pub(crate) fn mock_config_file(&mut self, config_dir: &Path, config_yaml: &str) {
        let yaml_path = config_dir.join("config.yaml");

        self.mock_config_dir_ok(config_dir);
        self.mock_path_exists(&yaml_path, true);
        self.mock_path_exists(config_dir.join("config.yml"), false);
        self.mock_read_file(&yaml_path, config_yaml);
    }

    pub(crate) fn mock_expand_path<P>(&mut self, input: P, output: P)
    where
        PathBuf: From<P>,
    {
        let expanded = PathBuf::from(output);
        self.expect_expand_path()
            .with(mockall::predicate::eq(PathBuf::from(input)))
            .return_once(move |_| Ok(expanded));
    }
}
