pub mod yaml;

pub use self::yaml::Yaml;

use std::path::PathBuf;

use thiserror::Error;

use crate::{config::AppConfig, fs::FileSystemError};

#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait ConfigLoader {
    /// # Errors
    ///
    /// Fails unless exactly one config file exists and it parses.
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError>;
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error(transparent)]
    FileSystemError(#[from] FileSystemError),

    #[error("No config.yaml or config.yml in {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("Both {} and {} exist; keep one", .0.display(), .1.display())]
    Ambiguous(PathBuf, PathBuf),

    #[error(transparent)]
    ConfigError(#[from] ::config::ConfigError),
}

/// Layers command-line flags over what the config file said.
pub trait ApplyToConfig {
    fn apply_to_config(&self, config: AppConfig) -> AppConfig;
}
