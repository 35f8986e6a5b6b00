use std::path::PathBuf;

use config::{Config, File, FileFormat};
use tracing::debug;

use crate::{config::AppConfig, fs::FileSystem};

use super::{ConfigLoadError, ConfigLoader};

/// Reads `config.yaml` (or `config.yml`) from [`FileSystem::config_dir`]
pub struct Yaml<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> Yaml<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    fn locate(&self) -> Result<PathBuf, ConfigLoadError> {
        let dir = self.fs.config_dir()?;
        let yaml = dir.join("config.yaml");
        let yml = dir.join("config.yml");

        match (self.fs.path_exists(&yaml), self.fs.path_exists(&yml)) {
            (true, false) => Ok(yaml),
            (false, true) => Ok(yml),
            (true, true) => Err(ConfigLoadError::Ambiguous(yaml, yml)),
            (false, false) => Err(ConfigLoadError::NotFound { dir }),
        }
    }
}

impl<F: FileSystem> ConfigLoader for Yaml<'_, F> {
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError> {
        let path = self.locate()?;
        debug!(path = %path.display(), "reading config");

        let text = self.fs.read_file(&path)?;
        let mut config: AppConfig = Config::builder()
            .add_source(File::from_str(&text, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        config.database_directory = self.fs.expand_path(&config.database_directory)?;

        Ok(config)
    }
}
