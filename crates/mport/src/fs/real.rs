use std::{
    env, fs,
    path::{Path, PathBuf},
};

use etcetera::{AppStrategy, AppStrategyArgs, choose_app_strategy};

use super::filesystem::{FileSystem, FileSystemError};

/// Set to a directory to use its `config.yaml` instead of the platform one
pub const CONFIG_DIR_ENV: &str = "MPORT_CONFIG_DIR";

/// [`FileSystem`] over `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(Into::into)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        fs::write(path, data).map_err(Into::into)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        let raw = path.to_string_lossy();
        Ok(PathBuf::from(shellexpand::tilde(&raw).into_owned()))
    }

    fn config_dir(&self) -> Result<PathBuf, FileSystemError> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let strategy = choose_app_strategy(AppStrategyArgs {
            top_level_domain: "org".to_string(),
            author: "midnightbsd".to_string(),
            app_name: "mport".to_string(),
        })
        .map_err(|_| FileSystemError::HomeDirNotFound)?;

        Ok(strategy.config_dir())
    }
}
