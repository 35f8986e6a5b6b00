use mport::config::{AppConfig, loader::ApplyToConfig};

use crate::cli::ClapCli;

impl ApplyToConfig for ClapCli {
    fn apply_to_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(dir) = self.database_directory.as_ref() {
            *config.database_directory_mut() = dir.clone();
        }

        if let Some(release) = self.os_release.as_ref() {
            *config.os_release_mut() = Some(release.clone());
        }

        // Flags can only switch these one way
        if self.verbose {
            *config.verbose_mut() = true;
        }
        if self.no_color {
            *config.use_colors_mut() = false;
        }

        config
    }
}
