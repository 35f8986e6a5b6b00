//! Runtime settings
//!
//! [`AppConfig`] is deserialized from `config.yaml` by [`YamlLoader`] and then
//! adjusted by command-line flags through [`loader::ApplyToConfig`].

pub mod loader;

pub use loader::Yaml as YamlLoader;

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Holds `installed.yaml` and `index.yaml`
    pub(crate) database_directory: PathBuf,

    /// Release of the running system; probed at startup when unset
    #[serde(default)]
    pub(crate) os_release: Option<String>,

    /// Run before each record is dropped, `{name}` substituted
    #[serde(default)]
    pub(crate) delete_command: Option<String>,

    #[serde(default)]
    pub(crate) verbose: bool,

    #[serde(default = "colors_on")]
    pub(crate) use_colors: bool,

    #[serde(default = "sh")]
    pub(crate) shell: String,
}

fn colors_on() -> bool {
    true
}

fn sh() -> String {
    DEFAULT_SHELL.to_string()
}

impl AppConfig {
    #[must_use]
    pub fn database_directory(&self) -> &Path {
        &self.database_directory
    }

    #[must_use]
    pub fn os_release(&self) -> Option<&str> {
        self.os_release.as_deref()
    }

    #[must_use]
    pub fn delete_command(&self) -> Option<&str> {
        self.delete_command.as_deref()
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Interpreter for `delete_command` and the release probe
    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn database_directory_mut(&mut self) -> &mut PathBuf {
        &mut self.database_directory
    }

    pub fn os_release_mut(&mut self) -> &mut Option<String> {
        &mut self.os_release
    }

    pub fn verbose_mut(&mut self) -> &mut bool {
        &mut self.verbose
    }

    pub fn use_colors_mut(&mut self) -> &mut bool {
        &mut self.use_colors
    }
}

/// Builds an [`AppConfig`] without a file; unset fields take the YAML defaults.
#[derive(Debug)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            config: AppConfig {
                database_directory: PathBuf::new(),
                os_release: None,
                delete_command: None,
                verbose: false,
                use_colors: colors_on(),
                shell: sh(),
            },
        }
    }
}

impl AppConfigBuilder {
    #[must_use]
    pub fn database_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.database_directory = dir.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn os_release(mut self, release: &str) -> Self {
        self.config.os_release = Some(release.to_string());
        self
    }

    #[must_use]
    pub fn delete_command(mut self, command: &str) -> Self {
        self.config.delete_command = Some(command.to_string());
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    #[must_use]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn shell(mut self, shell: &str) -> Self {
        self.config.shell = shell.to_string();
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder_defaults_match_yaml_defaults() {
        let built = AppConfigBuilder::default()
            .database_directory("/var/db/mport")
            .build();
        let parsed: AppConfig = serde_yaml::from_str("database_directory: /var/db/mport").unwrap();

        assert_eq!(built, parsed);
        assert_eq!(parsed.shell(), "/bin/sh");
        assert!(parsed.use_colors());
        assert!(!parsed.verbose());
        assert_eq!(parsed.os_release(), None);
        assert_eq!(parsed.delete_command(), None);
    }

    #[test]
    fn test_every_field_from_yaml() {
        let yaml = r#"
            database_directory: /var/db/mport
            os_release: "3.1"
            delete_command: "/usr/libexec/mport.delete -n {name}"
            verbose: true
            use_colors: false
            shell: /bin/csh
        "#;

        let parsed: AppConfig = serde_yaml::from_str(yaml).unwrap();
        let built = AppConfigBuilder::default()
            .database_directory("/var/db/mport")
            .os_release("3.1")
            .delete_command("/usr/libexec/mport.delete -n {name}")
            .verbose(true)
            .use_colors(false)
            .shell("/bin/csh")
            .build();

        assert_eq!(parsed, built);
    }

    #[test]
    fn test_database_directory_is_required() {
        let result = serde_yaml::from_str::<AppConfig>("os_release: \"3.1\"");

        assert!(result.is_err());
    }

    #[test]
    fn test_flag_overrides_through_accessors() {
        let mut config = AppConfigBuilder::default().database_directory("/a").build();

        *config.database_directory_mut() = PathBuf::from("/b");
        *config.os_release_mut() = Some("3.2".to_string());
        *config.verbose_mut() = true;
        *config.use_colors_mut() = false;

        assert_eq!(config.database_directory(), Path::new("/b"));
        assert_eq!(config.os_release(), Some("3.2"));
        assert!(config.verbose());
        assert!(!config.use_colors());
    }
}
