use mport::config::{AppConfig, AppConfigBuilder};

use crate::constants::{TEST_DATABASE_DIR, TEST_OS_RELEASE};

fn base() -> AppConfigBuilder {
    AppConfigBuilder::default()
        .database_directory(TEST_DATABASE_DIR)
        .os_release(TEST_OS_RELEASE)
        .use_colors(false)
}

/// Plain, uncolored config on the fixture release.
#[must_use]
pub fn test_config() -> AppConfig {
    base().build()
}

/// [`test_config`] with `-v` applied.
#[must_use]
pub fn test_config_verbose() -> AppConfig {
    base().verbose(true).build()
}
