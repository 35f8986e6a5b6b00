//! Fixtures shared by the `mport` and `mport-cli` test suites: on-disk
//! databases in temp dirs, record builders, and recording UI doubles.

pub mod config;
pub mod constants;
pub mod fixtures;
pub mod interaction;
pub mod package;
pub mod store;

pub use config::{test_config, test_config_verbose};
pub use constants::*;
pub use fixtures::{TestDatabase, create_config_file};
pub use interaction::{RecordingReporter, ScriptedPrompter};
pub use package::{index_entry, installed};
pub use store::{TestStore, create_test_store, create_test_store_with_delete_command};

pub use mport::{
    config::AppConfigBuilder,
    package::builder::{IndexEntryBuilder, InstalledPackageBuilder},
};
pub use tempfile::TempDir;
