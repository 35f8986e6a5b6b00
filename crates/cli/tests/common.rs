use assert_cmd::Command;
use test_common::{CONFIG_DIR_ENV, TestDatabase};

/// Binary pointed at the config written by [`TestDatabase::with_config`]
#[must_use]
pub fn mport_command(db: &TestDatabase) -> Command {
    let mut cmd = Command::cargo_bin("mport").unwrap();
    cmd.env(CONFIG_DIR_ENV, db.config_dir());
    cmd
}

/// Database with a config file and the given records.
#[must_use]
pub fn database(
    installed: &[mport::package::InstalledPackage],
    index: &[mport::package::IndexEntry],
) -> TestDatabase {
    TestDatabase::new()
        .with_config("")
        .with_installed(installed)
        .with_index(index)
}
