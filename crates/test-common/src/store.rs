//! Store creation helpers to eliminate setup duplication in tests.

use mport::{
    commands::ShellCommandRunner, fs::real::RealFileSystem, package::store::YamlPackageStore,
};

use crate::{
    constants::{TEST_OS_RELEASE, TEST_SHELL},
    fixtures::TestDatabase,
};

pub type TestStore = YamlPackageStore<RealFileSystem, ShellCommandRunner>;

/// A store over `db` with the real filesystem and shell and no delete command.
#[must_use]
pub fn create_test_store(db: &TestDatabase) -> TestStore {
    YamlPackageStore::new(
        RealFileSystem,
        ShellCommandRunner::new(TEST_SHELL),
        db.database_dir(),
        TEST_OS_RELEASE,
    )
}

/// A store over `db` that runs `delete_command` before each deletion.
#[must_use]
pub fn create_test_store_with_delete_command(db: &TestDatabase, delete_command: &str) -> TestStore {
    create_test_store(db).with_delete_command(Some(delete_command.to_string()))
}
