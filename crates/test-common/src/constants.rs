//! Values the fixtures and assertions agree on.

/// OS release the test system reports
pub const TEST_OS_RELEASE: &str = "3.2";

/// OS release older packages in fixtures were built for
pub const OLD_OS_RELEASE: &str = "3.1";

/// Shell used to run delete commands in tests
pub const TEST_SHELL: &str = "/bin/sh";

/// Default test database directory path
pub const TEST_DATABASE_DIR: &str = "/tmp/test-mport-db";

pub use mport::fs::real::CONFIG_DIR_ENV;
