//! Package services
//!
//! Each submodule holds one algorithm driven through the
//! [`PackageStore`](crate::package::port::PackageStore) port:
//!
//! - [`update`] diffs installed packages against the index
//! - [`install`] resolves specifiers and installs them
//! - [`remove`] deletes packages in dependency-safe order
//! - [`list`], [`search`] and [`info`] are read-only queries

pub mod info;
pub mod install;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

#[cfg(test)]
pub(crate) mod fake;

use crate::package::port::StoreError;

/// Maps a failure to the process exit status the CLI should use.
pub trait ExitCode {
    fn exit_code(&self) -> i32;
}

impl ExitCode for StoreError {
    fn exit_code(&self) -> i32 {
        1
    }
}

/// Per-item results of a batch where one failure never stops the rest.
#[derive(Debug)]
pub struct BatchOutcome<T, E> {
    pub succeeded: Vec<(String, T)>,
    pub failures: Vec<(String, E)>,
}

impl<T, E> Default for BatchOutcome<T, E> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T, E: ExitCode> BatchOutcome<T, E> {
    pub fn record(&mut self, item: &str, result: Result<T, E>) {
        match result {
            Ok(value) => self.succeeded.push((item.to_string(), value)),
            Err(e) => self.failures.push((item.to_string(), e)),
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Zero when every item succeeded, otherwise the code of the last failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.failures.last().map_or(0, |(_, e)| e.exit_code())
    }
}
