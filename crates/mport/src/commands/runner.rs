//! Command runner port
//!
//! The store's delete hook and the CLI's OS-release probe both shell out.
//! They do it through [`CommandRunner`] so tests can script the results.

use std::{borrow::Cow, path::PathBuf, process::Output, sync::Arc, time::Duration};

use thiserror::Error;

/// Runs one shell command line and waits for it; there is no timeout.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait CommandRunner {
    /// Whether `command` resolves to something runnable, e.g. `mport.delete`
    fn is_command_available(&self, command: &str) -> bool;

    /// A non-zero exit is still `Ok`; check [`CommandOutput::is_success`].
    ///
    /// # Errors
    ///
    /// [`CommandError::IoError`] when the process cannot be spawned.
    fn execute(&self, command: &str) -> Result<CommandOutput, CommandError>;
}

/// Captured streams, status and wall time of a finished command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub(crate) output: Output,
    pub(crate) duration: Duration,
}

impl CommandOutput {
    #[must_use]
    pub fn new(output: Output, duration: Duration) -> Self {
        Self { output, duration }
    }

    /// -1 when the process was killed by a signal
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.output.status.success()
    }

    #[must_use]
    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output.stdout)
    }

    #[must_use]
    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output.stderr)
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[derive(Error, Debug, Clone)]
pub enum CommandError {
    #[error("Unable to run '{command}' in {}: {source}", working_directory.display())]
    IoError {
        command: String,
        working_directory: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("'{command}' exited with status {exit_code}: {}", stderr.trim())]
    NonZeroExit {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
        execution_duration: Duration,
    },
}

impl CommandError {
    /// [`CommandError::NonZeroExit`] carrying everything `output` captured
    #[must_use]
    pub fn non_zero_exit(command: &str, output: &CommandOutput) -> Self {
        Self::NonZeroExit {
            command: command.to_string(),
            exit_code: output.exit_code(),
            stdout: output.stdout_str().into_owned(),
            stderr: output.stderr_str().into_owned(),
            execution_duration: output.duration(),
        }
    }
}
