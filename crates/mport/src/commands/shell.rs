use std::{
    env,
    path::PathBuf,
    process::{Command, Stdio},
    sync::Arc,
    time::Instant,
};

use tracing::debug;

use super::runner::{CommandError, CommandOutput, CommandRunner};

/// Runs command lines as `<shell> -c <line>` with stdin closed
#[derive(Clone, Debug)]
pub struct ShellCommandRunner {
    shell: String,
}

impl ShellCommandRunner {
    #[must_use]
    pub fn new(shell: &str) -> Self {
        Self {
            shell: shell.to_string(),
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn is_command_available(&self, command: &str) -> bool {
        self.execute(&format!("command -v {command} >/dev/null 2>&1"))
            .is_ok_and(|output| output.is_success())
    }

    fn execute(&self, command: &str) -> Result<CommandOutput, CommandError> {
        debug!(shell = %self.shell, command, "running");
        let started = Instant::now();

        let spawned = Command::new(&self.shell)
            .args(["-c", command])
            .stdin(Stdio::null())
            .output();

        match spawned {
            Ok(output) => Ok(CommandOutput::new(output, started.elapsed())),
            Err(source) => Err(CommandError::IoError {
                command: command.to_string(),
                working_directory: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
                source: Arc::new(source),
            }),
        }
    }
}
