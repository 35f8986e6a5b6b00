//! Running external commands

pub mod runner;
pub mod shell;


pub use runner::{CommandError, CommandOutput, CommandRunner};
pub use shell::ShellCommandRunner;
