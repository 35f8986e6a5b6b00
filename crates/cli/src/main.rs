mod cli;
mod commands;
mod config;
mod formatters;
mod os_release;
mod prompt;
mod tables;
mod terminal_progress_reporter;

use std::{
    io::{self, IsTerminal},
    process,
};

use clap::Parser;
use mport::{
    commands::ShellCommandRunner,
    config::{
        YamlLoader,
        loader::{ApplyToConfig, ConfigLoader},
    },
    fs::real::RealFileSystem,
    package::store::YamlPackageStore,
};
use terminal_progress_reporter::TerminalProgressReporter;
use tracing::{Level, debug};

use crate::{
    cli::ClapCli, commands::dispatch_command, os_release::detect_os_release,
    prompt::TerminalPrompter,
};

fn main() -> anyhow::Result<()> {
    let args = ClapCli::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
    debug!(?args, "parsed arguments");

    let fs = RealFileSystem;
    let mut config = args.apply_to_config(YamlLoader::new(&fs).load_config()?);

    let runner = ShellCommandRunner::new(config.shell());

    if config.os_release().is_none() {
        *config.os_release_mut() = Some(detect_os_release(&runner)?);
    }

    debug!(?config, "effective config");

    let store = YamlPackageStore::new(
        fs,
        runner,
        config.database_directory().to_path_buf(),
        config.os_release().unwrap_or_default(),
    )
    .with_delete_command(config.delete_command().map(String::from));

    let reporter = TerminalProgressReporter::new(config.use_colors());
    let prompter = TerminalPrompter::new(config.use_colors());

    let exit_code = dispatch_command(&args.command, &config, &store, &prompter, &reporter);

    process::exit(exit_code)
}
