use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// mport - a package manager front end
///
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClapCli {
    /// Override the package database directory from config
    ///
    #[clap(long, short = 'd', global = true)]
    pub(crate) database_directory: Option<PathBuf>,

    /// Override the OS release packages are checked against
    ///
    #[clap(long, global = true)]
    pub(crate) os_release: Option<String>,

    /// Show detailed output
    ///
    #[clap(long, short = 'v', global = true, default_value_t = false)]
    pub(crate) verbose: bool,

    /// Disable colored output
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Subcommand to execute
    ///
    #[clap(subcommand)]
    pub(crate) command: ClapCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ClapCommands {
    /// Install packages from the index
    ///
    Install {
        /// Package names, optionally with a version (`name-version`)
        #[clap(required = true)]
        specifiers: Vec<String>,
    },

    /// Show installed packages that have updates or are no longer available
    ///
    Update {
        /// Only check these packages
        names: Vec<String>,
    },

    /// Delete every installed package, dependents first
    ///
    Deleteall,

    /// Delete the named packages
    ///
    Delete {
        /// Names of the packages to delete
        #[clap(required = true)]
        names: Vec<String>,
    },

    /// List installed packages
    ///
    List {
        /// What to list instead of every installed package
        #[clap(value_enum)]
        mode: Option<ListMode>,

        /// Print package names only
        #[clap(long, short = 'q')]
        quiet: bool,

        /// Print package origins
        #[clap(long, short = 'o')]
        origin: bool,

        /// Only list locked packages
        #[clap(long, short = 'l')]
        locked: bool,
    },

    /// Show what the database and the index know about a package
    ///
    Info {
        /// Package name
        name: String,
    },

    /// Search the index by name or comment
    ///
    Search {
        /// Glob patterns (`*`, `?`) or substrings
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Version string utilities
    ///
    Version {
        /// Compare two versions and print `<`, `=` or `>`
        #[clap(long, short = 't', num_args = 2, value_names = ["V1", "V2"], required = true)]
        test: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListMode {
    /// Installed packages with updates available
    Updates,

    /// Explicitly installed packages only
    Prime,
}
