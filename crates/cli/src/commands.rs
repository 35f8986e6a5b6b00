pub(crate) mod delete;
pub(crate) mod info;
pub(crate) mod install;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod update;
pub(crate) mod version;

use mport::{
    config::AppConfig,
    package::{port::PackageStore, prompt::Prompter},
    progress_reporter::ProgressReporter,
};
use tracing::debug;

use crate::cli::ClapCommands;

/// Primary command dispatcher that routes to the appropriate command handler
pub fn dispatch_command<S, P, R>(
    command: &ClapCommands,
    config: &AppConfig,
    store: &S,
    prompter: &P,
    reporter: &R,
) -> i32
where
    S: PackageStore,
    P: Prompter,
    R: ProgressReporter,
{
    debug!("Dispatching command: {:?}", command);

    match command {
        ClapCommands::Install { specifiers } => {
            install::handle_install(specifiers, store, prompter, reporter)
        }
        ClapCommands::Update { names } => update::handle_update(names, store, config, reporter),
        ClapCommands::Deleteall => delete::handle_delete_all(store, reporter),
        ClapCommands::Delete { names } => delete::handle_delete(names, store, reporter),
        ClapCommands::List {
            mode,
            quiet,
            origin,
            locked,
        } => {
            let options = list::ListOptions {
                mode: *mode,
                quiet: *quiet,
                origin: *origin,
                locked: *locked,
                verbose: config.verbose(),
            };
            list::handle_list(options, store, config, reporter)
        }
        ClapCommands::Info { name } => {
            info::handle_info(name, store, config.use_colors(), reporter)
        }
        ClapCommands::Search { queries } => {
            search::handle_search(queries, store, config.use_colors(), reporter)
        }
        ClapCommands::Version { test } => version::handle_version_test(test, reporter),
    }
}
