use mport::{
    package::{port::PackageStore, prompt::Prompter, service::install::install_all},
    progress_reporter::ProgressReporter,
};
use tracing::info;

pub(crate) fn handle_install<S, P, R>(
    specifiers: &[String],
    store: &S,
    prompter: &P,
    reporter: &R,
) -> i32
where
    S: PackageStore,
    P: Prompter,
    R: ProgressReporter,
{
    info!("Installing packages: {}", specifiers.join(", "));

    let batch = install_all(store, prompter, reporter, specifiers);

    if batch.has_failures() {
        info!(
            failed = batch.failures.len(),
            installed = batch.succeeded.len(),
            "install finished with failures"
        );
    }

    batch.exit_code()
}
