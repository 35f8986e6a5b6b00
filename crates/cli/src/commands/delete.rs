use mport::{
    package::{
        port::PackageStore,
        service::{
            ExitCode,
            remove::{RemovalSummary, RemoveError, delete_all, delete_each},
        },
    },
    progress_reporter::ProgressReporter,
};
use tracing::{debug, info};

pub(crate) fn handle_delete_all<S, R>(store: &S, reporter: &R) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    match delete_all(store, reporter) {
        Ok(summary) => {
            info!(?summary, "deleteall finished");
            reporter.report(summary_block(&summary));
            summary.exit_code()
        }
        Err(e) => {
            if let RemoveError::UnremovableSet { summary, .. } = &e {
                debug!(?summary, "deleteall stopped without progress");
                reporter.report(summary_block(summary));
            }
            reporter.report_error(&e);
            e.exit_code()
        }
    }
}

pub(crate) fn handle_delete<S, R>(names: &[String], store: &S, reporter: &R) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    delete_each(store, reporter, names).exit_code()
}

fn summary_block(summary: &RemovalSummary) -> String {
    format!(
        "Packages deleted: {}\nErrors: {}\nTotal: {}",
        summary.deleted, summary.errored, summary.total
    )
}
