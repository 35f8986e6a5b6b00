use mport::{
    package::{
        port::PackageStore,
        service::{ExitCode, search::search},
    },
    progress_reporter::ProgressReporter,
};

use crate::{formatters::format_key, tables::PackageTable};

pub(crate) fn handle_search<S, R>(
    queries: &[String],
    store: &S,
    use_colors: bool,
    reporter: &R,
) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    let results = match search(store, queries) {
        Ok(results) => results,
        Err(e) => {
            reporter.report_error(&e);
            return e.exit_code();
        }
    };

    if results.is_empty() {
        reporter.report_info(format!("No packages match {}.", queries.join(", ")));
        return 0;
    }

    let mut table = PackageTable::with_header(
        ["Name", "Version", "Comment"].map(|key| format_key(key, use_colors)),
    );
    for entry in &results {
        table.add_row(vec![
            entry.pkgname.clone(),
            entry.version.clone(),
            entry.comment.clone(),
        ]);
    }

    reporter.report(table.render());
    0
}
