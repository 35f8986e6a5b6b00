use mport::{
    config::AppConfig,
    package::{
        port::PackageStore,
        service::{
            ExitCode,
            update::{UpdateStatus, diff_updates},
        },
        version::PkgVersion,
    },
    progress_reporter::ProgressReporter,
};
use tracing::debug;

/// Exit status when one of the requested names is not installed
const NOT_INSTALLED_EXIT: i32 = 1;

pub(crate) fn handle_update<S, R>(
    names: &[String],
    store: &S,
    config: &AppConfig,
    reporter: &R,
) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    let os_release = config.os_release().unwrap_or_default();
    debug!(os_release, names = names.len(), "checking for updates");

    let report = match diff_updates(store, &PkgVersion, os_release, names) {
        Ok(report) => report,
        Err(e) => {
            reporter.report_error(&e);
            return e.exit_code();
        }
    };

    for status in &report.statuses {
        reporter.report(status_line(status, config.verbose()));
    }

    for name in &report.missing {
        reporter.report_error(format!("Package {name} is not installed."));
    }

    if report.missing.is_empty() {
        0
    } else {
        NOT_INSTALLED_EXIT
    }
}

/// One report line, aligned in columns
pub(crate) fn status_line(status: &UpdateStatus, verbose: bool) -> String {
    let package = status.package();
    let name = package.name.as_str();
    let version = package.version.as_deref().unwrap_or_default();

    match status {
        UpdateStatus::NoLongerAvailable { .. } => {
            format!("{name:<15} {version:>8} is no longer available.")
        }
        UpdateStatus::Outdated { available, .. } if verbose => {
            let os_release = package.os_release.as_deref().unwrap_or_default();
            format!(
                "{name:<15} {version:>8} ({os_release})  <  {}",
                available.version
            )
        }
        UpdateStatus::Outdated { available, .. } => {
            format!("{name:<15} {version:>8}  <  {:<8}", available.version)
        }
    }
}
