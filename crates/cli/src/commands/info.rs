use mport::{
    package::{
        port::PackageStore,
        service::{
            ExitCode,
            info::{PackageInfo, package_info},
        },
    },
    progress_reporter::ProgressReporter,
};

use crate::formatters::{format_key, strip_backslashes};

pub(crate) fn handle_info<S, R>(name: &str, store: &S, use_colors: bool, reporter: &R) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    match package_info(store, name) {
        Ok(info) => {
            reporter.report(info_block(&info, use_colors));
            0
        }
        Err(e) => {
            reporter.report_error(&e);
            e.exit_code()
        }
    }
}

/// Installed fields win; an index-only package shows its first index entry.
fn info_block(info: &PackageInfo, use_colors: bool) -> String {
    let field = |label: &str, value: &str| {
        format!("{}{value}", format_key(format!("{label:<13}"), use_colors))
    };
    let first = info.available.first();

    let (title, origin, comment, depends) = match (&info.installed, first) {
        (Some(pkg), _) => (
            pkg.display_name(),
            pkg.origin.as_str(),
            pkg.comment.as_str(),
            pkg.depends.join(", "),
        ),
        (None, Some(entry)) => (
            info.name.clone(),
            entry.origin.as_str(),
            entry.comment.as_str(),
            entry.depends.join(", "),
        ),
        (None, None) => (info.name.clone(), "", "", String::new()),
    };

    let installed = match &info.installed {
        Some(pkg) if pkg.automatic => "yes, as a dependency",
        Some(_) => "yes",
        None => "no",
    };
    let locked = match &info.installed {
        Some(pkg) if pkg.locked => "yes",
        _ => "no",
    };
    let os_release = info
        .installed
        .as_ref()
        .and_then(|pkg| pkg.os_release.as_deref())
        .unwrap_or_default();
    let available = info
        .available
        .iter()
        .map(|entry| entry.version.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    [
        title,
        field("Origin:", origin),
        field("Comment:", &strip_backslashes(comment)),
        field("Installed:", installed),
        field("OS release:", os_release),
        field("Locked:", locked),
        field("Depends on:", &depends),
        field("Required by:", &info.required_by.join(", ")),
        field("Available:", &available),
    ]
    .join("\n")
}
