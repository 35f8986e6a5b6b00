use mport::{
    config::AppConfig,
    package::{
        InstalledPackage,
        port::PackageStore,
        service::{
            ExitCode,
            list::{ListFilter, list_installed},
        },
    },
    progress_reporter::ProgressReporter,
};
use tracing::debug;

use crate::{cli::ListMode, commands::update::handle_update, formatters::strip_backslashes};

/// Exit status when nothing installed passes the filter
const NO_MATCH_EXIT: i32 = 3;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListOptions {
    pub(crate) mode: Option<ListMode>,
    pub(crate) quiet: bool,
    pub(crate) origin: bool,
    pub(crate) locked: bool,
    pub(crate) verbose: bool,
}

impl ListOptions {
    fn filter(self) -> ListFilter {
        match (self.mode, self.locked) {
            (Some(ListMode::Prime), _) => ListFilter::Explicit,
            (_, true) => ListFilter::Locked,
            _ => ListFilter::All,
        }
    }

    /// First matching style wins: verbose, prime, quiet, origin, default.
    fn line_for(self, package: &InstalledPackage) -> String {
        if self.verbose {
            let name_version: String = package.display_name().chars().take(29).collect();
            format!(
                "{name_version:<30}\t{:>6}\t{}",
                package.os_release.as_deref().unwrap_or_default(),
                strip_backslashes(&package.comment)
            )
        } else if self.mode == Some(ListMode::Prime) {
            package.name.clone()
        } else if self.quiet && self.origin {
            package.origin.clone()
        } else if self.quiet {
            package.name.clone()
        } else if self.origin {
            format!(
                "Information for {}:\n\nOrigin:\n{}\n",
                package.display_name(),
                package.origin
            )
        } else {
            package.display_name()
        }
    }
}

pub(crate) fn handle_list<S, R>(
    options: ListOptions,
    store: &S,
    config: &AppConfig,
    reporter: &R,
) -> i32
where
    S: PackageStore,
    R: ProgressReporter,
{
    if options.mode == Some(ListMode::Updates) {
        return handle_update(&[], store, config, reporter);
    }

    let filter = options.filter();
    debug!(?options, ?filter, "listing installed packages");

    let packages = match list_installed(store, filter) {
        Ok(packages) => packages,
        Err(e) => {
            reporter.report_error(&e);
            return e.exit_code();
        }
    };

    if packages.is_empty() {
        if !options.quiet {
            reporter.report_warning("No packages installed matching.");
        }
        return NO_MATCH_EXIT;
    }

    for package in &packages {
        reporter.report(options.line_for(package));
    }

    0
}

#[cfg(test)]
mod tests {
    use mport::progress_reporter::MessageType;
    use pretty_assertions::assert_eq;
    use test_common::{
        InstalledPackageBuilder, RecordingReporter, TestDatabase, create_test_store, installed,
        test_config,
    };

    use super::*;

    fn database() -> TestDatabase {
        TestDatabase::new().with_installed(&[
            installed("bash", "5.2", &["gettext"]),
            InstalledPackageBuilder::default()
                .name("gettext")
                .version("0.22")
                .os_release("3.1")
                .origin("devel/gettext")
                .comment(r"GNU \gettext")
                .automatic(true)
                .build(),
            InstalledPackageBuilder::default()
                .name("perl5")
                .version("5.36")
                .origin("lang/perl5")
                .locked(true)
                .build(),
        ])
    }

    fn output_of(options: ListOptions) -> (i32, Vec<String>) {
        let db = database();
        let store = create_test_store(&db);
        let reporter = RecordingReporter::default();

        let code = handle_list(options, &store, &test_config(), &reporter);
        (code, reporter.output())
    }

    #[test]
    fn test_default_listing() {
        let (code, lines) = output_of(ListOptions::default());

        assert_eq!(code, 0);
        assert_eq!(lines, vec!["bash-5.2", "gettext-0.22", "perl5-5.36"]);
    }

    #[test]
    fn test_verbose_listing() {
        let (_, lines) = output_of(ListOptions {
            verbose: true,
            ..ListOptions::default()
        });

        assert_eq!(
            lines[1],
            format!("{:<30}\t{:>6}\t{}", "gettext-0.22", "3.1", "GNU gettext")
        );
        assert_eq!(lines[2], format!("{:<30}\t{:>6}\t", "perl5-5.36", ""));
    }

    #[test]
    fn test_prime_lists_explicit_names() {
        let (_, lines) = output_of(ListOptions {
            mode: Some(ListMode::Prime),
            ..ListOptions::default()
        });

        assert_eq!(lines, vec!["bash", "perl5"]);
    }

    #[test]
    fn test_quiet_and_origin() {
        let (_, names) = output_of(ListOptions {
            quiet: true,
            ..ListOptions::default()
        });
        let (_, origins) = output_of(ListOptions {
            quiet: true,
            origin: true,
            ..ListOptions::default()
        });

        assert_eq!(names, vec!["bash", "gettext", "perl5"]);
        assert_eq!(origins, vec!["misc/bash", "devel/gettext", "lang/perl5"]);
    }

    #[test]
    fn test_origin_blocks() {
        let (_, lines) = output_of(ListOptions {
            origin: true,
            ..ListOptions::default()
        });

        assert_eq!(lines[0], "Information for bash-5.2:\n\nOrigin:\nmisc/bash\n");
    }

    #[test]
    fn test_locked_only() {
        let (_, lines) = output_of(ListOptions {
            locked: true,
            ..ListOptions::default()
        });

        assert_eq!(lines, vec!["perl5-5.36"]);
    }

    #[test]
    fn test_nothing_installed_exits_three() {
        let db = TestDatabase::new().with_installed(&[]);
        let store = create_test_store(&db);
        let reporter = RecordingReporter::default();

        let code = handle_list(ListOptions::default(), &store, &test_config(), &reporter);

        assert_eq!(code, 3);
        assert_eq!(
            reporter.messages_of(MessageType::Warning),
            vec!["No packages installed matching."]
        );
    }

    #[test]
    fn test_updates_mode_is_the_update_report() {
        let (code, lines) = output_of(ListOptions {
            mode: Some(ListMode::Updates),
            ..ListOptions::default()
        });

        assert_eq!(code, 0);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.ends_with("is no longer available.")));
    }
}
