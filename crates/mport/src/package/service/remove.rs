//! Dependency-ordered removal
//!
//! `delete_all` peels leaves: each pass walks the installed snapshot and
//! deletes every package that no installed package depends on any more,
//! asking the store before each deletion so earlier deletions in the same
//! pass are taken into account. Passes repeat until nothing is skipped. A
//! pass that skips packages without deleting any stops the run with
//! [`RemoveError::UnremovableSet`].

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    package::{
        port::{PackageStore, StoreError},
        service::{BatchOutcome, ExitCode},
    },
    progress_reporter::ProgressReporter,
};

/// Totals for a bulk removal; `deleted + errored == total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemovalSummary {
    pub deleted: usize,
    pub errored: usize,
    pub total: usize,
    pub passes: usize,
}

#[derive(Error, Debug)]
pub enum RemoveError {
    #[error("No packages installed.")]
    NothingInstalled,

    #[error(
        "Pass {pass} made no progress; packages still depended upon: {}",
        remaining.join(", ")
    )]
    UnremovableSet {
        pass: usize,
        remaining: Vec<String>,
        summary: RemovalSummary,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Exit status for a run that finished but had per-package failures
const DELETE_FAILED_EXIT: i32 = 1;

impl ExitCode for RemovalSummary {
    /// Non-zero when any attempted deletion failed
    fn exit_code(&self) -> i32 {
        if self.errored > 0 {
            DELETE_FAILED_EXIT
        } else {
            0
        }
    }
}

impl ExitCode for RemoveError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::NothingInstalled | Self::Store(_) => 1,
            Self::UnremovableSet { .. } => 2,
        }
    }
}

/// Delete every installed package in dependency-safe order.
///
/// A package whose deletion fails is reported, counted in
/// [`RemovalSummary::errored`] and not attempted again.
///
/// # Errors
///
/// Returns [`RemoveError::NothingInstalled`] for an empty database,
/// [`RemoveError::UnremovableSet`] when a pass makes no progress, and
/// [`RemoveError::Store`] if the installed list cannot be read.
pub fn delete_all<S, R>(store: &S, reporter: &R) -> Result<RemovalSummary, RemoveError>
where
    S: PackageStore + ?Sized,
    R: ProgressReporter,
{
    let mut snapshot = store.list_installed()?;
    if snapshot.is_empty() {
        return Err(RemoveError::NothingInstalled);
    }

    let mut summary = RemovalSummary::default();
    let mut failed: BTreeSet<String> = BTreeSet::new();

    loop {
        summary.passes += 1;
        let pass = summary.passes;
        let mut deleted_this_pass = 0;
        let mut skipped = Vec::new();

        tracing::debug!(pass, packages = snapshot.len(), "starting removal pass");

        for package in &snapshot {
            if failed.contains(&package.name) {
                continue;
            }

            let dependents = match store.dependents(&package.name) {
                Ok(dependents) => dependents,
                Err(e) => {
                    tracing::debug!(package = %package.name, error = %e, "dependency check failed");
                    reporter.report_warning(format!(
                        "Unable to check dependents of {}: {e}",
                        package.display_name()
                    ));
                    skipped.push(package.name.clone());
                    continue;
                }
            };

            if !dependents.is_empty() {
                tracing::debug!(
                    package = %package.name,
                    dependents = dependents.len(),
                    "still required, skipping"
                );
                skipped.push(package.name.clone());
                continue;
            }

            summary.total += 1;
            match store.delete_package(&package.name) {
                Ok(()) => {
                    tracing::info!(package = %package.name, pass, "deleted");
                    summary.deleted += 1;
                    deleted_this_pass += 1;
                    reporter.report_progress(format!("Deleted {}", package.display_name()));
                }
                Err(e) => {
                    tracing::debug!(package = %package.name, error = %e, "delete failed");
                    summary.errored += 1;
                    failed.insert(package.name.clone());
                    reporter.report_error(format!(
                        "Failed to delete {}: {e}",
                        package.display_name()
                    ));
                }
            }
        }

        if skipped.is_empty() {
            return Ok(summary);
        }

        if deleted_this_pass == 0 {
            return Err(RemoveError::UnremovableSet {
                pass,
                remaining: skipped,
                summary,
            });
        }

        snapshot = store.list_installed()?;
    }
}

/// Delete the named packages one by one, continuing past failures.
pub fn delete_each<S, R>(store: &S, reporter: &R, names: &[String]) -> BatchOutcome<(), StoreError>
where
    S: PackageStore + ?Sized,
    R: ProgressReporter,
{
    let mut batch = BatchOutcome::default();

    for name in names {
        let result = store.delete_package(name);

        match &result {
            Ok(()) => {
                tracing::info!(package = %name, "deleted");
                reporter.report_success(format!("Deleted {name}"));
            }
            Err(e) => {
                tracing::debug!(package = %name, error = %e, "delete failed");
                reporter.report_error(e);
            }
        }

        batch.record(name, result);
    }

    batch
}
