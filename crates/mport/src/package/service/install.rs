//! Install resolution
//!
//! A specifier is either a bare package name or `name-version`. It is first
//! looked up verbatim; when nothing matches it is split at the rightmost `-`
//! and the name part is looked up instead, keeping only entries whose version
//! is exactly the embedded one. Several remaining entries are handed to the
//! [`Prompter`].

use thiserror::Error;

use crate::{
    package::{
        IndexEntry, InstallOutcome,
        port::{PackageStore, StoreError},
        prompt::{PromptError, Prompter},
        service::{BatchOutcome, ExitCode},
    },
    progress_reporter::ProgressReporter,
};

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Package {specifier} not found in the index.")]
    NotFound { specifier: String },

    #[error(
        "Package {specifier} not found in the index: {name} is available as version {available}, not {requested}."
    )]
    VersionMismatch {
        specifier: String,
        name: String,
        requested: String,
        available: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl ExitCode for InstallError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::VersionMismatch { .. } => 4,
            Self::Store(_) | Self::Prompt(_) => 1,
        }
    }
}

/// Split `name-version` at the rightmost hyphen.
///
/// Returns `None` when there is no hyphen or it is the first character.
#[must_use]
pub fn split_name_version(specifier: &str) -> Option<(&str, &str)> {
    let position = specifier.rfind('-')?;
    (position > 0).then(|| (&specifier[..position], &specifier[position + 1..]))
}

/// Resolve `specifier` to exactly one index entry.
///
/// # Errors
///
/// Returns [`InstallError::NotFound`] or [`InstallError::VersionMismatch`]
/// when nothing in the index fits, [`InstallError::Prompt`] if the operator's
/// input ends before a choice, and [`InstallError::Store`] on lookup failures.
pub fn resolve<S, P>(store: &S, prompter: &P, specifier: &str) -> Result<IndexEntry, InstallError>
where
    S: PackageStore + ?Sized,
    P: Prompter + ?Sized,
{
    let mut entries = store.lookup_index(specifier)?;

    if entries.is_empty() {
        if let Some((name, version)) = split_name_version(specifier) {
            tracing::debug!(specifier, name, version, "retrying lookup without version");
            let candidates = store.lookup_index(name)?;

            if let Some(first) = candidates.first() {
                if first.version != version {
                    return Err(InstallError::VersionMismatch {
                        specifier: specifier.to_string(),
                        name: name.to_string(),
                        requested: version.to_string(),
                        available: first.version.clone(),
                    });
                }
                entries = candidates
                    .into_iter()
                    .filter(|entry| entry.version == version)
                    .collect();
            }
        }
    }

    let index = match entries.len() {
        0 => {
            return Err(InstallError::NotFound {
                specifier: specifier.to_string(),
            });
        }
        1 => 0,
        _ => prompter.select_one(&entries)?,
    };

    entries
        .into_iter()
        .nth(index)
        .ok_or_else(|| InstallError::NotFound {
            specifier: specifier.to_string(),
        })
}

/// Resolve `specifier` and install the chosen entry as explicit.
///
/// # Errors
///
/// See [`resolve`]; store failures during the install are returned as
/// [`InstallError::Store`].
pub fn install<S, P>(
    store: &S,
    prompter: &P,
    specifier: &str,
) -> Result<(IndexEntry, InstallOutcome), InstallError>
where
    S: PackageStore + ?Sized,
    P: Prompter + ?Sized,
{
    let entry = resolve(store, prompter, specifier)?;

    tracing::info!(package = %entry.pkgname, version = %entry.version, "installing");
    let outcome = store.install_explicit(&entry.pkgname, &entry.version)?;

    Ok((entry, outcome))
}

/// Install every specifier, continuing past failures.
pub fn install_all<S, P, R>(
    store: &S,
    prompter: &P,
    reporter: &R,
    specifiers: &[String],
) -> BatchOutcome<InstallOutcome, InstallError>
where
    S: PackageStore + ?Sized,
    P: Prompter + ?Sized,
    R: ProgressReporter,
{
    let mut batch = BatchOutcome::default();

    for specifier in specifiers {
        let result = install(store, prompter, specifier);

        match &result {
            Ok((entry, InstallOutcome::Installed { dependencies })) => {
                for dependency in dependencies {
                    reporter.report_progress(format!("Installed dependency {dependency}"));
                }
                reporter.report_success(format!("Installed {}", entry.display_name()));
            }
            Ok((entry, InstallOutcome::MarkedExplicit)) => {
                reporter.report_success(format!(
                    "{} is now marked as explicitly installed",
                    entry.display_name()
                ));
            }
            Ok((entry, InstallOutcome::AlreadyInstalled)) => {
                reporter.report_info(format!("{} is already installed", entry.display_name()));
            }
            Err(e) => {
                tracing::debug!(specifier = %specifier, error = %e, "install failed");
                reporter.report_error(e);
            }
        }

        batch.record(specifier, result.map(|(_, outcome)| outcome));
    }

    batch
}
