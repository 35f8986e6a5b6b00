//! Installed-versus-index diff
//!
//! For every installed package the engine looks up the index entries that
//! share its name. A package with no entries is no longer available; a
//! package is outdated against an entry when the entry carries a newer
//! version, or when the package was built for an older OS release than the
//! running system. Both checks are independent and the store is never
//! modified.

use std::cmp::Ordering;

use crate::package::{
    IndexEntry, InstalledPackage,
    port::{PackageStore, StoreError},
    version::VersionComparator,
};

/// Why a package is considered outdated against one index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutdatedReason {
    pub newer_version: bool,
    pub older_os_release: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    NoLongerAvailable {
        package: InstalledPackage,
    },
    Outdated {
        package: InstalledPackage,
        available: IndexEntry,
        reason: OutdatedReason,
    },
}

impl UpdateStatus {
    #[must_use]
    pub fn package(&self) -> &InstalledPackage {
        match self {
            Self::NoLongerAvailable { package } | Self::Outdated { package, .. } => package,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// One status per unavailable package and per (package, entry) pair
    /// that needs an update, in installed order
    pub statuses: Vec<UpdateStatus>,

    /// Requested names that are not installed
    pub missing: Vec<String>,
}

/// Diff the installed packages against the index.
///
/// An empty `only` checks every installed package; otherwise only the named
/// ones are checked and names that are not installed end up in
/// [`UpdateReport::missing`].
///
/// # Errors
///
/// Returns [`StoreError`] if the installed list or an index lookup fails.
pub fn diff_updates<S, C>(
    store: &S,
    comparator: &C,
    system_os_release: &str,
    only: &[String],
) -> Result<UpdateReport, StoreError>
where
    S: PackageStore + ?Sized,
    C: VersionComparator + ?Sized,
{
    let installed = store.list_installed()?;
    let mut report = UpdateReport::default();

    let selected: Vec<&InstalledPackage> = if only.is_empty() {
        installed.iter().collect()
    } else {
        for name in only {
            if !installed.iter().any(|pkg| &pkg.name == name) {
                report.missing.push(name.clone());
            }
        }
        installed
            .iter()
            .filter(|pkg| only.contains(&pkg.name))
            .collect()
    };

    for package in selected {
        let entries = store.lookup_index(&package.name)?;

        if entries.is_empty() {
            tracing::debug!(package = %package.name, "no longer in the index");
            report.statuses.push(UpdateStatus::NoLongerAvailable {
                package: package.clone(),
            });
            continue;
        }

        for entry in entries {
            if let Some(reason) = is_outdated(package, &entry, comparator, system_os_release) {
                tracing::debug!(
                    package = %package.name,
                    available = %entry.version,
                    ?reason,
                    "update available"
                );
                report.statuses.push(UpdateStatus::Outdated {
                    package: package.clone(),
                    available: entry,
                    reason,
                });
            }
        }
    }

    Ok(report)
}

/// Compare one installed package with one index entry.
///
/// Checks whose inputs are missing are skipped instead of handing empty
/// strings to the comparator.
pub fn is_outdated<C>(
    package: &InstalledPackage,
    entry: &IndexEntry,
    comparator: &C,
    system_os_release: &str,
) -> Option<OutdatedReason>
where
    C: VersionComparator + ?Sized,
{
    let newer_version = match package.version.as_deref() {
        Some(installed) if !installed.is_empty() && !entry.version.is_empty() => {
            comparator.compare(installed, &entry.version) == Ordering::Less
        }
        _ => false,
    };

    let older_os_release = match package.os_release.as_deref() {
        Some(built_for) if !built_for.is_empty() && !system_os_release.is_empty() => {
            comparator.compare(built_for, system_os_release) == Ordering::Less
        }
        _ => false,
    };

    (newer_version || older_os_release).then_some(OutdatedReason {
        newer_version,
        older_os_release,
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::package::{
        builder::{IndexEntryBuilder, InstalledPackageBuilder},
        port::MockPackageStore,
        service::fake::MemoryStore,
        version::{MockVersionComparator, PkgVersion},
    };

    fn installed(name: &str, version: &str, os_release: &str) -> InstalledPackage {
        InstalledPackageBuilder::default()
            .name(name)
            .version(version)
            .os_release(os_release)
            .build()
    }

    fn entry(name: &str, version: &str) -> IndexEntry {
        IndexEntryBuilder::default()
            .pkgname(name)
            .version(version)
            .build()
    }

    #[test]
    fn test_empty_index_reports_every_package_once() {
        let store = MemoryStore::with_installed(vec![
            installed("a", "1.0", "3.1"),
            InstalledPackageBuilder::default()
                .name("b")
                .version("1.0")
                .depends_on("a")
                .build(),
        ]);

        let report = diff_updates(&store, &PkgVersion, "3.1", &[]).unwrap();

        assert_eq!(report.statuses.len(), 2);
        assert!(
            report
                .statuses
                .iter()
                .all(|s| matches!(s, UpdateStatus::NoLongerAvailable { .. }))
        );
        assert_eq!(report.statuses[0].package().name, "a");
        assert_eq!(report.statuses[1].package().name, "b");
    }

    #[test]
    fn test_newer_version_is_outdated() {
        let mut store = MemoryStore::with_installed(vec![installed("foo", "1.0", "3.1")]);
        store.index = vec![entry("foo", "1.2")];

        let report = diff_updates(&store, &PkgVersion, "3.1", &[]).unwrap();

        assert_eq!(
            report.statuses,
            vec![UpdateStatus::Outdated {
                package: installed("foo", "1.0", "3.1"),
                available: entry("foo", "1.2"),
                reason: OutdatedReason {
                    newer_version: true,
                    older_os_release: false,
                },
            }]
        );
    }

    #[test]
    fn test_older_os_release_is_outdated_regardless_of_version() {
        let mut store = MemoryStore::with_installed(vec![installed("foo", "1.2", "3.1")]);
        store.index = vec![entry("foo", "1.2")];

        let report = diff_updates(&store, &PkgVersion, "3.2", &[]).unwrap();

        assert!(matches!(
            report.statuses.as_slice(),
            [UpdateStatus::Outdated {
                reason: OutdatedReason {
                    newer_version: false,
                    older_os_release: true
                },
                ..
            }]
        ));
    }

    #[test]
    fn test_up_to_date_package_is_not_reported() {
        let mut store = MemoryStore::with_installed(vec![installed("foo", "1.2", "3.2")]);
        store.index = vec![entry("foo", "1.2"), entry("foo", "1.1")];

        let report = diff_updates(&store, &PkgVersion, "3.2", &[]).unwrap();

        assert!(report.statuses.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_one_status_per_triggering_entry() {
        let mut store = MemoryStore::with_installed(vec![installed("python", "3.8", "14.0")]);
        store.index = vec![entry("python", "3.9"), entry("python", "3.11")];

        let report = diff_updates(&store, &PkgVersion, "14.0", &[]).unwrap();

        let versions: Vec<&str> = report
            .statuses
            .iter()
            .map(|s| match s {
                UpdateStatus::Outdated { available, .. } => available.version.as_str(),
                UpdateStatus::NoLongerAvailable { .. } => "",
            })
            .collect();
        assert_eq!(versions, vec!["3.9", "3.11"]);
    }

    #[test]
    fn test_missing_data_never_reaches_comparator() {
        let package = InstalledPackageBuilder::default().name("foo").build();
        let available = entry("foo", "");

        let mut comparator = MockVersionComparator::new();
        comparator.expect_compare().never();

        assert_eq!(is_outdated(&package, &available, &comparator, "14.0"), None);
    }

    #[test]
    fn test_comparator_called_installed_first() {
        let package = installed("foo", "1.0", "13.2");
        let available = entry("foo", "1.1");

        let mut comparator = MockVersionComparator::new();
        comparator
            .expect_compare()
            .with(eq("1.0"), eq("1.1"))
            .times(1)
            .return_const(Ordering::Less);
        comparator
            .expect_compare()
            .with(eq("13.2"), eq("14.0"))
            .times(1)
            .return_const(Ordering::Equal);

        assert_eq!(
            is_outdated(&package, &available, &comparator, "14.0"),
            Some(OutdatedReason {
                newer_version: true,
                older_os_release: false,
            })
        );
    }

    #[test]
    fn test_restricted_to_names() {
        let mut store = MemoryStore::with_installed(vec![
            installed("foo", "1.0", "14.0"),
            installed("bar", "1.0", "14.0"),
        ]);
        store.index = vec![entry("foo", "2.0"), entry("bar", "2.0")];

        let only = vec!["bar".to_string(), "baz".to_string()];
        let report = diff_updates(&store, &PkgVersion, "14.0", &only).unwrap();

        assert_eq!(report.statuses.len(), 1);
        assert_eq!(report.statuses[0].package().name, "bar");
        assert_eq!(report.missing, vec!["baz".to_string()]);
    }

    #[test]
    fn test_lookup_failure_is_propagated() {
        let mut store = MockPackageStore::new();
        store
            .expect_list_installed()
            .returning(|| Ok(vec![installed("foo", "1.0", "14.0")]));
        store.expect_lookup_index().with(eq("foo")).returning(|_| {
            Err(StoreError::Read {
                path: "/db/index.yaml".into(),
                source_message: "permission denied".to_string(),
            })
        });

        let result = diff_updates(&store, &PkgVersion, "14.0", &[]);

        assert!(matches!(result, Err(StoreError::Read { .. })));
    }
}
