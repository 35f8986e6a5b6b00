//! End-to-end runs of the three algorithms against a YAML database
//!
//! Each test builds a temporary database, drives the services through the
//! real store and checks both the returned values and what is left on disk.

use mport::package::{
    service::{
        remove::{self, RemovalSummary, RemoveError},
        update::{self, UpdateStatus},
    },
    version::PkgVersion,
};
use test_common::{RecordingReporter, TEST_OS_RELEASE, TestDatabase, create_test_store, installed};

#[test]
fn test_unavailable_packages_then_ordered_removal() {
    let db = TestDatabase::new()
        .with_installed(&[installed("a", "1.0", &[]), installed("b", "1.0", &["a"])])
        .with_index(&[]);
    let store = create_test_store(&db);

    let report = update::diff_updates(&store, &PkgVersion, TEST_OS_RELEASE, &[]).unwrap();

    let unavailable: Vec<&str> = report
        .statuses
        .iter()
        .filter_map(|status| match status {
            UpdateStatus::NoLongerAvailable { package } => Some(package.name.as_str()),
            UpdateStatus::Outdated { .. } => None,
        })
        .collect();
    assert_eq!(unavailable, vec!["a", "b"]);
    assert_eq!(report.statuses.len(), 2);

    let reporter = RecordingReporter::default();
    let summary = remove::delete_all(&store, &reporter).unwrap();

    assert_eq!(
        summary,
        RemovalSummary {
            deleted: 2,
            errored: 0,
            total: 2,
            passes: 2,
        }
    );
    assert!(db.installed_names().is_empty());
}

#[test]
fn test_mutual_dependency_is_reported_unremovable() {
    let db = TestDatabase::new()
        .with_installed(&[installed("a", "1.0", &["b"]), installed("b", "1.0", &["a"])]);
    let store = create_test_store(&db);
    let reporter = RecordingReporter::default();

    let err = remove::delete_all(&store, &reporter).unwrap_err();

    match err {
        RemoveError::UnremovableSet {
            pass,
            remaining,
            summary,
        } => {
            assert_eq!(pass, 1);
            assert_eq!(remaining, vec!["a".to_string(), "b".to_string()]);
            assert_eq!(summary.total, 0);
        }
        other => panic!("Expected UnremovableSet, got {other:?}"),
    }
    assert_eq!(db.installed_names(), vec!["a", "b"]);
}

#[test]
fn test_deep_chain_removed_in_reverse_dependency_order() {
    // base <- lib <- app, listed in dependency order so each pass peels one
    let db = TestDatabase::new().with_installed(&[
        installed("base", "1.0", &[]),
        installed("lib", "1.0", &["base"]),
        installed("app", "1.0", &["lib"]),
    ]);
    let store = create_test_store(&db);
    let reporter = RecordingReporter::default();

    let summary = remove::delete_all(&store, &reporter).unwrap();

    assert_eq!(summary.passes, 3);
    assert_eq!(summary.deleted, 3);
    assert_eq!(
        reporter.messages_of(mport::progress_reporter::MessageType::Progress),
        vec![
            "Deleted app-1.0".to_string(),
            "Deleted lib-1.0".to_string(),
            "Deleted base-1.0".to_string(),
        ]
    );
}
