mod common;

use predicates::prelude::*;
use test_common::{InstalledPackageBuilder, installed};

use crate::common::{database, mport_command};

#[test]
fn test_deleteall_removes_dependents_first() {
    let db = database(
        &[installed("a", "1.0", &[]), installed("b", "1.0", &["a"])],
        &[],
    );

    let mut cmd = mport_command(&db);
    cmd.arg("deleteall");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deleted b-1.0"))
        .stdout(predicate::str::contains("Deleted a-1.0"))
        .stdout(predicate::str::contains(
            "Packages deleted: 2\nErrors: 0\nTotal: 2\n",
        ));

    assert!(db.installed_names().is_empty());
}

#[test]
fn test_deleteall_cycle_exits_two() {
    let db = database(
        &[installed("a", "1.0", &["b"]), installed("b", "1.0", &["a"])],
        &[],
    );

    let mut cmd = mport_command(&db);
    cmd.arg("deleteall");
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Packages deleted: 0"))
        .stderr(predicate::str::contains("made no progress"));

    assert_eq!(db.installed_names(), vec!["a", "b"]);
}

#[test]
fn test_deleteall_with_a_locked_package_fails() {
    let db = database(
        &[
            installed("a", "1.0", &[]),
            InstalledPackageBuilder::default()
                .name("c")
                .version("1.0")
                .locked(true)
                .build(),
        ],
        &[],
    );

    let mut cmd = mport_command(&db);
    cmd.arg("deleteall");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Packages deleted: 1\nErrors: 1\nTotal: 2\n",
        ))
        .stderr(predicate::str::contains("Failed to delete c-1.0: Package c is locked"))
        .stderr(predicate::str::contains("WARN").not());

    assert_eq!(db.installed_names(), vec!["c"]);
}

#[test]
fn test_deleteall_with_nothing_installed() {
    let db = database(&[], &[]);

    let mut cmd = mport_command(&db);
    cmd.arg("deleteall");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("No packages installed."));
}

#[test]
fn test_deleteall_runs_delete_command() {
    let db = database(&[installed("a", "1.0", &[])], &[]);
    let log = db.database_dir().join("hook.log");
    let db = db.with_config(&format!(
        "delete_command: \"echo {{name}} >> {}\"\n",
        log.display()
    ));

    let mut cmd = mport_command(&db);
    cmd.arg("deleteall");
    cmd.assert().success();

    assert_eq!(std::fs::read_to_string(&log).unwrap(), "a\n");
}

#[test]
fn test_delete_refuses_required_package() {
    let db = database(
        &[installed("a", "1.0", &[]), installed("b", "1.0", &["a"])],
        &[],
    );

    let mut cmd = mport_command(&db);
    cmd.args(["delete", "a"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Package a is still required by: b"));

    let mut cmd = mport_command(&db);
    cmd.args(["delete", "b", "a"]);
    cmd.assert().success();

    assert!(db.installed_names().is_empty());
}
