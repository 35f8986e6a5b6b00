mod common;

use predicates::prelude::*;
use test_common::{InstalledPackageBuilder, index_entry, installed};

use crate::common::{database, mport_command};

fn fixture() -> test_common::TestDatabase {
    database(
        &[
            installed("bash", "5.2", &["gettext"]),
            InstalledPackageBuilder::default()
                .name("gettext")
                .version("0.22")
                .origin("devel/gettext")
                .automatic(true)
                .locked(true)
                .build(),
        ],
        &[index_entry("bash", "5.3")],
    )
}

#[test]
fn test_list_default() {
    let db = fixture();

    let mut cmd = mport_command(&db);
    cmd.arg("list");
    cmd.assert().success().stdout("bash-5.2\ngettext-0.22\n");
}

#[test]
fn test_list_prime() {
    let db = fixture();

    let mut cmd = mport_command(&db);
    cmd.args(["list", "prime"]);
    cmd.assert().success().stdout("bash\n");
}

#[test]
fn test_list_quiet_origin() {
    let db = fixture();

    let mut cmd = mport_command(&db);
    cmd.args(["list", "-q", "-o"]);
    cmd.assert().success().stdout("misc/bash\ndevel/gettext\n");
}

#[test]
fn test_list_locked() {
    let db = fixture();

    let mut cmd = mport_command(&db);
    cmd.args(["list", "-l"]);
    cmd.assert().success().stdout("gettext-0.22\n");
}

#[test]
fn test_list_updates() {
    let db = fixture();

    let mut cmd = mport_command(&db);
    cmd.args(["list", "updates"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5.2  <  5.3"))
        .stdout(predicate::str::contains("gettext             0.22 is no longer available."));
}

#[test]
fn test_list_empty_database() {
    let db = database(&[], &[]);

    let mut cmd = mport_command(&db);
    cmd.arg("list");
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("No packages installed matching."));
}
