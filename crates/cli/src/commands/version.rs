use std::cmp::Ordering;

use mport::{
    package::version::{PkgVersion, VersionComparator},
    progress_reporter::ProgressReporter,
};

const USAGE_EXIT: i32 = 1;

pub(crate) fn handle_version_test<R: ProgressReporter>(versions: &[String], reporter: &R) -> i32 {
    let [left, right] = versions else {
        reporter.report_error("Usage: mport version -t <v1> <v2>");
        return USAGE_EXIT;
    };

    reporter.report(comparison_symbol(&PkgVersion, left, right));
    0
}

fn comparison_symbol<C: VersionComparator>(comparator: &C, left: &str, right: &str) -> char {
    match comparator.compare(left, right) {
        Ordering::Less => '<',
        Ordering::Equal => '=',
        Ordering::Greater => '>',
    }
}
