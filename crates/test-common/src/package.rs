//! Package record helpers for building database fixtures.

use mport::package::{
    IndexEntry, InstalledPackage,
    builder::{IndexEntryBuilder, InstalledPackageBuilder},
};

use crate::constants::OLD_OS_RELEASE;

/// An explicit package at `version`, built for [`OLD_OS_RELEASE`], that
/// depends on `depends`.
#[must_use]
pub fn installed(name: &str, version: &str, depends: &[&str]) -> InstalledPackage {
    depends
        .iter()
        .fold(
            InstalledPackageBuilder::default()
                .name(name)
                .version(version)
                .os_release(OLD_OS_RELEASE)
                .origin(&format!("misc/{name}"))
                .comment(&format!("The {name} package")),
            |builder, dep| builder.depends_on(dep),
        )
        .build()
}

/// An index entry with a generated origin and comment.
#[must_use]
pub fn index_entry(name: &str, version: &str) -> IndexEntry {
    IndexEntryBuilder::default()
        .pkgname(name)
        .version(version)
        .origin(&format!("misc/{name}"))
        .comment(&format!("The {name} package"))
        .build()
}
