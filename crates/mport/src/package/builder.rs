use super::{IndexEntry, InstalledPackage};

#[derive(Default)]
pub struct InstalledPackageBuilder {
    name: String,
    version: Option<String>,
    os_release: Option<String>,
    origin: String,
    comment: String,
    locked: bool,
    automatic: bool,
    depends: Vec<String>,
}

impl InstalledPackageBuilder {
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    #[must_use]
    pub fn os_release(mut self, os_release: &str) -> Self {
        self.os_release = Some(os_release.to_string());
        self
    }

    #[must_use]
    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    #[must_use]
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    #[must_use]
    pub fn automatic(mut self, automatic: bool) -> Self {
        self.automatic = automatic;
        self
    }

    #[must_use]
    pub fn depends_on(mut self, name: &str) -> Self {
        self.depends.push(name.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> InstalledPackage {
        InstalledPackage {
            name: self.name,
            version: self.version,
            os_release: self.os_release,
            origin: self.origin,
            comment: self.comment,
            locked: self.locked,
            automatic: self.automatic,
            depends: self.depends,
        }
    }
}

#[derive(Default)]
pub struct IndexEntryBuilder {
    pkgname: String,
    version: String,
    os_release: Option<String>,
    comment: String,
    origin: String,
    depends: Vec<String>,
}

impl IndexEntryBuilder {
    #[must_use]
    pub fn pkgname(mut self, pkgname: &str) -> Self {
        self.pkgname = pkgname.to_string();
        self
    }

    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    #[must_use]
    pub fn os_release(mut self, os_release: &str) -> Self {
        self.os_release = Some(os_release.to_string());
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    #[must_use]
    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    #[must_use]
    pub fn depends_on(mut self, name: &str) -> Self {
        self.depends.push(name.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> IndexEntry {
        IndexEntry {
            pkgname: self.pkgname,
            version: self.version,
            os_release: self.os_release,
            comment: self.comment,
            origin: self.origin,
            depends: self.depends,
        }
    }
}
