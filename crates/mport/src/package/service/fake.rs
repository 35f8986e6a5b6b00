//! In-memory store and recording reporter for service unit tests

use std::{
    cell::RefCell,
    collections::{BTreeSet, VecDeque},
    fmt::Display,
};

use crate::{
    package::{
        IndexEntry, InstallOutcome, InstalledPackage,
        port::{PackageStore, StoreError},
        prompt::{PromptError, Prompter, SelectionError},
    },
    progress_reporter::{MessageType, ProgressReporter},
};

#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) installed: RefCell<Vec<InstalledPackage>>,
    pub(crate) index: Vec<IndexEntry>,
    pub(crate) failing_deletes: BTreeSet<String>,
    pub(crate) delete_log: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub(crate) fn with_installed(installed: Vec<InstalledPackage>) -> Self {
        Self {
            installed: RefCell::new(installed),
            ..Self::default()
        }
    }

    pub(crate) fn fail_delete_of(mut self, name: &str) -> Self {
        self.failing_deletes.insert(name.to_string());
        self
    }

    pub(crate) fn installed_names(&self) -> Vec<String> {
        self.installed
            .borrow()
            .iter()
            .map(|pkg| pkg.name.clone())
            .collect()
    }
}

impl PackageStore for MemoryStore {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>, StoreError> {
        Ok(self.installed.borrow().clone())
    }

    fn lookup_index(&self, name: &str) -> Result<Vec<IndexEntry>, StoreError> {
        Ok(self
            .index
            .iter()
            .filter(|entry| entry.pkgname == name)
            .cloned()
            .collect())
    }

    fn search_index(&self, query: &str) -> Result<Vec<IndexEntry>, StoreError> {
        Ok(self
            .index
            .iter()
            .filter(|entry| entry.pkgname.contains(query) || entry.comment.contains(query))
            .cloned()
            .collect())
    }

    fn install_explicit(
        &self,
        pkgname: &str,
        version: &str,
    ) -> Result<InstallOutcome, StoreError> {
        let mut installed = self.installed.borrow_mut();
        if let Some(existing) = installed.iter_mut().find(|pkg| pkg.name == pkgname) {
            if existing.automatic {
                existing.automatic = false;
                return Ok(InstallOutcome::MarkedExplicit);
            }
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        installed.push(InstalledPackage {
            name: pkgname.to_string(),
            version: Some(version.to_string()),
            os_release: None,
            origin: String::new(),
            comment: String::new(),
            locked: false,
            automatic: false,
            depends: Vec::new(),
        });
        Ok(InstallOutcome::Installed {
            dependencies: Vec::new(),
        })
    }

    fn dependents(&self, name: &str) -> Result<Vec<InstalledPackage>, StoreError> {
        Ok(self
            .installed
            .borrow()
            .iter()
            .filter(|pkg| pkg.name != name && pkg.depends.iter().any(|dep| dep == name))
            .cloned()
            .collect())
    }

    fn delete_package(&self, name: &str) -> Result<(), StoreError> {
        self.delete_log.borrow_mut().push(name.to_string());

        if self.failing_deletes.contains(name) {
            return Err(StoreError::Write {
                path: "installed.yaml".into(),
                source_message: "disk full".to_string(),
            });
        }

        let dependents = self.dependents(name)?;
        if !dependents.is_empty() {
            return Err(StoreError::StillRequired {
                name: name.to_string(),
                dependents: dependents.into_iter().map(|pkg| pkg.name).collect(),
            });
        }

        let mut installed = self.installed.borrow_mut();
        let before = installed.len();
        installed.retain(|pkg| pkg.name != name);
        if installed.len() == before {
            return Err(StoreError::NotInstalled(name.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub(crate) lines: RefCell<Vec<(Option<MessageType>, String)>>,
}

impl RecordingReporter {
    pub(crate) fn messages_of(&self, message_type: MessageType) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == Some(message_type))
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn status_line<T: Display>(&self, _message_type: MessageType, message: T) -> String {
        message.to_string()
    }

    fn report<T: Display>(&self, message: T) {
        self.lines.borrow_mut().push((None, message.to_string()));
    }

    fn report_status<T: Display>(&self, message_type: MessageType, message: T) {
        self.lines
            .borrow_mut()
            .push((Some(message_type), message.to_string()));
    }
}

pub(crate) struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub(crate) presented: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(ToString::to_string).collect()),
            presented: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn present(&self, candidates: &[IndexEntry]) {
        self.presented
            .borrow_mut()
            .extend(candidates.iter().map(IndexEntry::display_name));
    }

    fn read_selection(&self, _count: usize) -> Result<String, PromptError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(PromptError::Closed)
    }

    fn reject(&self, _error: &SelectionError) {}
}
