//! Scripted prompter and recording reporter for driving services in tests.

use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt::Display,
};

use mport::{
    package::{
        IndexEntry,
        prompt::{PromptError, Prompter, SelectionError},
    },
    progress_reporter::{MessageType, ProgressReporter},
};

/// Answers selection prompts from a fixed list, then reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    presented: RefCell<Vec<Vec<String>>>,
    rejected: RefCell<Vec<SelectionError>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    /// Each presented candidate list, as `name-version` strings.
    #[must_use]
    pub fn presented(&self) -> Vec<Vec<String>> {
        self.presented.borrow().clone()
    }

    #[must_use]
    pub fn rejected(&self) -> Vec<SelectionError> {
        self.rejected.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn present(&self, candidates: &[IndexEntry]) {
        self.presented
            .borrow_mut()
            .push(candidates.iter().map(IndexEntry::display_name).collect());
    }

    fn read_selection(&self, _count: usize) -> Result<String, PromptError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(PromptError::Closed)
    }

    fn reject(&self, error: &SelectionError) {
        self.rejected.borrow_mut().push(error.clone());
    }
}

/// Keeps every line a service reports.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<(Option<MessageType>, String)>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn messages_of(&self, message_type: MessageType) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == Some(message_type))
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Plain output lines, without status messages.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(kind, _)| kind.is_none())
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
