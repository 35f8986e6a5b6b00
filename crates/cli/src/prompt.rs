//! Terminal side of the package selection prompt

use std::io::{self, BufRead, IsTerminal};

use console::style;
use dialoguer::Input;
use mport::package::{
    IndexEntry,
    prompt::{PromptError, Prompter, SelectionError},
};

/// Reads selections with dialoguer on a terminal and line by line otherwise
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalPrompter {
    interactive: bool,
    use_colors: bool,
}

impl TerminalPrompter {
    pub(crate) fn new(use_colors: bool) -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            use_colors,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn present(&self, candidates: &[IndexEntry]) {
        println!("{}", candidate_list(candidates));
    }

    fn read_selection(&self, count: usize) -> Result<String, PromptError> {
        if self.interactive {
            Input::<String>::new()
                .with_prompt(format!("Selection [0-{}]", count.saturating_sub(1)))
                .allow_empty(true)
                .interact_text()
                .map_err(|e| PromptError::Io(io::Error::other(e)))
        } else {
            read_line_from(&mut io::stdin().lock())
        }
    }

    fn reject(&self, error: &SelectionError) {
        if self.use_colors {
            eprintln!("{}", style(error).for_stderr().red());
        } else {
            eprintln!("{error}");
        }
    }
}

/// The numbered list shown before a selection is read
pub(crate) fn candidate_list(candidates: &[IndexEntry]) -> String {
    let mut lines = vec!["Multiple packages found. Please select one:".to_string()];
    lines.extend(
        candidates
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{i}. {}", entry.display_name())),
    );
    lines.join("\n")
}

/// One line of input; end of input is [`PromptError::Closed`].
pub(crate) fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Err(PromptError::Closed),
        _ => Ok(line),
    }
}
