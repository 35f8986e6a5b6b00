//! [`ProgressReporter`] for a terminal
//!
//! Status lines get an emoji marker, or an ASCII tag when the terminal cannot
//! show one, and optionally a color. Errors and warnings print to stderr and
//! everything else to stdout.

use std::fmt::Display;

use console::{Emoji, StyledObject, style};
use mport::progress_reporter::{MessageType, ProgressReporter};

static ERROR: Emoji<'_, '_> = Emoji("❌ ", "[E] ");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "[I] ");
static PROGRESS: Emoji<'_, '_> = Emoji("• ", " • ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "OK ");
static WARN: Emoji<'_, '_> = Emoji("⚠️ ", "[W] ");

#[derive(Debug, Clone, Copy)]
pub struct TerminalProgressReporter {
    use_colors: bool,
}

impl TerminalProgressReporter {
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

fn marker(message_type: MessageType) -> Emoji<'static, 'static> {
    match message_type {
        MessageType::Error => ERROR,
        MessageType::Info => INFO,
        MessageType::Progress => PROGRESS,
        MessageType::Success => SUCCESS,
        MessageType::Warning => WARN,
    }
}

fn colored<T: Display>(message_type: MessageType, message: T) -> StyledObject<T> {
    let styled = style(message);
    match message_type {
        MessageType::Error => styled.for_stderr().red().bold(),
        MessageType::Info => styled.blue(),
        MessageType::Progress => styled.dim(),
        MessageType::Success => styled.green(),
        MessageType::Warning => styled.for_stderr().yellow().bold(),
    }
}

impl ProgressReporter for TerminalProgressReporter {
    fn status_line<T: Display>(&self, message_type: MessageType, message: T) -> String {
        let marker = marker(message_type);
        if self.use_colors {
            format!("{marker}{}", colored(message_type, message))
        } else {
            format!("{marker}{message}")
        }
    }

    fn report<T: Display>(&self, message: T) {
        println!("{message}");
    }

    fn report_status<T: Display>(&self, message_type: MessageType, message: T) {
        let line = self.status_line(message_type, message);
        if message_type.is_problem() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
