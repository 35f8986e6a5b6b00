use std::fmt::Display;

/// Where everything a service wants the user to see ends up
///
/// `report` carries command output such as listings and summaries. The
/// `report_*` helpers carry status messages, which the front end may decorate
/// or route to another stream.
pub trait ProgressReporter {
    /// `message` decorated the way `report_status` would print it
    fn status_line<T: Display>(&self, message_type: MessageType, message: T) -> String;

    fn report<T: Display>(&self, message: T);

    fn report_status<T: Display>(&self, message_type: MessageType, message: T);

    fn report_progress<T: Display>(&self, message: T) {
        self.report_status(MessageType::Progress, message);
    }

    fn report_success<T: Display>(&self, message: T) {
        self.report_status(MessageType::Success, message);
    }

    fn report_info<T: Display>(&self, message: T) {
        self.report_status(MessageType::Info, message);
    }

    fn report_warning<T: Display>(&self, message: T) {
        self.report_status(MessageType::Warning, message);
    }

    fn report_error<T: Display>(&self, message: T) {
        self.report_status(MessageType::Error, message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Progress,
    Info,
    Success,
    Error,
    Warning,
}

impl MessageType {
    /// Errors and warnings belong on stderr
    #[must_use]
    pub fn is_problem(self) -> bool {
        matches!(self, Self::Error | Self::Warning)
    }
}
