pub mod port;

pub use port::{MessageType, ProgressReporter};
