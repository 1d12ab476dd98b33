//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use rotating_file::{RotatingFileAppender, RotatingStream};

pub use crate::core::Appender;

use crate::core::{LogRecord, Result};
use std::path::Path;

/// Where a logger's records go: standard output, or one file per day
pub enum Destination {
    Console(ConsoleAppender),
    File(RotatingFileAppender),
}

impl Destination {
    /// Path of the open daily file; always `None` for the console
    pub fn current_path(&self) -> Option<&Path> {
        match self {
            Destination::Console(_) => None,
            Destination::File(appender) => appender.current_path(),
        }
    }
}

impl Appender for Destination {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        match self {
            Destination::Console(appender) => appender.append(record),
            Destination::File(appender) => appender.append(record),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Destination::Console(appender) => appender.flush(),
            Destination::File(appender) => appender.flush(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Destination::Console(appender) => appender.name(),
            Destination::File(appender) => appender.name(),
        }
    }
}
