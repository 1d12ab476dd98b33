//! # Rust Event Logger
//!
//! A leveled logger that writes one file per day and notifies observers of
//! every emitted record.
//!
//! ## Features
//!
//! - **Eight Severities**: `EMERGENCY` through `DEBUG`, with a minimum threshold
//! - **Daily Files**: Lines go to `<directory>/<template>` with the date filled in,
//!   or to standard output when no directory is configured
//! - **Observers**: Callbacks per severity channel plus a catch-all `LOG` channel
//! - **Parsing**: Read written files back into structured records
//! - **Cleanup**: Delete dated files before or after a given day
//!
//! ## Example
//!
//! ```no_run
//! use rust_event_logger::prelude::*;
//!
//! # fn main() -> rust_event_logger::Result<()> {
//! let logger = Logger::create("INFO", "/var/log/myapp", "myapp-%s.log")?;
//! logger.info("service started")?.debug("not written")?;
//!
//! let records = Logger::read_blocking(logger.current_file().unwrap())?;
//! assert_eq!(records.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, Destination, RotatingFileAppender};
    pub use crate::core::{
        Appender, Channel, ClearReport, Clock, DatedFile, FilenameTemplate, LogRecord, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, ObserverId, Result, Severity,
        SeverityThreshold, SystemClock, TimestampFormat, Value,
    };
}

pub use appenders::{ConsoleAppender, Destination, RotatingFileAppender};
pub use self::core::{
    parser, Appender, Channel, ClearReport, Clock, DatedFile, FilenameTemplate, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, ObserverId, Result, Severity, SeverityThreshold,
    SystemClock, TimestampFormat, Value,
};
