//! Core logger types and traits

pub mod appender;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod log_record;
pub mod logger;
pub mod observer;
pub mod parser;
pub mod severity;
pub mod timestamp;

pub use appender::Appender;
pub use clock::{Clock, SystemClock};
pub use config::{FilenameTemplate, LoggerConfig, DEFAULT_FILENAME_TEMPLATE};
pub use error::{LoggerError, Result};
pub use format::{interpolate, Value};
pub use log_record::LogRecord;
pub use logger::{ClearReport, DatedFile, Logger, LoggerBuilder};
pub use observer::{Channel, ObserverCallback, ObserverId, CATCH_ALL_CHANNEL};
pub use severity::{Severity, SeverityThreshold};
pub use timestamp::{date_stamp, parse_date_stamp, parse_timestamp, TimestampFormat};
