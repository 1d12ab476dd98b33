//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// Destination for serialized records.
///
/// `append` receives records built by the logger, so `raw_line` is always
/// present; appenders write it as-is.
pub trait Appender: Send + Sync {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
