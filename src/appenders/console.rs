//! Console appender implementation
//!
//! Used when no log directory is configured. Standard output is never
//! rotated or closed.

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::io::Write;

pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// The text written for `record`
    fn render(&self, record: &LogRecord) -> String {
        let line = match record.raw_line.as_deref() {
            Some(line) => line,
            None => return self.render_parsed(record),
        };

        if self.use_colors {
            Self::colorize(line, record)
        } else {
            line.to_string()
        }
    }

    /// Records without a serialized line (e.g. replayed from a parsed file)
    fn render_parsed(&self, record: &LogRecord) -> String {
        let time = record
            .timestamp
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "Invalid Date".to_string());
        LogRecord::serialize_line(&time, record.level, &record.message)
    }

    #[cfg(feature = "console")]
    fn colorize(line: &str, record: &LogRecord) -> String {
        use colored::Colorize;

        let level = record.level.to_str();
        let marker = format!("] {} ", level);
        match line.find(&marker) {
            Some(pos) => {
                let start = pos + 2;
                let end = start + level.len();
                format!(
                    "{}{}{}",
                    &line[..start],
                    level.color(record.level.color_code()),
                    &line[end..]
                )
            }
            None => line.to_string(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(line: &str, _record: &LogRecord) -> String {
        line.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.render(record);
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing to stdout", "write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
