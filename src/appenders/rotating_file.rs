//! Daily rotating file appender
//!
//! Writes each record to `directory/<template with the day's date stamp>`.
//! The open stream is keyed by day index; the first write on a later day
//! flushes and closes the current file before the next one is opened.

use crate::core::appender::Appender;
use crate::core::config::FilenameTemplate;
use crate::core::error::{LoggerError, Result};
use crate::core::log_record::LogRecord;
use crate::core::timestamp::{date_stamp, day_index};
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The file currently receiving records, plus the day it was opened for
pub struct RotatingStream {
    day_index: i64,
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl RotatingStream {
    /// Open `path` in append mode for `day_index`
    pub fn open(path: PathBuf, day_index: i64) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;

        Ok(Self {
            day_index,
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    #[must_use]
    pub fn day_index(&self) -> i64 {
        self.day_index
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one serialized line and push it to the file
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::other("Stream already closed"))?;

        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::io_operation(
                    "writing log file",
                    format!("Failed to write to '{}'", self.path.display()),
                    e,
                )
            })
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "flushing log file",
                    format!("Failed to flush '{}'", self.path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Flush pending data and release the file handle
    pub fn close(mut self) -> Result<()> {
        let result = self.flush();
        // Writer is dropped here, releasing the file handle
        self.writer = None;
        result
    }
}

impl Drop for RotatingStream {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                eprintln!(
                    "[WARN] Failed to flush log file {} on close: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

/// File appender that opens one file per calendar day
///
/// # Examples
///
/// ```no_run
/// use rust_event_logger::appenders::RotatingFileAppender;
/// use rust_event_logger::core::FilenameTemplate;
///
/// let template = FilenameTemplate::new("app-%s.log").unwrap();
/// let appender = RotatingFileAppender::new("/var/log/app", template);
/// ```
pub struct RotatingFileAppender {
    directory: PathBuf,
    template: FilenameTemplate,
    stream: Option<RotatingStream>,
}

impl RotatingFileAppender {
    /// Create an appender; no file is opened until the first write
    pub fn new(directory: impl Into<PathBuf>, template: FilenameTemplate) -> Self {
        Self {
            directory: directory.into(),
            template,
            stream: None,
        }
    }

    /// Path of the file for the local date of `now`
    pub fn path_for(&self, now: &DateTime<Local>) -> PathBuf {
        self.directory
            .join(self.template.render(&date_stamp(now.date_naive())))
    }

    /// Stream for `now`, rotating when the day index has advanced
    pub fn stream_at(&mut self, now: &DateTime<Local>) -> Result<&mut RotatingStream> {
        let today = day_index(now);
        let stale = self
            .stream
            .as_ref()
            .map_or(true, |stream| stream.day_index() < today);

        if stale {
            if let Some(previous) = self.stream.take() {
                previous.close()?;
            }
            let path = self.path_for(now);
            self.stream = Some(RotatingStream::open(path, today)?);
        }

        self.stream
            .as_mut()
            .ok_or_else(|| LoggerError::other("Log stream unavailable"))
    }

    /// Path of the open file, if any
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.stream.as_ref().map(RotatingStream::path)
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn template(&self) -> &FilenameTemplate {
        &self.template
    }
}

impl Appender for RotatingFileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let now = record
            .timestamp
            .map(|t| t.with_timezone(&Local))
            .unwrap_or_else(Local::now);
        let line = match record.raw_line.as_deref() {
            Some(line) => line.to_string(),
            None => LogRecord::serialize_line(&now.to_rfc3339(), record.level, &record.message),
        };

        self.stream_at(&now)?.write_line(&line)
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream.as_mut() {
            Some(stream) => stream.flush(),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "RotatingFileAppender"
    }
}
