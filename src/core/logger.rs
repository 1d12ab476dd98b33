//! Main logger implementation

use super::{
    appender::Appender,
    clock::{Clock, SystemClock},
    config::{FilenameTemplate, LoggerConfig},
    error::{LoggerError, Result},
    format::{interpolate, Value},
    log_record::LogRecord,
    observer::{self, Channel, ObserverId, ObserverRegistry},
    parser,
    severity::{Severity, SeverityThreshold},
    timestamp::{parse_date_stamp, TimestampFormat},
};
use crate::appenders::{ConsoleAppender, Destination, RotatingFileAppender};
use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A log file in the configured directory whose name carries a date stamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Outcome of a cleanup pass.
///
/// Deletion is attempted for every selected file; failures are collected
/// here instead of aborting the pass.
#[derive(Debug, Default)]
pub struct ClearReport {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<LoggerError>,
}

impl ClearReport {
    /// Whether every selected file was deleted
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Leveled logger writing to standard output or to one file per day.
///
/// Every emitted record is written first and then delivered to the
/// observers of its severity's channel followed by the catch-all channel.
///
/// # Example
///
/// ```no_run
/// use rust_event_logger::prelude::*;
///
/// # fn main() -> rust_event_logger::Result<()> {
/// let logger = Logger::create("ERROR", "/tmp/app-logs", "%s.log")?;
///
/// logger.on(Channel::All, |record: &LogRecord| {
///     println!("observed {} {}", record.level, record.message);
///     Ok(())
/// });
///
/// logger.warning("should be dropped")?;
/// logger.error("should appear: boom")?;
/// # Ok(())
/// # }
/// ```
pub struct Logger {
    min_severity: Option<Severity>,
    timestamp_format: TimestampFormat,
    directory: Option<PathBuf>,
    enabled: AtomicBool,
    destination: Mutex<Destination>,
    observers: RwLock<ObserverRegistry>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Create a logger writing daily files into `directory`.
    ///
    /// `min_severity` may be a name (any case) or a number; anything that
    /// does not resolve falls back to `DEBUG`. The directory is created if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not have exactly one `%s` slot
    /// or the directory cannot be created.
    pub fn create(
        min_severity: impl Into<SeverityThreshold>,
        directory: impl AsRef<Path>,
        filename_template: &str,
    ) -> Result<Self> {
        Self::builder()
            .min_severity(min_severity)
            .directory(directory)
            .filename_template(filename_template)
            .build()
    }

    /// Create a logger writing to standard output
    #[must_use]
    pub fn stdout(min_severity: impl Into<SeverityThreshold>) -> Self {
        Self::assemble(
            min_severity.into().resolve(),
            TimestampFormat::default(),
            None,
            Destination::Console(ConsoleAppender::new()),
            Arc::new(SystemClock),
        )
    }

    /// Create a logger from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured directory cannot be created.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config).build()
    }

    fn assemble(
        min_severity: Option<Severity>,
        timestamp_format: TimestampFormat,
        directory: Option<PathBuf>,
        destination: Destination,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            min_severity,
            timestamp_format,
            directory,
            enabled: AtomicBool::new(true),
            destination: Mutex::new(destination),
            observers: RwLock::new(ObserverRegistry::new()),
            clock,
        }
    }

    /// Resume emitting after [`Logger::disable`]
    pub fn enable(&self) -> &Self {
        self.enabled.store(true, Ordering::Release);
        self
    }

    /// Stop emitting; calls still succeed but write and notify nothing
    pub fn disable(&self) -> &Self {
        self.enabled.store(false, Ordering::Release);
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Resolved threshold; `None` when a negative level suppresses everything
    #[must_use]
    pub fn min_severity(&self) -> Option<Severity> {
        self.min_severity
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Whether a record at `severity` would currently be emitted
    #[inline]
    #[must_use]
    pub fn should_log(&self, severity: Severity) -> bool {
        self.is_enabled()
            && self
                .min_severity
                .is_some_and(|threshold| severity.passes(threshold))
    }

    /// Emit `message` at `severity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written, or the first error
    /// returned by an observer.
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<&Self> {
        if !self.should_log(severity) {
            return Ok(self);
        }
        self.emit(severity, message.into())
    }

    /// Emit a printf-style `template` with `args` substituted.
    ///
    /// ```
    /// use rust_event_logger::prelude::*;
    /// use serde_json::json;
    ///
    /// let logger = Logger::stdout("DEBUG");
    /// logger.log_args(Severity::Error, "should appear: %s", &[json!("boom")]).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Logger::log`].
    pub fn log_args(&self, severity: Severity, template: &str, args: &[Value]) -> Result<&Self> {
        if !self.should_log(severity) {
            return Ok(self);
        }
        self.emit(severity, interpolate(template, args))
    }

    fn emit(&self, severity: Severity, message: String) -> Result<&Self> {
        let now = self.clock.now();
        let record = LogRecord::emitted(severity, message, now, self.timestamp_format);

        self.destination.lock().append(&record)?;

        // Observers run without the registry lock so they may log or register
        let recipients = self.observers.read().recipients(severity);
        observer::notify(&recipients, &record)?;

        Ok(self)
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Emergency, message)
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Alert, message)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Critical, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Error, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Warning, message)
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Notice, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<&Self> {
        self.log(Severity::Debug, message)
    }

    /// Register `callback` on `channel`; callbacks run in registration order
    pub fn on<F>(&self, channel: impl Into<Channel>, callback: F) -> ObserverId
    where
        F: Fn(&LogRecord) -> Result<()> + Send + Sync + 'static,
    {
        self.observers
            .write()
            .register(channel.into(), Arc::new(callback))
    }

    /// Remove a callback registered with [`Logger::on`]
    pub fn off(&self, channel: impl Into<Channel>, id: ObserverId) -> bool {
        self.observers.write().unregister(channel.into(), id)
    }

    #[must_use]
    pub fn observer_count(&self, channel: impl Into<Channel>) -> usize {
        self.observers.read().count(channel.into())
    }

    /// Path of the daily file currently open, if any
    #[must_use]
    pub fn current_file(&self) -> Option<PathBuf> {
        self.destination.lock().current_path().map(Path::to_path_buf)
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.lock().flush()
    }

    /// Dated log files in the directory, oldest first.
    ///
    /// Names are matched against a `YYYY-M-D` stamp with a zero-based month,
    /// the form the logger itself writes. Entries without a valid stamp are
    /// not listed. Without a directory the list is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn files(&self) -> Result<Vec<DatedFile>> {
        let Some(dir) = self.directory.as_deref() else {
            return Ok(Vec::new());
        };

        let entries = fs::read_dir(dir).map_err(|e| LoggerError::directory_read(dir, e))?;
        let mut files: Vec<DatedFile> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let date = parse_date_stamp(entry.file_name().to_str()?)?;
                Some(DatedFile {
                    path: entry.path(),
                    date,
                })
            })
            .collect();

        files.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
        Ok(files)
    }

    /// Files dated strictly before `before`
    pub fn files_before(&self, before: NaiveDate) -> Result<Vec<DatedFile>> {
        Ok(self
            .files()?
            .into_iter()
            .filter(|file| file.date < before)
            .collect())
    }

    /// Files dated strictly after `after`
    pub fn files_after(&self, after: NaiveDate) -> Result<Vec<DatedFile>> {
        Ok(self
            .files()?
            .into_iter()
            .filter(|file| file.date > after)
            .collect())
    }

    /// Delete files dated before `before`, defaulting to today.
    ///
    /// Today's file is kept by the default cutoff.
    pub fn clear(&self, before: Option<NaiveDate>) -> Result<ClearReport> {
        let before = before.unwrap_or_else(|| self.clock.now().date_naive());
        self.clear_before(before)
    }

    /// Delete files dated strictly before `before`
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory cannot be read; per-file
    /// failures are collected in the report.
    pub fn clear_before(&self, before: NaiveDate) -> Result<ClearReport> {
        Ok(Self::remove_files(self.files_before(before)?))
    }

    /// Delete files dated strictly after `after`
    pub fn clear_after(&self, after: NaiveDate) -> Result<ClearReport> {
        Ok(Self::remove_files(self.files_after(after)?))
    }

    fn remove_files(files: Vec<DatedFile>) -> ClearReport {
        let mut report = ClearReport::default();

        for file in files {
            match fs::remove_file(&file.path) {
                Ok(()) => report.removed.push(file.path),
                Err(e) => {
                    eprintln!(
                        "[WARN] Failed to delete log file {}: {}",
                        file.path.display(),
                        e
                    );
                    report.failures.push(LoggerError::file_deletion(&file.path, e));
                }
            }
        }

        report
    }

    /// See [`parser::parse`]
    pub fn parse(content: &str) -> Vec<LogRecord> {
        parser::parse(content)
    }

    /// See [`parser::read`]
    #[cfg(feature = "async-reader")]
    pub async fn read(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
        parser::read(path).await
    }

    /// See [`parser::read_blocking`]
    pub fn read_blocking(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
        parser::read_blocking(path)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_severity", &self.min_severity)
            .field("directory", &self.directory)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.destination.get_mut().flush() {
            eprintln!("[WARN] Failed to flush logger during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_event_logger::prelude::*;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Logger::builder()
///     .min_severity("notice")
///     .directory(dir.path())
///     .filename_template("app-%s.log")
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.min_severity(), Some(Severity::Notice));
/// ```
pub struct LoggerBuilder {
    min_severity: SeverityThreshold,
    directory: Option<PathBuf>,
    filename_template: Option<String>,
    timestamp_format: TimestampFormat,
    use_colors: bool,
    clock: Arc<dyn Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_severity: SeverityThreshold::default(),
            directory: None,
            filename_template: None,
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        let filename_template = config.effective_template();
        Self {
            min_severity: config.min_severity,
            directory: config.directory,
            filename_template: Some(filename_template.into()),
            timestamp_format: config.timestamp_format,
            use_colors: config.use_colors,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, threshold: impl Into<SeverityThreshold>) -> Self {
        self.min_severity = threshold.into();
        self
    }

    /// Write daily files into `directory` instead of standard output
    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = Some(directory.as_ref().to_path_buf());
        self
    }

    /// File name pattern with one `%s` slot; defaults to `%s.log`
    #[must_use = "builder methods return a new value"]
    pub fn filename_template(mut self, template: impl Into<String>) -> Self {
        self.filename_template = Some(template.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Replace the wall clock, e.g. to drive rotation in tests
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns an error if the filename template is invalid or the directory
    /// cannot be created.
    pub fn build(self) -> Result<Logger> {
        let min_severity = self.min_severity.resolve();

        let destination = match self.directory.as_deref() {
            Some(dir) => {
                let template = match self.filename_template {
                    Some(template) => FilenameTemplate::new(template)?,
                    None => FilenameTemplate::default(),
                };
                fs::create_dir_all(dir).map_err(|e| LoggerError::directory_creation(dir, e))?;
                Destination::File(RotatingFileAppender::new(dir, template))
            }
            None => Destination::Console(ConsoleAppender::with_colors(self.use_colors)),
        };

        Ok(Logger::assemble(
            min_severity,
            self.timestamp_format,
            self.directory,
            destination,
            self.clock,
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
