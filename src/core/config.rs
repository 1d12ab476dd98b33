//! Logger configuration
//!
//! A [`LoggerConfig`] can be assembled in code or loaded from JSON:
//!
//! ```
//! use rust_event_logger::core::{LoggerConfig, Severity};
//!
//! let config = LoggerConfig::from_json_str(
//!     r#"{ "min_severity": "warning", "directory": "/var/log/app", "filename_template": "app-%s.log" }"#,
//! ).unwrap();
//! assert_eq!(config.min_severity.resolve(), Some(Severity::Warning));
//! ```

use super::error::{LoggerError, Result};
use super::severity::SeverityThreshold;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the date stamp in a filename template
pub const DATE_SLOT: &str = "%s";

/// Template used when a directory is configured without one
pub const DEFAULT_FILENAME_TEMPLATE: &str = "%s.log";

/// File name pattern with exactly one `%s` slot for the day's date stamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let slots = template.matches(DATE_SLOT).count();
        if slots != 1 {
            return Err(LoggerError::config(
                "FilenameTemplate",
                format!(
                    "'{}' must contain exactly one '{}' slot, found {}",
                    template, DATE_SLOT, slots
                ),
            ));
        }
        if template.contains('/') || template.contains('\\') {
            return Err(LoggerError::config(
                "FilenameTemplate",
                format!("'{}' must be a file name, not a path", template),
            ));
        }
        Ok(Self(template))
    }

    /// Substitute `date_stamp` into the slot
    pub fn render(&self, date_stamp: &str) -> String {
        self.0.replacen(DATE_SLOT, date_stamp, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self(DEFAULT_FILENAME_TEMPLATE.to_string())
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FilenameTemplate {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FilenameTemplate> for String {
    fn from(template: FilenameTemplate) -> Self {
        template.0
    }
}

/// Construction parameters of a [`Logger`](super::Logger)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records less severe than this are suppressed
    pub min_severity: SeverityThreshold,
    /// Output directory; `None` writes to standard output
    pub directory: Option<PathBuf>,
    /// Daily file name pattern, only used with a directory
    pub filename_template: Option<FilenameTemplate>,
    pub timestamp_format: TimestampFormat,
    /// Color the level name on the console
    pub use_colors: bool,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoggerError::file_read(path, e))?;
        Self::from_json_str(&content)
    }

    /// Template in effect when a directory is configured
    pub fn effective_template(&self) -> FilenameTemplate {
        self.filename_template.clone().unwrap_or_default()
    }
}
