//! Log record structure

use super::error::Result;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// One emitted or parsed log entry.
///
/// Records built by the logger carry the exact line that was written in
/// `raw_line`. Records rebuilt by the parser have no raw line, and their
/// `timestamp` is `None` when the time text could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub level: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_line: Option<String>,
}

impl LogRecord {
    /// Build a record for an emit call, rendering its serialized line
    pub fn emitted(
        level: Severity,
        message: String,
        now: DateTime<Local>,
        format: TimestampFormat,
    ) -> Self {
        let raw_line = Self::serialize_line(&format.format(&now), level, &message);
        Self {
            timestamp: Some(now.fixed_offset()),
            level,
            message,
            raw_line: Some(raw_line),
        }
    }

    /// Rebuild a record from a parsed line
    pub fn parsed(timestamp: Option<DateTime<FixedOffset>>, level: Severity, message: String) -> Self {
        Self {
            timestamp,
            level,
            message,
            raw_line: None,
        }
    }

    /// `[<time>] <LEVEL> <message>\n`
    pub fn serialize_line(time: &str, level: Severity, message: &str) -> String {
        format!("[{}] {} {}\n", time, level, message)
    }

    #[must_use]
    pub fn has_valid_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_emitted_record_line() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single().unwrap();
        let record = LogRecord::emitted(
            Severity::Error,
            "disk full".to_string(),
            now,
            TimestampFormat::Display,
        );

        let line = record.raw_line.as_deref().unwrap();
        assert!(line.starts_with("[Fri Mar 01 2024 08:00:00 GMT"));
        assert!(line.ends_with("] ERROR disk full\n"));
        assert_eq!(record.timestamp.unwrap().timestamp(), now.timestamp());
    }

    #[test]
    fn test_parsed_record_has_no_raw_line() {
        let record = LogRecord::parsed(None, Severity::Info, "hello".to_string());
        assert!(record.raw_line.is_none());
        assert!(!record.has_valid_timestamp());
    }

    #[test]
    fn test_json_serialization() {
        let record = LogRecord::parsed(None, Severity::Notice, "note".to_string());
        let json = record.to_json().unwrap();
        assert_eq!(json, r#"{"timestamp":null,"level":"NOTICE","message":"note"}"#);
    }
}
