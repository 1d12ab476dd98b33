//! Log file parser
//!
//! Turns text written by the logger back into [`LogRecord`]s. Lines that do
//! not look like `[<time>] <LEVEL> <message>`, or whose level is not one of
//! the eight severity names, are skipped. A time that cannot be parsed
//! yields a record with no timestamp rather than dropping the line.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::severity::Severity;
use super::timestamp::parse_timestamp;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[(.*)\] (\w+) (.*)$").unwrap_or_else(|_| unreachable!())
});

/// Parse every recognizable line of `content`, in order of appearance.
///
/// # Examples
///
/// ```
/// use rust_event_logger::core::{parser, Severity};
///
/// let records = parser::parse(
///     "[Wed Jan 08 2025 10:30:45 GMT+0000] ERROR disk full\n\
///      not a log line\n\
///      [sometime] info service started\n",
/// );
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].level, Severity::Error);
/// assert!(records[0].timestamp.is_some());
/// assert_eq!(records[1].level, Severity::Info);
/// assert!(records[1].timestamp.is_none());
/// ```
pub fn parse(content: &str) -> Vec<LogRecord> {
    LINE_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let level: Severity = caps[2].parse().ok()?;
            let message = caps[3].trim_end_matches('\r').to_string();
            Some(LogRecord::parsed(parse_timestamp(&caps[1]), level, message))
        })
        .collect()
}

/// Read a whole log file and parse it
#[cfg(feature = "async-reader")]
pub async fn read(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoggerError::file_read(path, e))?;
    Ok(parse(&content))
}

/// Blocking counterpart of [`read`]
pub fn read_blocking(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LoggerError::file_read(path, e))?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_unknown_levels() {
        let records = parse("[t] VERBOSE hidden\n[t] NOTICE shown\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Severity::Notice);
        assert_eq!(records[0].message, "shown");
    }

    #[test]
    fn test_parse_uppercases_level() {
        let records = parse("[t] warning lower case level\n");
        assert_eq!(records[0].level, Severity::Warning);
    }

    #[test]
    fn test_parse_keeps_order() {
        let content = "[t] DEBUG one\n[t] ALERT two\n[t] INFO three\n";
        let messages: Vec<_> = parse(content).into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_parse_invalid_timestamp_keeps_record() {
        let records = parse("[yesterday-ish] CRITICAL still here\n");
        assert_eq!(records.len(), 1);
        assert!(records[0].timestamp.is_none());
        assert_eq!(records[0].message, "still here");
    }

    #[test]
    fn test_parse_handles_crlf() {
        let records = parse("[t] INFO windows line\r\n[t] ERROR next\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "windows line");
        assert_eq!(records[1].message, "next");
    }

    #[test]
    fn test_parse_empty_message_keeps_next_line() {
        let content = "[t] INFO \n[t] ERROR next\n[t] NOTICE   indented\n";
        let records = parse(content);

        let read: Vec<(Severity, &str)> = records
            .iter()
            .map(|r| (r.level, r.message.as_str()))
            .collect();
        assert_eq!(
            read,
            vec![
                (Severity::Info, ""),
                (Severity::Error, "next"),
                (Severity::Notice, "  indented"),
            ]
        );
    }

    #[test]
    fn test_parse_requires_single_separators() {
        assert!(parse("[t]\tINFO tabbed\n").is_empty());
        assert!(parse("[t] INFO\n").is_empty());
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse("").is_empty());
        assert!(parse("no brackets here\n[] \n").is_empty());
    }

    #[test]
    fn test_parsed_timestamp() {
        let records = parse("[2025-01-08T10:30:45.123Z] INFO iso\n");
        let ts = records[0].timestamp.expect("iso timestamp parses");
        assert_eq!(ts.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_read_blocking_missing_file() {
        let err = read_blocking("/nonexistent/dir/2024-0-1.log").unwrap_err();
        assert!(matches!(err, LoggerError::FileRead { .. }));
    }
}
