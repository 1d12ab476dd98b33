//! Timestamp formatting and parsing utilities
//!
//! Renders the bracketed time at the start of each log line, parses it back
//! when log files are read, and derives the day index and `YYYY-M-D` date
//! stamp used to name and rotate daily files.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Milliseconds in one day; the divisor of the day index
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Display format used by [`TimestampFormat::Display`]
const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Date stamps embedded in log file names (month is zero-based)
static DATE_STAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").unwrap_or_else(|_| unreachable!())
});

/// Trailing zone description such as ` (Central European Summer Time)`
static ZONE_NAME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap_or_else(|_| unreachable!()));

/// How the time of a record is rendered inside the `[...]` prefix
///
/// Every variant is understood by [`parse_timestamp`], so files written with
/// any of them can be read back.
///
/// # Examples
///
/// ```
/// use rust_event_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let time = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let rendered = TimestampFormat::Display.format(&time);
/// assert!(rendered.starts_with("Wed Jan 08 2025 10:30:45 GMT"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Human readable local time: `Wed Jan 08 2025 10:30:45 GMT+0100`
    #[default]
    Display,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T09:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the local offset: `2025-01-08T10:30:45.123+01:00`
    Rfc3339,

    /// RFC 2822: `Wed, 8 Jan 2025 10:30:45 +0100`
    Rfc2822,

    /// Unix timestamp in milliseconds: `1736328645123`
    UnixMillis,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Display => datetime.format(DISPLAY_FORMAT).to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Rfc2822 => datetime.to_rfc2822(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Display => "Local date-time (Wed Jan 08 2025 10:30:45 GMT+0100)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds (2025-01-08T09:30:45.123Z)",
            TimestampFormat::Rfc3339 => "RFC 3339 with offset (2025-01-08T10:30:45+01:00)",
            TimestampFormat::Rfc2822 => "RFC 2822 (Wed, 8 Jan 2025 10:30:45 +0100)",
            TimestampFormat::UnixMillis => "Unix timestamp in milliseconds (1736328645123)",
        }
    }
}

/// Parse a rendered timestamp back into a point in time.
///
/// Accepts every [`TimestampFormat`], zone-name suffixes after the display
/// format, and naive `YYYY-MM-DD HH:MM:SS` local times. Returns `None` when
/// nothing matches.
pub fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = ZONE_NAME_SUFFIX.replace(input.trim(), "");
    let text = trimmed.as_ref();

    if let Ok(dt) = DateTime::parse_from_str(text, DISPLAY_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt);
    }
    if let Ok(millis) = text.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.fixed_offset());
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .map(|dt| dt.fixed_offset())
}

/// Whole days elapsed since the Unix epoch
#[inline]
pub fn day_index(datetime: &DateTime<Local>) -> i64 {
    datetime.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}

/// `YYYY-M-D` stamp of a local date; the month is zero-based
pub fn date_stamp(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month0(), date.day())
}

/// Extract the first valid `YYYY-M-D` stamp (zero-based month) from a file name
pub fn parse_date_stamp(name: &str) -> Option<NaiveDate> {
    DATE_STAMP_REGEX.captures_iter(name).find_map(|caps| {
        let year: i32 = caps[1].parse().ok()?;
        let month0: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month0 + 1, day)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_display_format_roundtrip() {
        let time = fixed_datetime();
        let rendered = TimestampFormat::Display.format(&time);
        assert!(rendered.starts_with("Wed Jan 08 2025 10:30:45 GMT"));

        let parsed = parse_timestamp(&rendered).expect("display format parses");
        assert_eq!(parsed.timestamp(), time.timestamp());
    }

    #[test]
    fn test_every_format_parses_back() {
        let time = fixed_datetime();
        for format in [
            TimestampFormat::Display,
            TimestampFormat::Iso8601,
            TimestampFormat::Rfc3339,
            TimestampFormat::Rfc2822,
            TimestampFormat::UnixMillis,
        ] {
            let rendered = format.format(&time);
            let parsed = parse_timestamp(&rendered)
                .unwrap_or_else(|| panic!("{:?} did not parse: {}", format, rendered));
            assert_eq!(parsed.timestamp(), time.timestamp(), "{:?}", format);
        }
    }

    #[test]
    fn test_parse_ignores_zone_name_suffix() {
        let parsed = parse_timestamp("Wed Jan 08 2025 10:30:45 GMT+0100 (Central European Standard Time)");
        let parsed = parsed.expect("suffix is stripped");
        assert_eq!(parsed.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_parse_invalid_is_none() {
        assert!(parse_timestamp("not a time").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_day_index() {
        let epoch = Utc.timestamp_millis_opt(0).unwrap().with_timezone(&Local);
        assert_eq!(day_index(&epoch), 0);

        let later = Utc
            .timestamp_millis_opt(MILLIS_PER_DAY * 3 + 5)
            .unwrap()
            .with_timezone(&Local);
        assert_eq!(day_index(&later), 3);

        let before_epoch = Utc.timestamp_millis_opt(-1).unwrap().with_timezone(&Local);
        assert_eq!(day_index(&before_epoch), -1);
    }

    #[test]
    fn test_date_stamp_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_stamp(date), "2024-0-5");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(date_stamp(date), "2024-11-31");
    }

    #[test]
    fn test_parse_date_stamp() {
        assert_eq!(
            parse_date_stamp("2024-0-5.log"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_date_stamp("app-2023-11-31.log"),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
        assert_eq!(parse_date_stamp("notes.txt"), None);
        // Month 12 is out of range for a zero-based month
        assert_eq!(parse_date_stamp("2023-12-31.log"), None);
    }

    #[test]
    fn test_date_stamp_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let name = format!("{}.log", date_stamp(date));
        assert_eq!(parse_date_stamp(&name), Some(date));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Display).expect("serialize");
        assert_eq!(json, "\"Display\"");

        let format: TimestampFormat = serde_json::from_str("\"Rfc3339\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_default_is_display() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Display);
    }
}
