//! Severity levels, most severe first

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight ordered importance levels of a log message.
///
/// The discriminants are part of the external contract: a lower value is a
/// higher severity, and thresholds compare on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// System unusable
    Emergency = 0,
    /// Immediate action required
    Alert = 1,
    /// Condition critical
    Critical = 2,
    /// Condition error
    Error = 3,
    /// Condition warning
    Warning = 4,
    /// Normal, but significant
    Notice = 5,
    /// Purely informational
    Info = 6,
    /// Debugging information
    Debug = 7,
}

impl Severity {
    /// Every severity in numeric order
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// The least severe level, used when a threshold cannot be resolved
    pub const LEAST: Severity = Severity::Debug;

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Whether a record at this severity passes `threshold`
    #[inline]
    pub fn passes(&self, threshold: Severity) -> bool {
        self.value() <= threshold.value()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emergency | Severity::Alert => BrightRed,
            Severity::Critical | Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERGENCY" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRITICAL" => Ok(Severity::Critical),
            "ERROR" => Ok(Severity::Error),
            "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Minimum severity as supplied by a caller: a name or a number.
///
/// Resolution never fails. Unknown names and non-finite numbers fall back to
/// [`Severity::LEAST`] so that everything is logged. A negative number is
/// below every severity and resolves to `None`: nothing passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityThreshold {
    Name(String),
    Level(f64),
}

impl SeverityThreshold {
    pub fn resolve(&self) -> Option<Severity> {
        match self {
            SeverityThreshold::Name(name) => Some(name.parse().unwrap_or(Severity::LEAST)),
            SeverityThreshold::Level(level) if !level.is_finite() => Some(Severity::LEAST),
            SeverityThreshold::Level(level) if *level < 0.0 => None,
            SeverityThreshold::Level(level) => {
                let clamped = level.floor().min(f64::from(Severity::LEAST.value()));
                Some(Severity::from_value(clamped as u8).unwrap_or(Severity::LEAST))
            }
        }
    }
}

impl Default for SeverityThreshold {
    fn default() -> Self {
        SeverityThreshold::Name(Severity::LEAST.to_str().to_string())
    }
}

impl From<Severity> for SeverityThreshold {
    fn from(severity: Severity) -> Self {
        SeverityThreshold::Level(f64::from(severity.value()))
    }
}

impl From<&str> for SeverityThreshold {
    fn from(name: &str) -> Self {
        SeverityThreshold::Name(name.to_string())
    }
}

impl From<String> for SeverityThreshold {
    fn from(name: String) -> Self {
        SeverityThreshold::Name(name)
    }
}

impl From<u8> for SeverityThreshold {
    fn from(level: u8) -> Self {
        SeverityThreshold::Level(f64::from(level))
    }
}

impl From<i32> for SeverityThreshold {
    fn from(level: i32) -> Self {
        SeverityThreshold::Level(f64::from(level))
    }
}

impl From<f64> for SeverityThreshold {
    fn from(level: f64) -> Self {
        SeverityThreshold::Level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values_are_fixed() {
        let values: Vec<u8> = Severity::ALL.iter().map(Severity::value).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(Severity::Emergency < Severity::Debug);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Notice".parse::<Severity>().unwrap(), Severity::Notice);
        assert!("WARN".parse::<Severity>().is_err());
    }

    #[test]
    fn test_passes() {
        assert!(Severity::Error.passes(Severity::Error));
        assert!(Severity::Alert.passes(Severity::Error));
        assert!(!Severity::Warning.passes(Severity::Error));
    }

    #[test]
    fn test_threshold_resolution() {
        assert_eq!(SeverityThreshold::from("error").resolve(), Some(Severity::Error));
        assert_eq!(SeverityThreshold::from("bogus").resolve(), Some(Severity::Debug));
        assert_eq!(SeverityThreshold::from(2).resolve(), Some(Severity::Critical));
        assert_eq!(SeverityThreshold::from(4.7).resolve(), Some(Severity::Warning));
        assert_eq!(SeverityThreshold::from(42).resolve(), Some(Severity::Debug));
        assert_eq!(SeverityThreshold::from(0.5).resolve(), Some(Severity::Emergency));
        assert_eq!(SeverityThreshold::from(f64::NAN).resolve(), Some(Severity::Debug));
        assert_eq!(SeverityThreshold::from(f64::INFINITY).resolve(), Some(Severity::Debug));
        assert_eq!(SeverityThreshold::default().resolve(), Some(Severity::Debug));
    }

    #[test]
    fn test_negative_threshold_suppresses_everything() {
        assert_eq!(SeverityThreshold::from(-3).resolve(), None);
        assert_eq!(SeverityThreshold::from(-0.5).resolve(), None);
        assert_eq!(SeverityThreshold::from(f64::NEG_INFINITY).resolve(), Some(Severity::Debug));
    }

    #[test]
    fn test_threshold_deserializes_name_or_number() {
        let by_name: SeverityThreshold = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(by_name.resolve(), Some(Severity::Notice));

        let by_number: SeverityThreshold = serde_json::from_str("1").unwrap();
        assert_eq!(by_number.resolve(), Some(Severity::Alert));
    }

    #[test]
    fn test_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
