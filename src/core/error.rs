//! Error types for the logger system

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity name or number that does not map to a level
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Log directory could not be created
    #[error("Failed to create log directory '{path}': {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log directory could not be listed
    #[error("Failed to read log directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be opened for appending
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be read
    #[error("Failed to read log file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be deleted
    #[error("Failed to delete log file '{path}': {source}")]
    FileDeletion {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An observer callback failed while handling a record
    #[error("Observer on channel '{channel}' failed: {message}")]
    Observer { channel: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn directory_creation(path: &Path, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn directory_read(path: &Path, source: std::io::Error) -> Self {
        LoggerError::DirectoryRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn file_open(path: &Path, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        LoggerError::FileRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn file_deletion(path: &Path, source: std::io::Error) -> Self {
        LoggerError::FileDeletion {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an observer error
    ///
    /// Observers return this to abort notification; it reaches the caller
    /// of the emit method unchanged.
    pub fn observer(channel: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Observer {
            channel: channel.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error came from the file system
    #[must_use]
    pub fn is_file_system(&self) -> bool {
        matches!(
            self,
            LoggerError::DirectoryCreation { .. }
                | LoggerError::DirectoryRead { .. }
                | LoggerError::FileOpen { .. }
                | LoggerError::FileRead { .. }
                | LoggerError::FileDeletion { .. }
                | LoggerError::IoOperation { .. }
                | LoggerError::IoError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FilenameTemplate", "missing '%s' slot");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::directory_creation(&PathBuf::from("/var/log/app"), io_err);
        assert!(matches!(err, LoggerError::DirectoryCreation { .. }));
        assert!(err.is_file_system());

        let err = LoggerError::observer("INFO", "callback failed");
        assert!(!err.is_file_system());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("FilenameTemplate", "missing '%s' slot");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for FilenameTemplate: missing '%s' slot"
        );

        let err = LoggerError::observer("LOG", "boom");
        assert_eq!(err.to_string(), "Observer on channel 'LOG' failed: boom");

        let err = LoggerError::InvalidSeverity("verbose".to_string());
        assert_eq!(err.to_string(), "Invalid severity: 'verbose'");
    }

    #[test]
    fn test_file_read_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoggerError::file_read(&PathBuf::from("/tmp/missing.log"), io_err);

        assert!(err.to_string().contains("/tmp/missing.log"));
        assert!(err.source().is_some());
    }
}
