//! Error types for the logging library
//!
//! The only failure visible at construction time is a configuration problem
//! (an empty logger name, a malformed pattern). Per-record sink failures are
//! reported on stderr and swallowed; no log call returns an error.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Pattern string rejected at formatter construction
    #[error("Pattern parse error at byte {position}: {message}")]
    PatternParse { position: usize, message: String },

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
    Io(#[from] std::io::Error),

    /// File sink error with path
    #[error("File sink error for '{path}': {message}")]
    FileSink { path: String, message: String },

    /// Size-rolling sink failed to open its next file
    #[error("File rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },

    /// Remote-backed sink connectivity error
    #[error("Connectivity error for '{endpoint}': {message}")]
    Connectivity { endpoint: String, message: String },
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a pattern parse error
    pub fn pattern(position: usize, message: impl Into<String>) -> Self {
        LoggerError::PatternParse {
            position,
            message: message.into(),
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

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a connectivity error
    pub fn connectivity(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Connectivity {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
