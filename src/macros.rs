//! Logging macros capturing the call site
//!
//! The logger API takes a pre-formatted message plus a source location; these
//! macros add `format!`-style ergonomics and fill in `file!()`/`line!()`.
//!
//! # Examples
//!
//! ```
//! use swaplog::prelude::*;
//! use swaplog::info;
//!
//! let logger = Logger::builder().name("app").build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use swaplog::prelude::*;
/// # let logger = Logger::builder().name("app").build().unwrap();
/// use swaplog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, file!(), line!(), &format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log through the process-wide root logger without looking it up first.
///
/// # Examples
///
/// ```
/// use swaplog::root_log;
/// use swaplog::LogLevel;
/// root_log!(LogLevel::Info, "startup complete in {}ms", 12);
/// ```
#[macro_export]
macro_rules! root_log {
    ($level:expr, $($arg:tt)+) => {
        $crate::core::registry::registry()
            .root()
            .log($level, file!(), line!(), &format!($($arg)+))
    };
}
