//! # Swaplog
//!
//! An embeddable leveled logging library delivering formatted records either
//! synchronously (caller's thread) or asynchronously (background worker) to
//! pluggable sinks.
//!
//! ## Features
//!
//! - **Double-buffered async delivery**: producers append to a growable byte
//!   buffer while a worker drains the other, swapped in O(1) under a short
//!   lock; no lock is held during sink I/O
//! - **Pattern formatting**: a pattern string compiled once into directives
//!   (`[%d{%H:%M:%S}][%t][%c][%f:%l][%p]%T%m%n`)
//! - **Graceful drain**: dropping an async logger delivers every buffered
//!   record before returning
//! - **Thread safe**: designed for concurrent producers

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        registry, AsyncPipeline, ByteBuffer, GrowthPolicy, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerRegistry, PatternFormatter, Result, DEFAULT_PATTERN,
        ROOT_LOGGER_NAME,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, RollingFileSink, Sink};
}

pub use crate::core::{
    registry, AsyncPipeline, ByteBuffer, GrowthPolicy, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerError, LoggerRegistry, PatternFormatter, Result, DEFAULT_PATTERN, ROOT_LOGGER_NAME,
};
pub use sinks::{ConsoleSink, FileSink, RollingFileSink, Sink};
