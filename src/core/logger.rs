//! Logger implementation: level filter, formatting, dispatch
//!
//! One `Logger` type polymorphic over dispatch strategy as a closed variant:
//! `Sync` fans rendered bytes out to sinks on the calling thread under one
//! mutex; `Async` hands them to an [`AsyncPipeline`] and returns immediately.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::pattern::PatternFormatter;
use super::pipeline::{AsyncPipeline, GrowthPolicy};
use crate::sinks::{ConsoleSink, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

enum Dispatch {
    /// Fan-out on the caller's thread, serialized by one mutex.
    Sync { lock: Mutex<()> },
    /// Fan-out on the pipeline's worker thread.
    Async { pipeline: AsyncPipeline },
}

pub struct Logger {
    name: String,
    /// Level discriminant; runtime-mutable under concurrent readers/writers.
    threshold: AtomicU8,
    formatter: Arc<PatternFormatter>,
    sinks: Vec<Arc<dyn Sink>>,
    dispatch: Dispatch,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use swaplog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("app")
    ///     .min_level(LogLevel::Info)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Filter, format, and dispatch one record.
    ///
    /// A record below the threshold is a no-op (equality passes). Formatting
    /// and sink failures never propagate to the caller.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if level < self.level() {
            return;
        }
        let record = LogRecord::new(level, file, line, &self.name, message);
        let rendered = self.formatter.render(&record);
        match &self.dispatch {
            Dispatch::Sync { lock } => {
                let _guard = lock.lock();
                fan_out(&self.sinks, rendered.as_bytes());
            }
            Dispatch::Async { pipeline } => pipeline.enqueue(rendered.as_bytes()),
        }
    }

    #[inline]
    pub fn debug(&self, file: &str, line: u32, message: &str) {
        self.log(LogLevel::Debug, file, line, message);
    }

    #[inline]
    pub fn info(&self, file: &str, line: u32, message: &str) {
        self.log(LogLevel::Info, file, line, message);
    }

    #[inline]
    pub fn warn(&self, file: &str, line: u32, message: &str) {
        self.log(LogLevel::Warn, file, line, message);
    }

    #[inline]
    pub fn error(&self, file: &str, line: u32, message: &str) {
        self.log(LogLevel::Error, file, line, message);
    }

    #[inline]
    pub fn fatal(&self, file: &str, line: u32, message: &str) {
        self.log(LogLevel::Fatal, file, line, message);
    }

    /// Best-effort flush of every sink. Records still buffered in an async
    /// pipeline are flushed when the logger is dropped (graceful drain).
    pub fn flush(&self) -> Result<()> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Deliver `bytes` to every sink in registration order, best effort.
///
/// Each sink is isolated with `catch_unwind` so one failing or panicking sink
/// never blocks delivery to the rest; failures go to stderr and are otherwise
/// swallowed.
fn fan_out(sinks: &[Arc<dyn Sink>], bytes: &[u8]) {
    for sink in sinks {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.log(bytes)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[swaplog] sink '{}' failed: {}", sink.name(), e);
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                eprintln!(
                    "[swaplog] sink '{}' panicked: {}. Other sinks continue to function.",
                    sink.name(),
                    panic_msg
                );
            }
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use swaplog::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .name("app")
///     .min_level(LogLevel::Debug)
///     .pattern("%p %m%n")
///     .sink(Arc::new(ConsoleSink::new()))
///     .async_mode()
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    name: Option<String>,
    min_level: LogLevel,
    pattern: Option<String>,
    sinks: Vec<Arc<dyn Sink>>,
    async_mode: bool,
    growth_policy: GrowthPolicy,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            min_level: LogLevel::Debug,
            pattern: None,
            sinks: Vec::new(),
            async_mode: false,
            growth_policy: GrowthPolicy::Unbounded,
        }
    }

    /// Set the logger name (required, non-empty)
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set minimum log level (default `Debug`)
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the formatter pattern (default [`crate::core::pattern::DEFAULT_PATTERN`])
    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Add a sink. Sinks receive records in registration order; when none is
    /// added, a console sink is supplied.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Dispatch through a background worker instead of the calling thread.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self) -> Self {
        self.async_mode = true;
        self
    }

    /// Producer-side capacity policy for async dispatch (default unbounded).
    #[must_use = "builder methods return a new value"]
    pub fn growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.growth_policy = policy;
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a missing or empty name, and a
    /// pattern parse error for a malformed pattern (fail fast; never deferred
    /// to the first log call).
    pub fn build(self) -> Result<Logger> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(LoggerError::config(
                    "Logger",
                    "name is required and must not be empty",
                ))
            }
        };
        let formatter = Arc::new(match &self.pattern {
            Some(pattern) => PatternFormatter::new(pattern)?,
            None => PatternFormatter::default(),
        });
        let sinks = if self.sinks.is_empty() {
            vec![Arc::new(ConsoleSink::new()) as Arc<dyn Sink>]
        } else {
            self.sinks
        };

        let dispatch = if self.async_mode {
            let worker_sinks = sinks.clone();
            let pipeline = AsyncPipeline::new(self.growth_policy, move |bytes| {
                fan_out(&worker_sinks, bytes);
            });
            Dispatch::Async { pipeline }
        } else {
            Dispatch::Sync {
                lock: Mutex::new(()),
            }
        };

        Ok(Logger {
            name,
            threshold: AtomicU8::new(self.min_level as u8),
            formatter,
            sinks,
            dispatch,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
