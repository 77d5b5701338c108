//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::cell::RefCell;

// Thread-local cache for the thread id string to avoid re-rendering the
// Debug representation on every log call.
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// One log call's worth of data, immutable after construction.
///
/// Built once per accepted record, rendered immediately by the formatter,
/// and never crosses a thread boundary (only the rendered bytes do).
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub file: &'a str,
    pub line: u32,
    pub thread_id: String,
    pub logger: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: LogLevel,
        file: &'a str,
        line: u32,
        logger: &'a str,
        message: &'a str,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            file,
            line,
            thread_id: get_thread_id(),
            logger,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        let record = LogRecord::new(LogLevel::Warn, "main.rs", 42, "app", "disk low");
        assert_eq!(record.level, LogLevel::Warn);
        assert_eq!(record.file, "main.rs");
        assert_eq!(record.line, 42);
        assert_eq!(record.logger, "app");
        assert_eq!(record.message, "disk low");
        assert!(!record.thread_id.is_empty());
    }

    #[test]
    fn test_thread_id_stable_within_thread() {
        let a = LogRecord::new(LogLevel::Info, "a.rs", 1, "app", "x");
        let b = LogRecord::new(LogLevel::Info, "a.rs", 2, "app", "y");
        assert_eq!(a.thread_id, b.thread_id);
    }
}
