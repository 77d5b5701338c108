//! Core logger types and traits

pub mod buffer;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod pattern;
pub mod pipeline;
pub mod registry;

pub use buffer::ByteBuffer;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use pattern::{PatternFormatter, DEFAULT_PATTERN};
pub use pipeline::{AsyncPipeline, GrowthPolicy};
pub use registry::{registry, LoggerRegistry, ROOT_LOGGER_NAME};
