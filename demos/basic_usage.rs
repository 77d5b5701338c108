//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the console at different levels.
//!
//! Run with: cargo run --example basic_usage

use swaplog::prelude::*;
use swaplog::{info, warn};

fn main() -> Result<()> {
    // A sync logger with the default pattern and a console sink.
    let logger = Logger::builder()
        .name("basic")
        .min_level(LogLevel::Debug)
        .build()?;

    logger.debug(file!(), line!(), "This is a debug message");
    logger.info(file!(), line!(), "This is an info message");
    logger.warn(file!(), line!(), "This is a warning message");
    logger.error(file!(), line!(), "This is an error message");
    logger.fatal(file!(), line!(), "This is a fatal message");

    // Raise the threshold at runtime: debug no longer shows.
    logger.set_level(LogLevel::Info);
    logger.debug(file!(), line!(), "Hidden now");
    info!(logger, "Still visible, logged through the macro");
    warn!(logger, "Retry {} of {}", 1, 3);

    // The process-wide root logger always exists.
    registry().root().info(file!(), line!(), "Hello from the root logger");

    Ok(())
}
