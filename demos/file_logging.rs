//! File logging example
//!
//! Demonstrates the file sink and the size-rolling sink.
//!
//! Run with: cargo run --example file_logging

use std::sync::Arc;
use swaplog::prelude::*;

fn main() -> Result<()> {
    // One logger, two destinations: a plain append file and a size-rolling
    // family capped at 4 KiB per file.
    let logger = Logger::builder()
        .name("files")
        .pattern("[%d{%H:%M:%S}][%p]%T%m%n")
        .sink(Arc::new(FileSink::new("logs/app.log")?))
        .sink(Arc::new(RollingFileSink::new("logs/roll-", 4 * 1024)?))
        .build()?;

    for i in 0..200 {
        logger.info(file!(), line!(), &format!("record {}", i));
    }
    logger.flush()?;

    println!("Wrote logs/app.log and logs/roll-*.log");
    Ok(())
}
