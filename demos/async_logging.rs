//! Async logging example
//!
//! Demonstrates the double-buffered pipeline with several producer threads.
//!
//! Run with: cargo run --example async_logging

use std::sync::Arc;
use std::thread;
use swaplog::prelude::*;

fn main() -> Result<()> {
    let logger = Arc::new(
        Logger::builder()
            .name("async")
            .pattern("[%d{%H:%M:%S}][%t][%p]%T%m%n")
            .sink(Arc::new(ConsoleSink::new()))
            .async_mode()
            .build()?,
    );

    // Producers enqueue; the worker fans out off their critical path.
    let handles: Vec<_> = (0..5)
        .map(|producer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..20 {
                    logger.info(file!(), line!(), &format!("producer {} message {}", producer, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer thread panicked");
    }

    // Dropping the last handle drains every buffered record before returning.
    drop(logger);
    Ok(())
}
