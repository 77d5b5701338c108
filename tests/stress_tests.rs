//! Stress tests for the async pipeline under concurrent producers
//!
//! These tests verify:
//! - Per-producer FIFO ordering survives heavy interleaving
//! - Graceful drain loses nothing under load
//! - Runtime threshold changes are safe under concurrent writers

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use swaplog::prelude::*;

struct CollectSink {
    writes: Mutex<Vec<u8>>,
}

impl CollectSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
        })
    }
}

impl Sink for CollectSink {
    fn log(&self, bytes: &[u8]) -> Result<()> {
        self.writes.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn name(&self) -> &str {
        "collect"
    }
}

fn spawn_producers(logger: &Arc<Logger>, producers: usize, per_producer: usize) {
    let mut handles = Vec::new();
    for producer in 0..producers {
        let logger = Arc::clone(logger);
        handles.push(thread::spawn(move || {
            for seq in 0..per_producer {
                logger.info(file!(), line!(), &format!("{}:{}", producer, seq));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("producer thread panicked");
    }
}

#[test]
fn test_multi_producer_drain_loses_nothing() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 2000;

    let sink = CollectSink::new();
    let logger = Arc::new(
        Logger::builder()
            .name("stress")
            .pattern("%m%n")
            .sink(sink.clone())
            .async_mode()
            .build()
            .unwrap(),
    );

    spawn_producers(&logger, PRODUCERS, PER_PRODUCER);
    drop(logger);

    let content = String::from_utf8(sink.writes.lock().clone()).unwrap();
    assert_eq!(content.lines().count(), PRODUCERS * PER_PRODUCER);
}

#[test]
fn test_per_producer_fifo_order() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 1000;

    let sink = CollectSink::new();
    let logger = Arc::new(
        Logger::builder()
            .name("stress")
            .pattern("%m%n")
            .sink(sink.clone())
            .async_mode()
            .build()
            .unwrap(),
    );

    spawn_producers(&logger, PRODUCERS, PER_PRODUCER);
    drop(logger);

    // Records from different producers interleave, but each producer's own
    // sequence must arrive in order.
    let content = String::from_utf8(sink.writes.lock().clone()).unwrap();
    let mut next_seq = vec![0usize; PRODUCERS];
    for line in content.lines() {
        let (producer, seq) = line.split_once(':').expect("producer:seq line");
        let producer: usize = producer.parse().unwrap();
        let seq: usize = seq.parse().unwrap();
        assert_eq!(seq, next_seq[producer], "out-of-order record for producer {}", producer);
        next_seq[producer] += 1;
    }
    assert!(next_seq.iter().all(|&n| n == PER_PRODUCER));
}

#[test]
fn test_bounded_policy_under_load() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 500;

    let sink = CollectSink::new();
    let logger = Arc::new(
        Logger::builder()
            .name("stress")
            .pattern("%m%n")
            .sink(sink.clone())
            .async_mode()
            .growth_policy(GrowthPolicy::Bounded(1024))
            .build()
            .unwrap(),
    );

    spawn_producers(&logger, PRODUCERS, PER_PRODUCER);
    drop(logger);

    let content = String::from_utf8(sink.writes.lock().clone()).unwrap();
    assert_eq!(content.lines().count(), PRODUCERS * PER_PRODUCER);
}

#[test]
fn test_concurrent_threshold_changes() {
    let sink = CollectSink::new();
    let logger = Arc::new(
        Logger::builder()
            .name("stress")
            .pattern("%m%n")
            .sink(sink.clone())
            .async_mode()
            .build()
            .unwrap(),
    );

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..200 {
                logger.set_level(if i % 2 == 0 { LogLevel::Off } else { LogLevel::Debug });
            }
        })
    };
    spawn_producers(&logger, 2, 500);
    toggler.join().unwrap();
    drop(logger);

    // No exact count is guaranteed while the threshold flips; the invariant
    // is that every delivered record is complete and well formed.
    let content = String::from_utf8(sink.writes.lock().clone()).unwrap();
    for line in content.lines() {
        assert!(line.split_once(':').is_some());
    }
}
