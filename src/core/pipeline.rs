//! Asynchronous delivery pipeline
//!
//! Two byte buffers in interchangeable produce/consume roles, one mutex, two
//! condition variables, one worker thread. Producers append rendered records
//! to the produce-role buffer under the mutex; the worker swaps the roles in
//! O(1) and fans the consume-role buffer out to sinks with no lock held, so
//! slow sinks never serialize producers. Dropping the pipeline drains every
//! buffered record before the worker exits.

use super::buffer::ByteBuffer;
use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Producer-side capacity policy.
///
/// The buffer itself always grows rather than rejecting appends; this policy
/// decides whether producers may outrun the worker without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Appends always succeed immediately; memory grows if sinks fall behind.
    #[default]
    Unbounded,
    /// Producers wait until the worker drains once the produce buffer already
    /// holds at least this many pending bytes. Records are never dropped, and
    /// a single record larger than the bound is still appended whole.
    Bounded(usize),
}

struct Shared {
    /// Produce-role buffer. The consume-role buffer is owned by the worker,
    /// which is what guarantees exactly one drainer and no lock across I/O.
    produce: Mutex<ByteBuffer>,
    /// Signals producers that a swap freed the produce buffer.
    not_full: Condvar,
    /// Signals the worker that data (or a stop request) arrived.
    has_data: Condvar,
    stop: AtomicBool,
    policy: GrowthPolicy,
}

/// Owns the swap protocol and the worker thread.
///
/// Created with its owning async logger and destroyed with it: drop sets the
/// stop flag, wakes the worker, and joins it after a full drain.
pub struct AsyncPipeline {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl AsyncPipeline {
    /// Start the worker. `deliver` is invoked on the worker thread with each
    /// drained byte range; it must not panic across the callback boundary
    /// (the logger's fan-out already isolates per-sink panics).
    pub fn new<F>(policy: GrowthPolicy, deliver: F) -> Self
    where
        F: Fn(&[u8]) + Send + 'static,
    {
        let shared = Arc::new(Shared {
            produce: Mutex::new(ByteBuffer::new()),
            not_full: Condvar::new(),
            has_data: Condvar::new(),
            stop: AtomicBool::new(false),
            policy,
        });
        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || Self::worker_loop(&worker_shared, deliver));

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Append one rendered record to the produce-role buffer and wake the
    /// worker. Blocks only while the mutex is contended by a swap, or, under
    /// [`GrowthPolicy::Bounded`], while the pending backlog is at the bound.
    pub fn enqueue(&self, bytes: &[u8]) {
        let mut produce = self.shared.produce.lock();
        if let GrowthPolicy::Bounded(max_bytes) = self.shared.policy {
            while produce.readable_len() + bytes.len() > max_bytes
                && !produce.is_empty()
                && !self.shared.stop.load(Ordering::Acquire)
            {
                self.shared.not_full.wait(&mut produce);
            }
        }
        produce.append(bytes);
        drop(produce);
        self.shared.has_data.notify_one();
    }

    fn worker_loop<F>(shared: &Shared, deliver: F)
    where
        F: Fn(&[u8]),
    {
        let mut consume = ByteBuffer::new();
        loop {
            {
                let mut produce = shared.produce.lock();
                // Re-checked after every wake: exit only once stopped AND
                // drained, otherwise a record enqueued during shutdown would
                // be discarded.
                while produce.is_empty() && !shared.stop.load(Ordering::Acquire) {
                    shared.has_data.wait(&mut produce);
                }
                if produce.is_empty() {
                    break;
                }
                produce.swap_with(&mut consume);
                shared.not_full.notify_all();
            }
            // Lock released: fan-out runs off the producers' critical path.
            deliver(consume.readable());
            consume.reset();
        }
    }
}

impl Drop for AsyncPipeline {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Release);
        self.shared.has_data.notify_all();
        self.shared.not_full.notify_all();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                eprintln!("[swaplog] log worker thread panicked during shutdown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use std::sync::Arc;

    fn collecting_pipeline(policy: GrowthPolicy) -> (AsyncPipeline, Arc<PlMutex<Vec<u8>>>) {
        let collected = Arc::new(PlMutex::new(Vec::new()));
        let sink = Arc::clone(&collected);
        let pipeline = AsyncPipeline::new(policy, move |bytes| {
            sink.lock().extend_from_slice(bytes);
        });
        (pipeline, collected)
    }

    #[test]
    fn test_drop_drains_everything() {
        let (pipeline, collected) = collecting_pipeline(GrowthPolicy::Unbounded);
        for i in 0..1000 {
            pipeline.enqueue(format!("record {}\n", i).as_bytes());
        }
        drop(pipeline);
        let bytes = collected.lock();
        let lines: Vec<&str> = std::str::from_utf8(&bytes).unwrap().lines().collect();
        assert_eq!(lines.len(), 1000);
    }

    #[test]
    fn test_single_producer_fifo() {
        let (pipeline, collected) = collecting_pipeline(GrowthPolicy::Unbounded);
        for i in 0..500 {
            pipeline.enqueue(format!("{}\n", i).as_bytes());
        }
        drop(pipeline);
        let bytes = collected.lock();
        let observed: Vec<usize> = std::str::from_utf8(&bytes)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(observed, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_bounded_policy_loses_nothing() {
        let (pipeline, collected) = collecting_pipeline(GrowthPolicy::Bounded(64));
        for i in 0..200 {
            pipeline.enqueue(format!("entry {}\n", i).as_bytes());
        }
        drop(pipeline);
        let bytes = collected.lock();
        assert_eq!(std::str::from_utf8(&bytes).unwrap().lines().count(), 200);
    }

    #[test]
    fn test_oversized_record_under_bounded_policy() {
        let (pipeline, collected) = collecting_pipeline(GrowthPolicy::Bounded(8));
        pipeline.enqueue(b"this record is far larger than the bound\n");
        drop(pipeline);
        assert_eq!(
            collected.lock().as_slice(),
            b"this record is far larger than the bound\n"
        );
    }

    #[test]
    fn test_empty_pipeline_shutdown() {
        let (pipeline, collected) = collecting_pipeline(GrowthPolicy::Unbounded);
        drop(pipeline);
        assert!(collected.lock().is_empty());
    }
}
