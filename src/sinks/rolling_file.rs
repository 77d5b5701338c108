//! Size-rolling file sink
//!
//! Starts a new file before any write that would reach the configured size
//! threshold, so one write is never split across two files. Generated names
//! follow `<base><year>-<month>-<day> <hour>:<minute>:<second>-<sequence>.log`
//! with an ever-increasing sequence number.

use super::file::open_append;
use super::Sink;
use crate::core::error::{LoggerError, Result};
use chrono::{Datelike, Local, Timelike};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug)]
struct RollingState {
    writer: BufWriter<File>,
    current_size: u64,
    sequence: u64,
}

#[derive(Debug)]
pub struct RollingFileSink {
    base: String,
    max_size: u64,
    state: Mutex<RollingState>,
}

impl RollingFileSink {
    /// Create the sink and open its first file.
    ///
    /// `base` is the filename prefix (it may include directories, which are
    /// created); `max_size` is the size threshold in bytes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero `max_size`, or an IO error if
    /// the first file cannot be created.
    pub fn new(base: impl Into<String>, max_size: u64) -> Result<Self> {
        let base = base.into();
        if max_size == 0 {
            return Err(LoggerError::config(
                "RollingFileSink",
                "max_size must be greater than zero",
            ));
        }
        let sequence = 1;
        let writer = BufWriter::new(open_append(&next_file_path(&base, sequence))?);
        Ok(Self {
            base,
            max_size,
            state: Mutex::new(RollingState {
                writer,
                current_size: 0,
                sequence,
            }),
        })
    }
}

fn next_file_path(base: &str, sequence: u64) -> PathBuf {
    let now = Local::now();
    PathBuf::from(format!(
        "{}{}-{}-{} {}:{}:{}-{}.log",
        base,
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        sequence,
    ))
}

impl Sink for RollingFileSink {
    fn log(&self, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.lock();
        if state.current_size + bytes.len() as u64 >= self.max_size {
            state.writer.flush().map_err(|e| {
                LoggerError::rotation(
                    self.base.as_str(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
            state.sequence += 1;
            let path = next_file_path(&self.base, state.sequence);
            state.writer = BufWriter::new(open_append(&path)?);
            state.current_size = 0;
        }
        state.writer.write_all(bytes)?;
        state.current_size += bytes.len() as u64;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.state.lock().flush_writer()
    }

    fn name(&self) -> &str {
        "rolling_file"
    }
}

impl RollingState {
    fn flush_writer(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for RollingFileSink {
    fn drop(&mut self) {
        let _ = self.state.lock().flush_writer();
    }
}
