//! Growable byte buffer with read/write cursors
//!
//! The foundational resource of the async pipeline. The buffer grows instead
//! of rejecting writes; backpressure is the pipeline's job, not the buffer's.

/// Starting capacity: 1 MiB
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;
/// Below this capacity the buffer doubles, above it grows linearly: 8 MiB
pub const THRESHOLD_BUFFER_SIZE: usize = 8 * 1024 * 1024;
/// Linear growth step once past the threshold: 1 MiB
pub const INCREMENT_BUFFER_SIZE: usize = 1024 * 1024;

/// Contiguous byte store with a read cursor and a write cursor.
///
/// Invariant: `0 <= read <= write <= capacity`. Grows, never shrinks.
#[derive(Debug)]
pub struct ByteBuffer {
    storage: Vec<u8>,
    read: usize,
    write: usize,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self {
            storage: vec![0; DEFAULT_BUFFER_SIZE],
            read: 0,
            write: 0,
        }
    }

    /// Append bytes at the write cursor, growing first if needed.
    /// Never fails, never drops data.
    pub fn append(&mut self, bytes: &[u8]) {
        self.ensure_writable(bytes.len());
        self.storage[self.write..self.write + bytes.len()].copy_from_slice(bytes);
        self.write += bytes.len();
    }

    /// The unread range, without copying.
    pub fn readable(&self) -> &[u8] {
        &self.storage[self.read..self.write]
    }

    pub fn readable_len(&self) -> usize {
        self.write - self.read
    }

    /// Capacity left past the write cursor.
    pub fn writable_len(&self) -> usize {
        self.storage.len() - self.write
    }

    /// Advance the read cursor by `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > readable_len()`.
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.readable_len(), "consume past write cursor");
        self.read += n;
    }

    /// Zero both cursors; capacity is retained.
    pub fn reset(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    /// Exchange storage and both cursors with `other` in O(1). No byte copy.
    pub fn swap_with(&mut self, other: &mut ByteBuffer) {
        std::mem::swap(&mut self.storage, &mut other.storage);
        std::mem::swap(&mut self.read, &mut other.read);
        std::mem::swap(&mut self.write, &mut other.write);
    }

    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Grow until at least `len` bytes fit past the write cursor: double while
    /// under the threshold, then one increment at a time.
    fn ensure_writable(&mut self, len: usize) {
        while self.writable_len() < len {
            let new_capacity = if self.storage.len() < THRESHOLD_BUFFER_SIZE {
                self.storage.len() * 2
            } else {
                self.storage.len() + INCREMENT_BUFFER_SIZE
            };
            self.storage.resize(new_capacity, 0);
        }
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}
