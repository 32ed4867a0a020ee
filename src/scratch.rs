//! Fixed-capacity formatting buffer
//!
//! Formatted appends render through a bounded scratch buffer: output beyond
//! the capacity is dropped, not reported as an error. One byte of the
//! capacity is reserved for a terminator, so at most `SCRATCH_CAPACITY - 1`
//! content bytes are kept. Truncation happens at byte granularity; the
//! result is treated as raw bytes by the caller, so a split multi-byte
//! character is acceptable.

use std::fmt;

/// Capacity of the formatting scratch buffer in bytes, terminator included
pub const SCRATCH_CAPACITY: usize = 1024;

/// Longest content a `Scratch` can hold
pub const SCRATCH_MAX_CONTENT: usize = SCRATCH_CAPACITY - 1;

/// Bounded byte buffer implementing `fmt::Write` with silent truncation
pub struct Scratch {
    buf: [u8; SCRATCH_CAPACITY],
    len: usize,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            buf: [0; SCRATCH_CAPACITY],
            len: 0,
        }
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for Scratch {
    /// Copy as much of `s` as fits; never errors
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = SCRATCH_MAX_CONTENT - self.len;
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}
