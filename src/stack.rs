//! Growable byte-object accumulator
//!
//! A `ByteStack` collects variable-length byte objects one at a time and
//! materializes them on demand into a single contiguous, NUL-terminated
//! buffer. Appending stays cheap (one owned record per object); the
//! concatenation cost is paid only at [`ByteStack::finish`].

use std::fmt::{self, Write};

use crate::error::{BytestackError, Result};
use crate::scratch::Scratch;
use crate::store::{Record, RecordStore};

/// Accumulates byte objects and finalizes them into one contiguous buffer
///
/// Size and object count are always read through the backing store, so the
/// queries can never drift out of sync with the stored content.
pub struct ByteStack {
    store: RecordStore,
    finalized: Option<Vec<u8>>,
}

impl ByteStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            finalized: None,
        }
    }

    /// Append one byte object.
    ///
    /// Rejects an empty slice: every record must carry at least one byte.
    /// A rejected append leaves size and count untouched.
    pub fn grow(&mut self, object: &[u8]) -> Result<()> {
        if object.is_empty() {
            return Err(BytestackError::EmptyObject);
        }
        self.store.put("", object.to_vec(), false);
        Ok(())
    }

    /// Append a string as one record (no terminator included)
    pub fn grow_str(&mut self, text: &str) -> Result<()> {
        self.grow(text.as_bytes())
    }

    /// Append formatted text as one record.
    ///
    /// The output is rendered through a fixed 1024-byte scratch buffer with
    /// one byte reserved for a terminator, so at most 1023 bytes of content
    /// survive; anything beyond that is silently truncated, never an error.
    /// An empty rendering is rejected like any other empty object.
    ///
    /// ```
    /// # use bytestack::ByteStack;
    /// # let mut stack = ByteStack::new();
    /// stack.grow_fmt(format_args!("{}-{}", "id", 7))?;
    /// # Ok::<(), bytestack::BytestackError>(())
    /// ```
    pub fn grow_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut scratch = Scratch::new();
        // Scratch::write_str never errors; overflow is dropped
        let _ = scratch.write_fmt(args);
        self.grow(scratch.as_bytes())
    }

    /// Concatenate every record into one NUL-terminated buffer.
    ///
    /// The buffer holds all payloads in insertion order followed by a single
    /// 0x00 byte, so its length is `size() + 1`. Each call rebuilds the
    /// buffer and drops the previous one; the returned slice borrows from
    /// the stack and cannot outlive the next `finish` or append.
    ///
    /// Finishing with zero records is legal and yields just the terminator.
    pub fn finish(&mut self) -> &[u8] {
        self.finalized.insert(concat(&self.store)).as_slice()
    }

    /// Return the finalized buffer, building it on first use.
    ///
    /// This is a lazy cache read, not a freshness check: records appended
    /// after the last `finish` do not invalidate the cache, so the returned
    /// buffer may lag behind `size()`/`len()`. Call [`ByteStack::finish`]
    /// to force a rebuild.
    pub fn final_data(&mut self) -> &[u8] {
        self.finalized
            .get_or_insert_with(|| concat(&self.store))
            .as_slice()
    }

    /// Total bytes appended so far (terminator not included)
    pub fn size(&self) -> usize {
        self.store.total_bytes()
    }

    /// Number of successfully appended objects
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Visit the appended records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.store.iter()
    }
}

impl Default for ByteStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStack")
            .field("len", &self.store.len())
            .field("size", &self.store.total_bytes())
            .field("finalized", &self.finalized.is_some())
            .finish()
    }
}

/// Build the finalized buffer: payloads in insertion order + one NUL
fn concat(store: &RecordStore) -> Vec<u8> {
    let mut buf = Vec::with_capacity(store.total_bytes() + 1);
    for record in store.iter() {
        buf.extend_from_slice(record.payload());
    }
    buf.push(0);
    buf
}
