//! Insertion-ordered record storage with byte accounting
//!
//! The store is the backing sequence a [`crate::stack::ByteStack`] delegates
//! to: records go in one at a time and are only ever read back in insertion
//! order. Size and count are tracked here so the stack never has to keep its
//! own copies of either.

use std::fmt;

use bstr::BStr;

/// One stored unit of bytes with an optional name label
pub struct Record {
    name: String,
    payload: Vec<u8>,
}

impl Record {
    /// Name label; empty for anonymous records
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes
    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview_len = self.payload.len().min(32);
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("size", &self.payload.len())
            .field("payload", &BStr::new(&self.payload[..preview_len]))
            .finish()
    }
}

/// Append-only sequence of records in insertion order
pub struct RecordStore {
    records: Vec<Record>,
    total_bytes: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Store a record.
    ///
    /// With `overwrite` set, a record with the same name has its payload
    /// replaced in place: position and record count are unchanged, the byte
    /// total is adjusted. Otherwise the record is appended at the end.
    pub fn put(&mut self, name: &str, payload: Vec<u8>, overwrite: bool) {
        if overwrite {
            if let Some(existing) = self.records.iter_mut().find(|r| r.name == name) {
                self.total_bytes -= existing.payload.len();
                self.total_bytes += payload.len();
                existing.payload = payload;
                return;
            }
        }

        self.total_bytes += payload.len();
        self.records.push(Record {
            name: name.to_string(),
            payload,
        });
    }

    /// Visit every record exactly once, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Total bytes across all stored payloads
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Vec<u8>> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for payload in iter {
            store.put("", payload, false);
        }
        store
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("len", &self.records.len())
            .field("total_bytes", &self.total_bytes)
            .finish()
    }
}
