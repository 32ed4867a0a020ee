use std::io::{self, BufRead};

use bytestack::{ByteStack, Result};

/// Reads records from input, split on the specified delimiter
///
/// The delimiter stays part of the record, so the finalized buffer
/// reproduces the input byte-for-byte.
pub struct RecordReader<R> {
    reader: R,
    delimiter: u8,
    buffer: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            buffer: Vec::new(),
        }
    }

    /// Read the next record, returning None at EOF
    pub fn read_record(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(self.delimiter, &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        Ok(Some(&self.buffer))
    }
}

/// Feed every delimited record from a reader into the stack
pub fn accumulate_records<R: BufRead>(
    stack: &mut ByteStack,
    reader: R,
    delimiter: u8,
) -> Result<()> {
    let mut rec_reader = RecordReader::new(reader, delimiter);

    while let Some(record) = rec_reader.read_record()? {
        stack.grow(record)?;
    }

    Ok(())
}
