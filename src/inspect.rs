use std::io::{self, Write};

use bstr::BStr;

use bytestack::ByteStack;

/// Longest payload prefix shown in a listing line
const PREVIEW_BYTES: usize = 32;

/// Emit one line per record: index, size, and a bounded payload preview
///
/// The preview is rendered through `BStr`, so arbitrary binary payloads stay
/// printable.
pub fn list_records<W: Write>(writer: &mut W, stack: &ByteStack) -> io::Result<()> {
    for (index, record) in stack.records().enumerate() {
        let preview_len = record.size().min(PREVIEW_BYTES);
        let preview = BStr::new(&record.payload()[..preview_len]);
        let ellipsis = if record.size() > PREVIEW_BYTES { ".." } else { "" };
        writeln!(
            writer,
            "{:>6}  {:>10}  {:?}{}",
            index,
            record.size(),
            preview,
            ellipsis
        )?;
    }
    Ok(())
}

/// Emit the aggregate totals
pub fn print_stats<W: Write>(writer: &mut W, stack: &ByteStack) -> io::Result<()> {
    writeln!(
        writer,
        "total size: {} bytes, records: {}",
        stack.size(),
        stack.len()
    )
}
