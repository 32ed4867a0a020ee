use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;

/// Write the finalized buffer, excluding the trailing terminator byte
pub fn write_final<W: Write>(writer: W, finalized: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let payload = &finalized[..finalized.len().saturating_sub(1)];
    writer.write_all(payload)?;
    writer.flush()
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
