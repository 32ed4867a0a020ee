use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bytestack",
    about = "Concatenate inputs through a byte-record stack"
)]
pub struct Args {
    /// Treat each input line as one record instead of each whole file
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Use NUL as line delimiter
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print a per-record listing to stderr
    #[arg(long)]
    pub list: bool,

    /// Print total size and record count to stderr
    #[arg(long)]
    pub stats: bool,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the record delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated {
            0u8
        } else {
            b'\n'
        }
    }
}
