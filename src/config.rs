use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub lines: bool,
    pub list: bool,
    pub stats: bool,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            lines: args.lines,
            list: args.list,
            stats: args.stats,
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        }
    }
}
