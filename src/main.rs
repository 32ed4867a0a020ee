mod cli;
mod config;
mod input;
mod inspect;
mod output;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use clap::Parser;

use bytestack::{ByteStack, Result};
use cli::Args;
use config::Config;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("bytestack: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args);

    let mut stack = ByteStack::new();

    // Accumulate from files or stdin
    if config.input_files.is_empty() {
        let stdin = io::stdin();
        accumulate_input(&mut stack, stdin.lock(), &config)?;
    } else {
        for path in &config.input_files {
            if path == "-" {
                accumulate_input(&mut stack, io::stdin().lock(), &config)?;
            } else {
                let reader = BufReader::new(File::open(path)?);
                accumulate_input(&mut stack, reader, &config)?;
            }
        }
    }

    // Listing goes to stderr before the payload is written
    if config.list {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        inspect::list_records(&mut stderr, &stack)?;
        stderr.flush()?;
    }

    let mut out = output::open_output(&config)?;
    let finalized = stack.finish();
    output::write_final(&mut out, finalized)?;

    if config.stats {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        inspect::print_stats(&mut stderr, &stack)?;
    }

    Ok(())
}

/// Grow the stack from one input: per line with --lines, else one record
///
/// An empty input contributes no record and is skipped silently.
fn accumulate_input<R: BufRead>(
    stack: &mut ByteStack,
    mut reader: R,
    config: &Config,
) -> Result<()> {
    if config.lines {
        input::accumulate_records(stack, reader, config.record_delimiter)
    } else {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        if !data.is_empty() {
            stack.grow(&data)?;
        }
        Ok(())
    }
}
