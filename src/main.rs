use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use s08fmt::{driver, instruction_set::INSTRUCTION_SET};

/// Reformats HCS08 assembly source into aligned columns.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The assembly source file to reformat.
    input: PathBuf,

    /// Where to write the formatted output. Defaults to `formatted_<input>`
    /// beside the input file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enables debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let output = args
        .output
        .unwrap_or_else(|| driver::default_output_path(&args.input));
    driver::reformat_file(&args.input, &output, &INSTRUCTION_SET)
}
