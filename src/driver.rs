//! # Driver Module
//!
//! The file-level glue around the lexer and formatter. The driver:
//! - Reads the input file line by line
//! - Decomposes and formats each line independently, with no cross-line state
//! - Appends the line terminator and writes to the output file
//!
//! All I/O failures surface here; the lexer and formatter themselves never
//! fail.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    constants::OUTPUT_PREFIX,
    formatter,
    instruction_set::InstructionSet,
    lexer::{SourceLine, decompose},
};

/// The default output path: `formatted_<file name>` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{OUTPUT_PREFIX}{name}"))
}

/// Decomposes then formats one source line.
pub fn reformat_line(source: &SourceLine, descriptions: &InstructionSet) -> String {
    let record = decompose(source.text());
    debug!("Line {}: {:?}", source.number(), record);
    formatter::format(record, descriptions)
}

/// Reformats every line of `input` into `output`, one output line per input
/// line.
#[tracing::instrument(skip(descriptions))]
pub fn reformat_file(input: &Path, output: &Path, descriptions: &InstructionSet) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).context(format!("When opening the file {}.", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).context(format!("When creating the file {}.", output.display()))?,
    );

    let mut count = 0usize;
    for (number, line) in reader.lines().enumerate() {
        let line =
            line.context(format!("When reading line {number} of {}.", input.display()))?;
        let source = SourceLine::new(number, line);
        writeln!(writer, "{}", reformat_line(&source, descriptions))
            .context(format!("When writing to the file {}.", output.display()))?;
        count += 1;
    }

    writer
        .flush()
        .context(format!("When flushing the file {}.", output.display()))?;
    info!(
        "Reformatted {count} lines of {} into {}",
        input.display(),
        output.display()
    );
    Ok(())
}
