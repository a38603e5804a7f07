//! # Formatter Module
//!
//! Renders a [`DecomposedLine`] into the canonical column layout: label to
//! width 15, instruction to width 10, operands to width 30, then the mnemonic
//! description followed by the original comment. Widths are minimums, never
//! truncation.

use crate::{
    constants::LABEL_WIDTH,
    instruction_set::InstructionSet,
    lexer::DecomposedLine,
};

/// Renders one decomposed line, consuming it.
///
/// A record with no label, instruction or operands is a comment-only or
/// blank line and comes back as its comment field verbatim. Otherwise the
/// tail of the output is `"; "` + description + comment; the user comment
/// runs on directly after the description with no injected separator, which
/// matches the historical output of this tool.
pub fn format(record: DecomposedLine, descriptions: &InstructionSet) -> String {
    if record.label().is_empty() && record.instruction().is_empty() && record.operands().is_empty()
    {
        return record.comment().clone();
    }

    format!(
        "{:<width$}{} {} ; {}{}",
        record.label(),
        record.instruction().render(),
        record.operands().render(),
        descriptions.describe(record.instruction().token()),
        record.comment(),
        width = LABEL_WIDTH,
    )
}
