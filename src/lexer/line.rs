//! # Line Value Types
//!
//! This module defines the value types flowing through the reformatter:
//! a [`SourceLine`] coming in from the driver, and the [`DecomposedLine`]
//! record the lexer produces out of it, built from an [`Instruction`] token
//! and its [`Operands`] list.
//!
//! Padded and joined text comes from explicit `render` methods on the field
//! types rather than from `Display` impls, so the column layout stays in one
//! obvious place.

use derive_getters::Getters;

use crate::constants::{INSTRUCTION_WIDTH, OPERAND_SEPARATOR, OPERANDS_WIDTH};

/// One raw line of assembly source, paired with its 0-based line number.
///
/// Ephemeral: created per input line, discarded once the line is formatted.
/// The line number is carried for diagnostics and never appears in output.
#[derive(Debug, Clone, Eq, PartialEq, Getters)]
pub struct SourceLine {
    number: usize,
    text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: String) -> Self {
        Self { number, text }
    }
}

/// The raw mnemonic token of one instruction.
///
/// The token is kept verbatim; its human-readable description lives in the
/// external instruction set and is only paired with the token at render time.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Instruction {
    token: String,
}

impl Instruction {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// The token left-justified into its column. Never truncates: a token
    /// longer than the column is emitted at full length.
    pub fn render(&self) -> String {
        format!("{:<width$}", self.token, width = INSTRUCTION_WIDTH)
    }
}

/// The ordered operand list modifying one instruction.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Operands(Vec<String>);

impl Operands {
    /// Splits raw operand text on commas, trimming each piece and dropping
    /// the pieces that trim away entirely. Left-to-right order is preserved.
    pub fn parse(raw_input: &str) -> Self {
        Self(
            raw_input
                .split(OPERAND_SEPARATOR)
                .map(str::trim)
                .filter(|op| !op.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self) -> String {
        self.0.join(", ")
    }

    /// The comma-and-space joined list, left-justified into its column.
    pub fn render(&self) -> String {
        format!("{:<width$}", self.join(), width = OPERANDS_WIDTH)
    }
}

/// The four-field record produced by [`decompose`](crate::lexer::decompose).
///
/// Field boundaries are mutually exclusive and exhaustive over the cleaned
/// line: label, instruction, operands and comment together carry everything
/// the normalized input carried.
#[derive(Debug, Clone, Eq, PartialEq, Getters)]
pub struct DecomposedLine {
    label: String,
    instruction: Instruction,
    operands: Operands,
    comment: String,
}

impl DecomposedLine {
    pub fn new(
        label: String,
        instruction: Instruction,
        operands: Operands,
        comment: String,
    ) -> Self {
        Self {
            label,
            instruction,
            operands,
            comment,
        }
    }
}
