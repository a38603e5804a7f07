//! # s08fmt Library
//!
//! This crate provides the core modules for reformatting HCS08 assembly
//! source into a column-aligned canonical layout. It exposes the line lexer,
//! the column formatter, the static instruction set, and the file driver,
//! while keeping layout constants encapsulated.

pub mod driver;
pub mod formatter;
pub mod instruction_set;
pub mod lexer;

mod constants;
