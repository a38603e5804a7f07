mod decompose;
mod line;

pub use decompose::decompose;
pub use line::{DecomposedLine, Instruction, Operands, SourceLine};
