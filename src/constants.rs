pub const LABEL_WIDTH: usize = 15;
pub const INSTRUCTION_WIDTH: usize = 10;
pub const OPERANDS_WIDTH: usize = 30;

pub const COMMENT_MARKER: char = ';';
pub const LABEL_MARKER: char = ':';
pub const OPERAND_SEPARATOR: char = ',';

pub const OUTPUT_PREFIX: &str = "formatted_";

/// The colon in these three names interferes with label detection. A fixed
/// denylist of exact tokens, not a general escaping rule.
pub const COLON_DENYLIST: [&str; 3] = ["TICKEDG:", "TICKIE:", "TICKACK:"];
