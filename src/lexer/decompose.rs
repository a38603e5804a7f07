use crate::{
    constants::{COLON_DENYLIST, COMMENT_MARKER, LABEL_MARKER},
    lexer::line::{DecomposedLine, Instruction, Operands},
};

/// Splits one raw source line into its four syntactic fields.
///
/// Total over all inputs: every string, the empty string included, yields
/// some (possibly all-empty) record. Ambiguity is resolved by the fixed
/// stage order below; there is no fallback.
///
/// Stages, each operating on the previous one's remainder:
/// 1. normalization (tabs, denylisted colons)
/// 2. comment extraction at the first `;`
/// 3. label extraction at the first `:`
/// 4. instruction/operand split at the first space
/// 5. operand tokenization on `,`
pub fn decompose(raw_line: &str) -> DecomposedLine {
    let clean_line = normalize(raw_line);
    let (comment, rest) = separate_comment(&clean_line);
    let (label, rest) = separate_label(rest);
    let (instruction, operands) = separate_operands(rest);
    DecomposedLine::new(label, instruction, operands, comment)
}

/// Cleans out unwanted tabs and colons.
///
/// Every horizontal tab becomes a single space. The trailing colon on the
/// denylisted names is stripped wherever the exact token occurs, since it
/// would otherwise be mistaken for a label terminator.
fn normalize(raw_line: &str) -> String {
    let mut clean_line = raw_line.replace('\t', " ");
    for token in COLON_DENYLIST {
        clean_line = clean_line.replace(token, token.trim_end_matches(LABEL_MARKER));
    }
    clean_line
}

/// Separates any comment (beginning with a semicolon) from the rest of the
/// line. The comment keeps its marker; the remainder is trimmed.
fn separate_comment(clean_line: &str) -> (String, String) {
    match clean_line.find(COMMENT_MARKER) {
        Some(p) => (
            clean_line[p..].trim().to_string(),
            clean_line[..p].trim().to_string(),
        ),
        None => (String::new(), clean_line.trim().to_string()),
    }
}

/// Pulls a leading label out of the line if one is present. Everything
/// before the first colon is the label, untrimmed.
fn separate_label(wip_line: String) -> (String, String) {
    match wip_line.find(LABEL_MARKER) {
        Some(q) => (
            wip_line[..q].to_string(),
            wip_line[q + 1..].trim().to_string(),
        ),
        None => (String::new(), wip_line),
    }
}

/// Separates the instruction token from its comma-delimited operand list.
///
/// An empty token forces an empty operand field: "no instruction at all"
/// (comment-only or label-only line) is distinct from "instruction with no
/// operands".
fn separate_operands(wip_line: String) -> (Instruction, Operands) {
    let (token, raw_operands) = match wip_line.find(' ') {
        Some(r) => (&wip_line[..r], &wip_line[r + 1..]),
        None => (wip_line.as_str(), ""),
    };

    let instruction = Instruction::new(token);
    let operands = if instruction.is_empty() {
        Operands::default()
    } else {
        Operands::parse(raw_operands)
    };
    (instruction, operands)
}
