use s08fmt::{
    formatter::format,
    instruction_set::{INSTRUCTION_SET, InstructionSet},
    lexer::decompose,
};

#[test]
fn test_comment_only_line_passes_through() {
    let record = decompose("; a note");
    assert_eq!(format(record, &INSTRUCTION_SET), "; a note");
}

#[test]
fn test_whitespace_only_line_formats_to_empty() {
    let record = decompose("   \t  ");
    assert_eq!(format(record, &INSTRUCTION_SET), "");
}

#[test]
fn test_canonical_column_layout() {
    let record = decompose("LOOP: LDA #$00 ; init");
    let expected = std::format!(
        "LOOP{}LDA{} #$00{} ; Load A from Memory; init",
        " ".repeat(11),
        " ".repeat(7),
        " ".repeat(26),
    );
    assert_eq!(format(record, &INSTRUCTION_SET), expected);
}

#[test]
fn test_description_runs_directly_into_user_comment() {
    // Historical quirk: no separator is injected between the looked-up
    // description and the user's own comment text.
    let record = decompose("NOP ; wait");
    let formatted = format(record, &INSTRUCTION_SET);
    assert!(formatted.ends_with("; No Operation; wait"));
}

#[test]
fn test_unknown_mnemonic_gets_empty_description() {
    let record = decompose("XYZZY $10");
    let formatted = format(record, &INSTRUCTION_SET);
    let expected = std::format!(
        "{}XYZZY{} $10{} ; ",
        " ".repeat(15),
        " ".repeat(5),
        " ".repeat(27),
    );
    assert_eq!(formatted, expected);
}

#[test]
fn test_label_only_line_still_gets_columns() {
    let record = decompose("START:");
    let formatted = format(record, &INSTRUCTION_SET);
    assert_eq!(formatted, std::format!("START{}{} {} ; ", " ".repeat(10), " ".repeat(10), " ".repeat(30)));
}

#[test]
fn test_operands_joined_with_comma_and_space() {
    let record = decompose("MOV PTAD,PTBD");
    let formatted = format(record, &INSTRUCTION_SET);
    assert!(formatted.contains("PTAD, PTBD"));
}

#[test]
fn test_padding_never_truncates() {
    let record = decompose("AVERYLONGLABELNAME123: BRCLR 7,SOMEVERYLONGPORTNAME,SOMEWHEREELSE ; spin");
    let formatted = format(record, &INSTRUCTION_SET);
    assert!(formatted.starts_with("AVERYLONGLABELNAME123BRCLR"));
    assert!(formatted.contains("7, SOMEVERYLONGPORTNAME, SOMEWHEREELSE ; Branch if Bit Clear; spin"));
}

#[test]
fn test_empty_lookup_describes_nothing() {
    let empty = InstructionSet::default();
    assert_eq!(empty.describe("LDA"), "");

    let record = decompose("LDA #$00");
    let formatted = format(record, &empty);
    assert!(formatted.ends_with(" ; "));
}

#[test]
fn test_instruction_set_exact_match_only() {
    assert_eq!(INSTRUCTION_SET.describe("LDA"), "Load A from Memory");
    assert_eq!(INSTRUCTION_SET.describe("lda"), "");
    assert_eq!(INSTRUCTION_SET.describe(""), "");
    assert!(!INSTRUCTION_SET.is_empty());
}
