//! # Instruction Set
//!
//! The static HCS08 mnemonic table. Keys are exact, case-sensitive mnemonic
//! text; values are one-line human-readable descriptions echoed into the
//! formatted output. The table is built once before any formatting and never
//! mutated, so it is safe to share across threads if a caller parallelizes
//! per line.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Read-only mapping from mnemonic to description.
#[derive(Debug, Default)]
pub struct InstructionSet {
    descriptions: HashMap<&'static str, &'static str>,
}

impl InstructionSet {
    /// The description for `token`, or the empty string when the token is
    /// unknown or itself empty.
    pub fn describe(&self, token: &str) -> &str {
        self.descriptions.get(token).copied().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

/// The HCS08 instruction set, built on first access.
pub static INSTRUCTION_SET: Lazy<InstructionSet> = Lazy::new(|| InstructionSet {
    descriptions: HashMap::from(MNEMONIC_DESCRIPTIONS),
});

const MNEMONIC_DESCRIPTIONS: [(&str, &str); 120] = [
    ("ADC", "Add with Carry"),
    ("ADD", "Add without Carry"),
    ("AIS", "Add Immediate to Stack Pointer"),
    ("AIX", "Add Immediate to Index Register"),
    ("AND", "Logical AND"),
    ("ASL", "Arithmetic Shift Left"),
    ("ASLA", "Arithmetic Shift Left A"),
    ("ASLX", "Arithmetic Shift Left X"),
    ("ASR", "Arithmetic Shift Right"),
    ("ASRA", "Arithmetic Shift Right A"),
    ("ASRX", "Arithmetic Shift Right X"),
    ("BCC", "Branch if Carry Clear"),
    ("BCLR", "Clear Bit in Memory"),
    ("BCS", "Branch if Carry Set"),
    ("BEQ", "Branch if Equal"),
    ("BGE", "Branch if Greater or Equal"),
    ("BGND", "Enter Background Debug Mode"),
    ("BGT", "Branch if Greater Than"),
    ("BHCC", "Branch if Half Carry Clear"),
    ("BHCS", "Branch if Half Carry Set"),
    ("BHI", "Branch if Higher"),
    ("BHS", "Branch if Higher or Same"),
    ("BIH", "Branch if IRQ Pin High"),
    ("BIL", "Branch if IRQ Pin Low"),
    ("BIT", "Bit Test"),
    ("BLE", "Branch if Less or Equal"),
    ("BLO", "Branch if Lower"),
    ("BLS", "Branch if Lower or Same"),
    ("BLT", "Branch if Less Than"),
    ("BMC", "Branch if Interrupt Mask Clear"),
    ("BMI", "Branch if Minus"),
    ("BMS", "Branch if Interrupt Mask Set"),
    ("BNE", "Branch if Not Equal"),
    ("BPL", "Branch if Plus"),
    ("BRA", "Branch Always"),
    ("BRCLR", "Branch if Bit Clear"),
    ("BRN", "Branch Never"),
    ("BRSET", "Branch if Bit Set"),
    ("BSET", "Set Bit in Memory"),
    ("BSR", "Branch to Subroutine"),
    ("CBEQ", "Compare and Branch if Equal"),
    ("CBEQA", "Compare A and Branch if Equal"),
    ("CBEQX", "Compare X and Branch if Equal"),
    ("CLC", "Clear Carry Bit"),
    ("CLI", "Clear Interrupt Mask"),
    ("CLR", "Clear Memory"),
    ("CLRA", "Clear A"),
    ("CLRH", "Clear H"),
    ("CLRX", "Clear X"),
    ("CMP", "Compare A with Memory"),
    ("COM", "Complement Memory"),
    ("COMA", "Complement A"),
    ("COMX", "Complement X"),
    ("CPHX", "Compare H:X with Memory"),
    ("CPX", "Compare X with Memory"),
    ("DAA", "Decimal Adjust A"),
    ("DBNZ", "Decrement and Branch if Not Zero"),
    ("DBNZA", "Decrement A and Branch if Not Zero"),
    ("DBNZX", "Decrement X and Branch if Not Zero"),
    ("DEC", "Decrement Memory"),
    ("DECA", "Decrement A"),
    ("DECX", "Decrement X"),
    ("DIV", "Divide"),
    ("EOR", "Exclusive OR"),
    ("INC", "Increment Memory"),
    ("INCA", "Increment A"),
    ("INCX", "Increment X"),
    ("JMP", "Jump"),
    ("JSR", "Jump to Subroutine"),
    ("LDA", "Load A from Memory"),
    ("LDHX", "Load H:X from Memory"),
    ("LDX", "Load X from Memory"),
    ("LSL", "Logical Shift Left"),
    ("LSLA", "Logical Shift Left A"),
    ("LSLX", "Logical Shift Left X"),
    ("LSR", "Logical Shift Right"),
    ("LSRA", "Logical Shift Right A"),
    ("LSRX", "Logical Shift Right X"),
    ("MOV", "Move Memory to Memory"),
    ("MUL", "Unsigned Multiply"),
    ("NEG", "Negate Memory"),
    ("NEGA", "Negate A"),
    ("NEGX", "Negate X"),
    ("NOP", "No Operation"),
    ("NSA", "Nibble Swap A"),
    ("ORA", "Inclusive OR A with Memory"),
    ("PSHA", "Push A onto Stack"),
    ("PSHH", "Push H onto Stack"),
    ("PSHX", "Push X onto Stack"),
    ("PULA", "Pull A from Stack"),
    ("PULH", "Pull H from Stack"),
    ("PULX", "Pull X from Stack"),
    ("ROL", "Rotate Left through Carry"),
    ("ROLA", "Rotate A Left through Carry"),
    ("ROLX", "Rotate X Left through Carry"),
    ("ROR", "Rotate Right through Carry"),
    ("RORA", "Rotate A Right through Carry"),
    ("RORX", "Rotate X Right through Carry"),
    ("RSP", "Reset Stack Pointer"),
    ("RTI", "Return from Interrupt"),
    ("RTS", "Return from Subroutine"),
    ("SBC", "Subtract with Carry"),
    ("SEC", "Set Carry Bit"),
    ("SEI", "Set Interrupt Mask"),
    ("STA", "Store A in Memory"),
    ("STHX", "Store H:X in Memory"),
    ("STOP", "Enable IRQ and Stop Oscillator"),
    ("STX", "Store X in Memory"),
    ("SUB", "Subtract"),
    ("SWI", "Software Interrupt"),
    ("TAP", "Transfer A to CCR"),
    ("TAX", "Transfer A to X"),
    ("TPA", "Transfer CCR to A"),
    ("TST", "Test Memory for Negative or Zero"),
    ("TSTA", "Test A for Negative or Zero"),
    ("TSTX", "Test X for Negative or Zero"),
    ("TSX", "Transfer Stack Pointer to H:X"),
    ("TXA", "Transfer X to A"),
    ("TXS", "Transfer H:X to Stack Pointer"),
    ("WAIT", "Enable Interrupts and Wait"),
];
