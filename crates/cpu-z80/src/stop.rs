//! Reasons a step ends without completing normally.

use thiserror::Error;

/// Terminal signal from `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Stop {
    /// A HALT instruction executed. PC still points at it.
    #[error("halt")]
    Halt,
    /// No descriptor for `opcode` at `address`. For a prefixed instruction
    /// `opcode` is the byte after the prefix; `address` is always where the
    /// instruction starts.
    #[error("invalid instruction: {opcode:#04x} @ {address:#06x}")]
    InvalidInstruction { opcode: u8, address: u16 },
}
