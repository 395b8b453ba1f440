//! Table-driven disassembler.
//!
//! Shares the descriptor pages with the dispatcher and only reads the bus.

use std::fmt;

use emu_core::Bus;

use crate::dialect::Dialect;
use crate::opcodes::{self, Operand};

/// One disassembled instruction, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    pub mnemonic: &'static str,
    /// Destination operand text; empty if there is none.
    pub dst: String,
    /// Source operand text; empty if there is none.
    pub src: String,
    /// Instruction length in bytes.
    pub len: u8,
}

impl Disassembly {
    fn invalid() -> Self {
        Self {
            mnemonic: "INVALID",
            dst: String::new(),
            src: String::new(),
            len: 1,
        }
    }

    /// Operands joined by a comma.
    #[must_use]
    pub fn operands(&self) -> String {
        match (self.dst.is_empty(), self.src.is_empty()) {
            (false, false) => format!("{},{}", self.dst, self.src),
            (false, true) => self.dst.clone(),
            (true, _) => self.src.clone(),
        }
    }
}

/// Mnemonic padded to six columns, then the operands padded to four.
impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6}{:<4}", self.mnemonic, self.operands())
    }
}

/// Disassemble the instruction at `address`.
///
/// Bytes with no descriptor in `dialect` come back as `INVALID` with a
/// length of one, whatever follows them.
pub fn disassemble<B: Bus + ?Sized>(dialect: Dialect, bus: &mut B, address: u16) -> Disassembly {
    let Ok(decoded) = opcodes::decode(dialect, bus, address) else {
        return Disassembly::invalid();
    };
    let op = decoded.op;
    let Some(syntax) = op.syntax(dialect) else {
        return Disassembly::invalid();
    };

    let mut text = Render {
        bus,
        dialect,
        address,
        operands: address.wrapping_add(u16::from(decoded.width)),
        len: op.len,
        // An immediate after (ix+d) sits past the displacement byte.
        imm_offset: u16::from(op.dst == Operand::Indexed || op.src == Operand::Indexed),
    };
    Disassembly {
        mnemonic: syntax.mnemonic,
        dst: text.operand(op.dst, syntax.dst),
        src: text.operand(op.src, syntax.src),
        len: op.len,
    }
}

struct Render<'a, B: Bus + ?Sized> {
    bus: &'a mut B,
    dialect: Dialect,
    address: u16,
    operands: u16,
    len: u8,
    imm_offset: u16,
}

impl<B: Bus + ?Sized> Render<'_, B> {
    fn byte(&mut self, offset: u16) -> u8 {
        self.bus.read(self.operands.wrapping_add(offset))
    }

    fn word(&mut self) -> u16 {
        u16::from_le_bytes([self.byte(0), self.byte(1)])
    }

    fn operand(&mut self, kind: Operand, name: &str) -> String {
        if kind.is_named() && name.is_empty() {
            return String::new();
        }
        match kind {
            Operand::None => String::new(),
            Operand::Register | Operand::Condition => name.to_owned(),
            Operand::RegisterIndirect => match self.dialect {
                Dialect::Z80 => format!("({name})"),
                Dialect::I8080 => name.to_owned(),
            },
            Operand::Immediate => format!("${:02x}", self.byte(self.imm_offset)),
            Operand::ImmediateExtended => format!("${:04x}", self.word()),
            Operand::Indirect => format!("(${:02x})", self.byte(0)),
            Operand::Extended => format!("(${:04x})", self.word()),
            Operand::Displacement => {
                let d = self.byte(0) as i8;
                let target = self
                    .address
                    .wrapping_add(u16::from(self.len))
                    .wrapping_add_signed(i16::from(d));
                format!("${target:04x}")
            }
            Operand::Indexed => {
                let d = self.byte(0) as i8;
                let sign = if d < 0 { '-' } else { '+' };
                format!("({name}{sign}${:02x})", d.unsigned_abs())
            }
        }
    }
}
