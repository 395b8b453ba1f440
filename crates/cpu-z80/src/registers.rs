//! Z80 register set.

use std::fmt;

use crate::flags::Flags;

/// Z80 registers snapshot.
///
/// The 8-bit halves are stored individually; pair accessors combine them
/// high byte first, so `af()` is `A << 8 | F`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    // Main registers
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    // Alternate registers, swapped in by EX AF,AF' and EXX
    pub af_alt: u16,
    pub bc_alt: u16,
    pub de_alt: u16,
    pub hl_alt: u16,

    // Index registers
    pub ix: u16,
    pub iy: u16,

    // Other registers
    pub sp: u16,
    pub pc: u16,
    pub i: u8,
    pub r: u8,

    // Interrupt state
    pub iff1: bool,
    pub iff2: bool,
    pub im: u8,
}

impl Registers {
    /// Get AF register pair.
    #[must_use]
    pub const fn af(&self) -> u16 {
        (self.a as u16) << 8 | self.f.bits() as u16
    }

    /// Get BC register pair.
    #[must_use]
    pub const fn bc(&self) -> u16 {
        (self.b as u16) << 8 | self.c as u16
    }

    /// Get DE register pair.
    #[must_use]
    pub const fn de(&self) -> u16 {
        (self.d as u16) << 8 | self.e as u16
    }

    /// Get HL register pair.
    #[must_use]
    pub const fn hl(&self) -> u16 {
        (self.h as u16) << 8 | self.l as u16
    }

    /// Set AF register pair. All eight flag bits are taken as given.
    pub fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.f = Flags::from_bits_retain(value as u8);
    }

    /// Set BC register pair.
    pub fn set_bc(&mut self, value: u16) {
        self.b = (value >> 8) as u8;
        self.c = value as u8;
    }

    /// Set DE register pair.
    pub fn set_de(&mut self, value: u16) {
        self.d = (value >> 8) as u8;
        self.e = value as u8;
    }

    /// Set HL register pair.
    pub fn set_hl(&mut self, value: u16) {
        self.h = (value >> 8) as u8;
        self.l = value as u8;
    }

    /// Get register by 3-bit encoding (bits 5-3 or 2-0 of an opcode).
    ///
    /// Code 6 names the memory operand `(HL)`, which is not a register.
    pub(crate) fn reg8(&self, r: u8) -> u8 {
        match r & 7 {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            7 => self.a,
            _ => unreachable!("(HL) is a memory operand"),
        }
    }

    /// Set register by 3-bit encoding.
    pub(crate) fn set_reg8(&mut self, r: u8, value: u8) {
        match r & 7 {
            0 => self.b = value,
            1 => self.c = value,
            2 => self.d = value,
            3 => self.e = value,
            4 => self.h = value,
            5 => self.l = value,
            7 => self.a = value,
            _ => unreachable!("(HL) is a memory operand"),
        }
    }
}

/// One-line register dump: every 16-bit register in hex, then the flags.
impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "af ${:04x} bc ${:04x} de ${:04x} hl ${:04x} ",
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
        )?;
        write!(
            f,
            "ix ${:04x} iy ${:04x} pc ${:04x} sp ${:04x} f {}",
            self.ix,
            self.iy,
            self.pc,
            self.sp,
            self.f.letters(),
        )
    }
}
