//! Instruction semantics.
//!
//! Every descriptor carries a `Handler`. A handler performs the
//! instruction's register, flag and bus effects and returns a `Flow` that
//! tells the stepper how to move the program counter and which cycle count
//! to charge.

pub(crate) mod arith;
pub(crate) mod control;
pub(crate) mod extended;
pub(crate) mod load;

use emu_core::IoBus;

use crate::flags::Flags;
use crate::opcodes::Page;
use crate::registers::Registers;

/// Semantics of one opcode.
pub(crate) type Handler = fn(&mut Exec<'_>) -> Flow;

/// How an instruction left the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Fall through; charge the descriptor's cycles.
    Next,
    /// Fall through on a failed condition; charge the not-taken cycles.
    Skip,
    /// Transfer control; charge the descriptor's cycles.
    Jump(u16),
    /// Stop on HALT; charge the cycles and leave PC on the opcode.
    Halt,
}

/// The register standing in for HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Index {
    Hl,
    Ix,
    Iy,
}

impl Index {
    pub(crate) fn for_page(page: Page) -> Self {
        match page {
            Page::Dd => Self::Ix,
            Page::Fd => Self::Iy,
            Page::Base | Page::Ed => Self::Hl,
        }
    }
}

/// Execution context handed to a handler.
pub(crate) struct Exec<'a> {
    pub regs: &'a mut Registers,
    pub bus: &'a mut dyn IoBus,
    /// Final opcode byte (after any prefix).
    pub opcode: u8,
    /// Address of the first byte of the instruction.
    pub at: u16,
    /// Address of the first byte after the opcode bytes.
    pub operands: u16,
    pub index: Index,
    pub len: u8,
}

impl Exec<'_> {
    /// Opcode bits 5-3: destination register, ALU operation or condition.
    pub fn y(&self) -> u8 {
        (self.opcode >> 3) & 7
    }

    /// Opcode bits 2-0: source register.
    pub fn z(&self) -> u8 {
        self.opcode & 7
    }

    /// Opcode bits 5-4: register pair.
    pub fn p(&self) -> u8 {
        (self.opcode >> 4) & 3
    }

    /// Read the operand byte at `offset` past the opcode.
    pub fn byte(&mut self, offset: u16) -> u8 {
        self.bus.read(self.operands.wrapping_add(offset))
    }

    /// 8-bit immediate. On the index pages it follows the displacement.
    pub fn imm8(&mut self) -> u8 {
        let offset = u16::from(self.index != Index::Hl);
        self.byte(offset)
    }

    /// 16-bit little-endian immediate.
    pub fn imm16(&mut self) -> u16 {
        let lo = self.byte(0);
        let hi = self.byte(1);
        u16::from_le_bytes([lo, hi])
    }

    /// Address of the next instruction.
    pub fn next_pc(&self) -> u16 {
        self.at.wrapping_add(u16::from(self.len))
    }

    pub fn flags(&mut self) -> &mut Flags {
        &mut self.regs.f
    }

    /// HL, IX or IY depending on the page.
    pub fn hl(&self) -> u16 {
        match self.index {
            Index::Hl => self.regs.hl(),
            Index::Ix => self.regs.ix,
            Index::Iy => self.regs.iy,
        }
    }

    pub fn set_hl(&mut self, value: u16) {
        match self.index {
            Index::Hl => self.regs.set_hl(value),
            Index::Ix => self.regs.ix = value,
            Index::Iy => self.regs.iy = value,
        }
    }

    /// Address of the memory operand: (HL), or (IX+d) / (IY+d).
    pub fn mem_addr(&mut self) -> u16 {
        if self.index == Index::Hl {
            return self.regs.hl();
        }
        let d = self.byte(0) as i8;
        self.hl().wrapping_add_signed(i16::from(d))
    }

    /// Read an 8-bit operand by register code; code 6 is memory.
    pub fn r8(&mut self, code: u8) -> u8 {
        if code & 7 == 6 {
            let addr = self.mem_addr();
            self.bus.read(addr)
        } else {
            self.regs.reg8(code)
        }
    }

    /// Write an 8-bit operand by register code; code 6 is memory.
    pub fn set_r8(&mut self, code: u8, value: u8) {
        if code & 7 == 6 {
            let addr = self.mem_addr();
            self.bus.write(addr, value);
        } else {
            self.regs.set_reg8(code, value);
        }
    }

    /// Read-modify-write an 8-bit operand, resolving a memory address once.
    pub fn modify_r8(&mut self, code: u8, op: fn(&mut Flags, u8) -> u8) {
        if code & 7 == 6 {
            let addr = self.mem_addr();
            let value = self.bus.read(addr);
            let result = op(&mut self.regs.f, value);
            self.bus.write(addr, result);
        } else {
            let value = self.regs.reg8(code);
            let result = op(&mut self.regs.f, value);
            self.regs.set_reg8(code, result);
        }
    }

    /// Register pair by 2-bit code: BC, DE, HL (or index), SP.
    pub fn rp(&self, p: u8) -> u16 {
        match p & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.hl(),
            _ => self.regs.sp,
        }
    }

    pub fn set_rp(&mut self, p: u8, value: u16) {
        match p & 3 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Register pair for PUSH/POP, where code 3 is AF.
    pub fn rp_af(&self, p: u8) -> u16 {
        if p & 3 == 3 {
            self.regs.af()
        } else {
            self.rp(p)
        }
    }

    pub fn set_rp_af(&mut self, p: u8, value: u16) {
        if p & 3 == 3 {
            self.regs.set_af(value);
        } else {
            self.set_rp(p, value);
        }
    }

    pub fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.bus.read(addr);
        let hi = self.bus.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.bus.write(addr, lo);
        self.bus.write(addr.wrapping_add(1), hi);
    }

    /// SP-1, write high byte, SP-1, write low byte.
    pub fn push(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write(self.regs.sp, lo);
    }

    /// Read low byte at SP, SP+1, read high byte, SP+1.
    pub fn pop(&mut self) -> u16 {
        let lo = self.bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.bus.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
