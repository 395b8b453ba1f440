//! Opcode descriptor tables.
//!
//! Four static pages (base, DD, ED, FD) describe every instruction the core
//! knows: display syntax per dialect, operand kinds, byte length, nominal
//! cycle counts and the handler that carries out its effects. The
//! dispatcher and the disassembler both read from these tables, so an
//! instruction can only be executed if it can also be disassembled.

mod base;
mod extended;
mod indexed;

use std::fmt;

use emu_core::Bus;

use crate::dialect::Dialect;
use crate::dispatch::Handler;

/// How an operand is encoded and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    None,
    /// A named register, condition-free vector or mode number, printed as
    /// its name.
    Register,
    /// Memory addressed by a register pair: `(hl)`, or bare `m` in 8080
    /// syntax.
    RegisterIndirect,
    /// 8-bit immediate: `$nn`.
    Immediate,
    /// 16-bit little-endian immediate: `$nnnn`.
    ImmediateExtended,
    /// 8-bit I/O port: `($nn)`.
    Indirect,
    /// 16-bit absolute memory address: `($nnnn)`.
    Extended,
    /// Signed 8-bit PC-relative offset, printed as the resolved target.
    Displacement,
    /// Branch condition, printed as its name.
    Condition,
    /// Index register plus signed displacement: `(ix+$dd)`.
    Indexed,
}

impl Operand {
    /// True for operands whose text comes from the syntax name rather than
    /// from instruction bytes. An empty name hides such an operand.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(
            self,
            Self::Register | Self::RegisterIndirect | Self::Condition | Self::Indexed
        )
    }
}

/// Mnemonic and operand names in one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub mnemonic: &'static str,
    pub dst: &'static str,
    pub src: &'static str,
}

/// Immutable description of one opcode.
#[derive(Clone, Copy)]
pub struct Opcode {
    /// Zilog syntax.
    pub z80: Syntax,
    /// Intel syntax, or `None` if the 8080 lacks this instruction.
    pub i8080: Option<Syntax>,
    pub dst: Operand,
    pub src: Operand,
    /// Total instruction length in bytes, prefix included.
    pub len: u8,
    /// Nominal cycles; for conditional instructions, the taken path.
    pub cycles: u8,
    /// Nominal cycles when a condition fails or a block repeat ends.
    pub cycles_not_taken: u8,
    pub(crate) exec: Handler,
}

impl Opcode {
    /// Syntax for `dialect`, if the instruction exists there.
    #[must_use]
    pub fn syntax(&self, dialect: Dialect) -> Option<&Syntax> {
        match dialect {
            Dialect::Z80 => Some(&self.z80),
            Dialect::I8080 => self.i8080.as_ref(),
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opcode")
            .field("z80", &self.z80)
            .field("i8080", &self.i8080)
            .field("dst", &self.dst)
            .field("src", &self.src)
            .field("len", &self.len)
            .field("cycles", &self.cycles)
            .field("cycles_not_taken", &self.cycles_not_taken)
            .finish_non_exhaustive()
    }
}

/// One of the four descriptor pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Base,
    Dd,
    Ed,
    Fd,
}

/// A slot in a descriptor page.
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    /// No instruction; executing or disassembling it is an error.
    Invalid,
    Op(Opcode),
    /// A lead byte whose successor is looked up in another page.
    Prefix(Page),
}

impl Entry {
    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        matches!(self, Self::Prefix(_))
    }
}

static BASE: [Entry; 256] = base::page();
static DD: [Entry; 256] = indexed::page("ix");
static ED: [Entry; 256] = extended::page();
static FD: [Entry; 256] = indexed::page("iy");

/// The descriptor table for `page`.
#[must_use]
pub fn table(page: Page) -> &'static [Entry; 256] {
    match page {
        Page::Base => &BASE,
        Page::Dd => &DD,
        Page::Ed => &ED,
        Page::Fd => &FD,
    }
}

/// Result of resolving the opcode bytes at an address.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decoded {
    pub op: &'static Opcode,
    pub page: Page,
    /// The final opcode byte, whose bit fields select registers.
    pub opcode: u8,
    /// Number of opcode bytes (1, or 2 with a prefix).
    pub width: u8,
}

/// Resolve the instruction at `address`.
///
/// On failure returns the byte with no descriptor: the first byte, or the
/// second byte of a prefixed instruction.
pub(crate) fn decode<B: Bus + ?Sized>(
    dialect: Dialect,
    bus: &mut B,
    address: u16,
) -> Result<Decoded, u8> {
    let first = bus.read(address);
    let (page, opcode, entry) = match BASE[first as usize] {
        Entry::Prefix(page) if dialect == Dialect::Z80 => {
            let second = bus.read(address.wrapping_add(1));
            (page, second, &table(page)[second as usize])
        }
        Entry::Prefix(_) => return Err(first),
        _ => (Page::Base, first, &BASE[first as usize]),
    };

    match entry {
        Entry::Op(op) if op.syntax(dialect).is_some() => Ok(Decoded {
            op,
            page,
            opcode,
            width: if page == Page::Base { 1 } else { 2 },
        }),
        _ => Err(opcode),
    }
}

/// Look up the descriptor of the instruction at `address`, following a
/// prefix byte if there is one.
pub fn lookup<B: Bus + ?Sized>(
    dialect: Dialect,
    bus: &mut B,
    address: u16,
) -> Option<&'static Opcode> {
    decode(dialect, bus, address).ok().map(|d| d.op)
}

/// Operand kind plus its name in Zilog syntax; building block for tables.
#[derive(Clone, Copy)]
struct Arg {
    kind: Operand,
    name: &'static str,
}

const NONE: Arg = arg(Operand::None, "");
const IMM: Arg = arg(Operand::Immediate, "");
const IMM16: Arg = arg(Operand::ImmediateExtended, "");
const PORT: Arg = arg(Operand::Indirect, "");
const ABS: Arg = arg(Operand::Extended, "");
const REL: Arg = arg(Operand::Displacement, "");

const fn arg(kind: Operand, name: &'static str) -> Arg {
    Arg { kind, name }
}

const fn reg(name: &'static str) -> Arg {
    arg(Operand::Register, name)
}

const fn ind(name: &'static str) -> Arg {
    arg(Operand::RegisterIndirect, name)
}

const fn cond(name: &'static str) -> Arg {
    arg(Operand::Condition, name)
}

const fn idx(name: &'static str) -> Arg {
    arg(Operand::Indexed, name)
}

/// An 8-bit register operand by opcode code; code 6 is `(hl)`.
const fn r8(code: u8) -> Arg {
    let name = R8[code as usize];
    if code == 6 { ind(name) } else { reg(name) }
}

const R8: [&str; 8] = ["b", "c", "d", "e", "h", "l", "hl", "a"];
const R8_8080: [&str; 8] = ["b", "c", "d", "e", "h", "l", "m", "a"];
const RP: [&str; 4] = ["bc", "de", "hl", "sp"];
const RP_8080: [&str; 4] = ["b", "d", "h", "sp"];
const CC: [&str; 8] = ["nz", "z", "nc", "c", "po", "pe", "p", "m"];

const fn op(
    mnemonic: &'static str,
    dst: Arg,
    src: Arg,
    len: u8,
    cycles: u8,
    exec: Handler,
) -> Opcode {
    Opcode {
        z80: Syntax {
            mnemonic,
            dst: dst.name,
            src: src.name,
        },
        i8080: None,
        dst: dst.kind,
        src: src.kind,
        len,
        cycles,
        cycles_not_taken: cycles,
        exec,
    }
}

impl Opcode {
    /// Add the Intel spelling.
    const fn intel(mut self, mnemonic: &'static str, dst: &'static str, src: &'static str) -> Self {
        self.i8080 = Some(Syntax { mnemonic, dst, src });
        self
    }

    /// Set the cost of the not-taken path.
    const fn not_taken(mut self, cycles: u8) -> Self {
        self.cycles_not_taken = cycles;
        self
    }
}
