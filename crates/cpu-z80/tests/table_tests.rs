//! Sweeps over every descriptor page.
//!
//! The disassembler and the dispatcher share the tables, so every entry
//! must disassemble to its own length and every straight-line entry must
//! advance PC by that length and charge its nominal cycles.

use cpu_z80::opcodes::{Entry, Opcode, Page, table};
use cpu_z80::{Dialect, Stop, Z80, disassemble};
use emu_core::SimpleBus;

const PAGES: [(Page, Option<u8>); 4] = [
    (Page::Base, None),
    (Page::Dd, Some(0xDD)),
    (Page::Ed, Some(0xED)),
    (Page::Fd, Some(0xFD)),
];

/// Instructions whose next PC depends on the operands or machine state.
const CONTROL: [&str; 13] = [
    "jp", "jr", "djnz", "call", "ret", "reti", "retn", "rst", "halt", "ldir", "lddr", "cpir",
    "cpdr",
];

fn encode(prefix: Option<u8>, opcode: u8) -> Vec<u8> {
    let mut bytes: Vec<u8> = prefix.into_iter().collect();
    bytes.extend([opcode, 0x00, 0x00, 0x00]);
    bytes
}

fn ops() -> impl Iterator<Item = (Option<u8>, u8, &'static Opcode)> {
    PAGES.into_iter().flat_map(|(page, prefix)| {
        table(page)
            .iter()
            .zip(0u8..=0xFF)
            .filter_map(move |(entry, opcode)| match entry {
                Entry::Op(op) => Some((prefix, opcode, op)),
                _ => None,
            })
    })
}

#[test]
fn every_entry_disassembles_to_its_own_length() {
    for (prefix, opcode, op) in ops() {
        let mut bus = SimpleBus::new();
        bus.load(0x2000, &encode(prefix, opcode));
        let d = disassemble(Dialect::Z80, &mut bus, 0x2000);
        assert_eq!(d.mnemonic, op.z80.mnemonic, "{prefix:02x?} {opcode:02x}");
        assert_eq!(d.len, op.len, "{prefix:02x?} {opcode:02x}");
    }
}

#[test]
fn intel_entries_disassemble_to_their_own_length() {
    for (prefix, opcode, op) in ops() {
        let Some(intel) = op.syntax(Dialect::I8080) else {
            continue;
        };
        assert_eq!(prefix, None, "only base-page ops have an 8080 form");
        let mut bus = SimpleBus::new();
        bus.load(0x2000, &encode(prefix, opcode));
        let d = disassemble(Dialect::I8080, &mut bus, 0x2000);
        assert_eq!(d.mnemonic, intel.mnemonic, "{opcode:02x}");
        assert_eq!(d.len, op.len, "{opcode:02x}");
    }
}

#[test]
fn invalid_entries_disassemble_as_one_byte() {
    for (page, prefix) in PAGES {
        for (entry, opcode) in table(page).iter().zip(0u8..=0xFF) {
            if !matches!(entry, Entry::Invalid) {
                continue;
            }
            let mut bus = SimpleBus::new();
            bus.load(0x2000, &encode(prefix, opcode));
            let d = disassemble(Dialect::Z80, &mut bus, 0x2000);
            let at = format!("{prefix:02x?} {opcode:02x}");
            assert_eq!((d.mnemonic, d.len), ("INVALID", 1), "{at}");
        }
    }
}

fn step_once(dialect: Dialect, prefix: Option<u8>, opcode: u8, op: &Opcode) {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &encode(prefix, opcode));
    let mut cpu = Z80::new(dialect, &mut bus);
    {
        let regs = cpu.regs_mut();
        regs.sp = 0x8000;
        regs.set_hl(0x4000);
        regs.set_bc(0x0010);
        regs.set_de(0x5000);
        regs.ix = 0x4000;
        regs.iy = 0x4000;
    }

    let name = format!("{dialect} {prefix:02x?} {opcode:02x} {}", op.z80.mnemonic);
    assert_eq!(cpu.step(), Ok(()), "{name}");
    assert_eq!(cpu.pc(), u16::from(op.len), "{name}");
    assert_eq!(cpu.cycles(), u64::from(op.cycles), "{name}");
}

#[test]
fn straight_line_entries_advance_by_length() {
    for (prefix, opcode, op) in ops() {
        if !CONTROL.contains(&op.z80.mnemonic) {
            step_once(Dialect::Z80, prefix, opcode, op);
        }
    }
}

#[test]
fn straight_line_intel_entries_advance_by_length() {
    for (prefix, opcode, op) in ops() {
        if op.i8080.is_some() && !CONTROL.contains(&op.z80.mnemonic) {
            step_once(Dialect::I8080, prefix, opcode, op);
        }
    }
}

#[test]
fn halt_entries_stop_in_place() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0x76]);
    let mut cpu = Z80::new(Dialect::I8080, &mut bus);
    assert_eq!(cpu.step(), Err(Stop::Halt));
    assert_eq!(cpu.pc(), 0);
}

#[test]
fn operand_kinds_match_lengths() {
    use cpu_z80::opcodes::Operand;

    for (prefix, opcode, op) in ops() {
        let width = if prefix.is_some() { 2 } else { 1 };
        let mut bytes = 0;
        for kind in [op.dst, op.src] {
            bytes += match kind {
                Operand::Immediate
                | Operand::Indirect
                | Operand::Displacement
                | Operand::Indexed => 1,
                Operand::ImmediateExtended | Operand::Extended => 2,
                _ => 0,
            };
        }
        let name = format!("{prefix:02x?} {opcode:02x} {}", op.z80.mnemonic);
        assert_eq!(width + bytes, op.len, "{name}");
    }
}
