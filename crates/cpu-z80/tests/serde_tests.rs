//! Snapshot serialization behind the `serde` feature.
//!
//! Run with `cargo test -p cpu-z80 --features serde`.

#![cfg(feature = "serde")]

use cpu_z80::{Dialect, Flags, Registers};

#[test]
fn dialect_wire_names() {
    let z80 = serde_json::to_string(&Dialect::Z80).expect("z80");
    let i8080 = serde_json::to_string(&Dialect::I8080).expect("8080");
    assert_eq!((z80.as_str(), i8080.as_str()), ("\"z80\"", "\"8080\""));

    let z80: Dialect = serde_json::from_str("\"z80\"").expect("parse z80");
    let i8080: Dialect = serde_json::from_str("\"8080\"").expect("parse 8080");
    assert_eq!((z80, i8080), (Dialect::Z80, Dialect::I8080));
    assert!(serde_json::from_str::<Dialect>("\"6502\"").is_err());
}

#[test]
fn registers_round_trip_with_flags() {
    let mut regs = Registers {
        a: 0x42,
        f: Flags::S | Flags::C,
        ix: 0x1234,
        sp: 0x8000,
        pc: 0x0100,
        i: 0x3F,
        iff1: true,
        iff2: true,
        im: 2,
        af_alt: 0xFFFF,
        ..Registers::default()
    };
    regs.set_hl(0xBEEF);

    let json = serde_json::to_string(&regs).expect("serialize");
    assert!(json.contains(r#""f":"S | C""#), "{json}");

    let back: Registers = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, regs);
    assert_eq!(back.f.bits(), 0x81);
}

#[test]
fn undocumented_flag_bits_survive() {
    let regs = Registers {
        f: Flags::from_bits_retain(0x28),
        ..Registers::default()
    };
    let json = serde_json::to_string(&regs).expect("serialize");
    let back: Registers = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.f.bits(), 0x28);
}
