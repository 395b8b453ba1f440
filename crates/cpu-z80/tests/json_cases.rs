//! Single-instruction cases described in JSON.
//!
//! Each file in `tests/data/single_step/` holds a list of cases. A case
//! gives an initial CPU state and RAM, runs exactly one `step()` and
//! compares the whole register file, the listed RAM bytes and the cycle
//! count. Registers left out of a state are zero.

use std::fs;
use std::path::{Path, PathBuf};

use cpu_z80::{Dialect, Flags, Registers, Z80};
use emu_core::SimpleBus;
use serde::Deserialize;

#[derive(Deserialize)]
struct Case {
    name: String,
    initial: State,
    #[serde(rename = "final")]
    final_state: State,
    cycles: u64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct State {
    pc: u16,
    sp: u16,
    a: u8,
    f: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    ix: u16,
    iy: u16,
    i: u8,
    r: u8,
    iff1: bool,
    iff2: bool,
    im: u8,
    ram: Vec<(u16, u8)>,
    ports: Vec<(u8, u8)>,
}

impl State {
    fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            f: Flags::from_bits_retain(self.f),
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            h: self.h,
            l: self.l,
            ix: self.ix,
            iy: self.iy,
            sp: self.sp,
            pc: self.pc,
            i: self.i,
            r: self.r,
            iff1: self.iff1,
            iff2: self.iff2,
            im: self.im,
            ..Registers::default()
        }
    }
}

fn run(case: &Case) {
    let mut bus = SimpleBus::new();
    for &(addr, value) in &case.initial.ram {
        bus.load(addr, &[value]);
    }
    for &(port, value) in &case.initial.ports {
        bus.set_port(port, value);
    }

    let mut cpu = Z80::new(Dialect::Z80, &mut bus);
    *cpu.regs_mut() = case.initial.registers();

    if let Err(stop) = cpu.step() {
        panic!("{}: {stop}", case.name);
    }

    assert_eq!(*cpu.regs(), case.final_state.registers(), "{}", case.name);
    assert_eq!(cpu.cycles(), case.cycles, "{}: cycles", case.name);
    for &(addr, value) in &case.final_state.ram {
        let name = &case.name;
        assert_eq!(cpu.bus().peek(addr), value, "{name}: ram[{addr:#06x}]");
    }
}

fn case_files() -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/single_step");
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("{}: {e}", dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[test]
fn json_single_step_cases() {
    let files = case_files();
    assert!(!files.is_empty(), "no case files");

    for path in &files {
        let text = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        let cases: Vec<Case> = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(!cases.is_empty(), "{}: no cases", path.display());
        for case in &cases {
            run(case);
        }
    }
}
