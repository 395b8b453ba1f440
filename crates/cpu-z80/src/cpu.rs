//! The interpreter: one instruction per `step()`.

use emu_core::{Cpu, IoBus};
use log::{debug, info, trace};

use crate::dialect::Dialect;
use crate::disasm::{self, Disassembly};
use crate::dispatch::{Exec, Flow, Index};
use crate::flags::Flags;
use crate::opcodes;
use crate::registers::Registers;
use crate::stop::Stop;
use crate::trace::Trace;

/// Z80 / 8080 interpreter.
///
/// The CPU borrows its bus for its whole lifetime; the embedder owns it.
/// Cycle counts are nominal Z80 T-states with no contention.
pub struct Z80<'a, B: IoBus> {
    regs: Registers,
    cycles: u64,
    dialect: Dialect,
    bus: &'a mut B,
}

impl<'a, B: IoBus> Z80<'a, B> {
    /// Create a CPU with every register zero.
    #[must_use]
    pub fn new(dialect: Dialect, bus: &'a mut B) -> Self {
        Self {
            regs: Registers::default(),
            cycles: 0,
            dialect,
            bus,
        }
    }

    /// Reset the CPU.
    ///
    /// A warm reset clears PC, I, R, the interrupt mode and both interrupt
    /// flip-flops and leaves the register file alone. A cold reset also
    /// clears every register and asks the bus to clear its memory.
    pub fn reset(&mut self, cold: bool) {
        if cold {
            self.bus.reset();
            self.regs = Registers::default();
        } else {
            self.regs.pc = 0;
            self.regs.i = 0;
            self.regs.r = 0;
            self.regs.im = 0;
            self.regs.iff1 = false;
            self.regs.iff2 = false;
        }
        let kind = if cold { "cold" } else { "warm" };
        info!("{} reset ({kind})", self.dialect);
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<(), Stop> {
        let at = self.regs.pc;
        let decoded = opcodes::decode(self.dialect, self.bus, at).map_err(|opcode| {
            debug!("invalid instruction {opcode:#04x} at {at:#06x}");
            Stop::InvalidInstruction {
                opcode,
                address: at,
            }
        })?;
        let op = decoded.op;

        for _ in 0..decoded.width {
            self.inc_r();
        }

        let mut cx = Exec {
            regs: &mut self.regs,
            bus: &mut *self.bus,
            opcode: decoded.opcode,
            at,
            operands: at.wrapping_add(u16::from(decoded.width)),
            index: Index::for_page(decoded.page),
            len: op.len,
        };
        match (op.exec)(&mut cx) {
            Flow::Next => {
                self.regs.pc = at.wrapping_add(u16::from(op.len));
                self.cycles += u64::from(op.cycles);
            }
            Flow::Skip => {
                self.regs.pc = at.wrapping_add(u16::from(op.len));
                self.cycles += u64::from(op.cycles_not_taken);
            }
            Flow::Jump(target) => {
                self.regs.pc = target;
                self.cycles += u64::from(op.cycles);
            }
            Flow::Halt => {
                self.cycles += u64::from(op.cycles);
                debug!("halt at {at:#06x}");
                return Err(Stop::Halt);
            }
        }
        Ok(())
    }

    /// Memory refresh: R counts opcode fetches in its low seven bits.
    fn inc_r(&mut self) {
        self.regs.r = (self.regs.r & 0x80) | (self.regs.r.wrapping_add(1) & 0x7F);
    }

    /// Disassemble the instruction at `address` into one line.
    pub fn disassemble(&mut self, address: u16) -> String {
        self.disassemble_components(address).to_string()
    }

    /// Disassemble the instruction at `address` into its parts.
    pub fn disassemble_components(&mut self, address: u16) -> Disassembly {
        disasm::disassemble(self.dialect, self.bus, address)
    }

    /// Run until HALT or an invalid instruction, logging each instruction
    /// and the registers after it.
    ///
    /// Never returns for a program that neither halts nor hits an invalid
    /// opcode.
    pub fn trace(&mut self) -> Trace {
        let mut instructions = Vec::new();
        let mut registers = Vec::new();
        loop {
            let pc = self.regs.pc;
            let line = format!("{pc:04x}: {}", self.disassemble(pc));
            trace!("{line}");
            instructions.push(line);

            let result = self.step();
            registers.push(self.dump_registers());
            if let Err(stop) = result {
                return Trace {
                    instructions,
                    registers,
                    stop,
                };
            }
        }
    }

    /// One-line register dump.
    #[must_use]
    pub fn dump_registers(&self) -> String {
        self.regs.to_string()
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[must_use]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    /// The bus, for inspecting memory and ports between steps.
    pub fn bus(&mut self) -> &mut B {
        self.bus
    }

    #[must_use]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Set PC, e.g. to a program's load address.
    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[must_use]
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    #[must_use]
    pub fn f(&self) -> Flags {
        self.regs.f
    }

    #[must_use]
    pub fn af(&self) -> u16 {
        self.regs.af()
    }

    #[must_use]
    pub fn bc(&self) -> u16 {
        self.regs.bc()
    }

    #[must_use]
    pub fn de(&self) -> u16 {
        self.regs.de()
    }

    #[must_use]
    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }

    #[must_use]
    pub fn ix(&self) -> u16 {
        self.regs.ix
    }

    #[must_use]
    pub fn iy(&self) -> u16 {
        self.regs.iy
    }

    #[must_use]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    // === Test utilities ===

    /// Set SP directly.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_sp(&mut self, sp: u16) {
        self.regs.sp = sp;
    }

    /// Mutable access to every register.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }
}

impl<B: IoBus> Cpu for Z80<'_, B> {
    type Registers = Registers;
    type Stop = Stop;

    fn step(&mut self) -> Result<(), Stop> {
        Z80::step(self)
    }

    fn reset(&mut self, cold: bool) {
        Z80::reset(self, cold);
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::SimpleBus;

    #[test]
    fn new_cpu_is_zeroed() {
        let mut bus = SimpleBus::new();
        let cpu = Z80::new(Dialect::Z80, &mut bus);
        assert_eq!(*cpu.regs(), Registers::default());
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn refresh_counter_keeps_bit_7() {
        let mut bus = SimpleBus::new();
        bus.load(0, &[0x00, 0xDD, 0x23]);
        let mut cpu = Z80::new(Dialect::Z80, &mut bus);
        cpu.regs_mut().r = 0xFF;
        cpu.step().expect("nop");
        assert_eq!(cpu.regs().r, 0x80);
        cpu.step().expect("inc ix");
        assert_eq!(cpu.regs().r, 0x82);
    }

    #[test]
    fn invalid_instruction_leaves_state_alone() {
        let mut bus = SimpleBus::new();
        bus.load(0x10, &[0xCB, 0x00]);
        let mut cpu = Z80::new(Dialect::Z80, &mut bus);
        cpu.set_pc(0x10);
        let invalid = Stop::InvalidInstruction {
            opcode: 0xCB,
            address: 0x10,
        };
        assert_eq!(cpu.step(), Err(invalid));
        assert_eq!(cpu.pc(), 0x10);
        assert_eq!(cpu.cycles(), 0);
    }
}
