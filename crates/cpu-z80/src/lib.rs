//! Instruction-stepped Z80 and 8080 interpreter.
//!
//! Each call to `step()` executes one whole instruction and adds its
//! nominal cycle count. Decoding, execution and disassembly all run off the
//! same four descriptor pages in [`opcodes`], so what the disassembler
//! prints is what the dispatcher executes.
//!
//! ```
//! use cpu_z80::{Dialect, Stop, Z80};
//! use emu_core::SimpleBus;
//!
//! let mut bus = SimpleBus::new();
//! bus.load(0, &[0x3E, 0x42, 0x76]); // LD A,$42; HALT
//! let mut cpu = Z80::new(Dialect::Z80, &mut bus);
//! assert_eq!(cpu.step(), Ok(()));
//! assert_eq!(cpu.step(), Err(Stop::Halt));
//! assert_eq!(cpu.a(), 0x42);
//! ```

pub mod alu;
mod cpu;
mod dialect;
mod disasm;
mod dispatch;
mod flags;
pub mod opcodes;
mod registers;
mod stop;
mod trace;

pub use cpu::Z80;
pub use dialect::{Dialect, ParseDialectError};
pub use disasm::{Disassembly, disassemble};
pub use flags::{Flags, parity};
pub use registers::Registers;
pub use stop::Stop;
pub use trace::Trace;
