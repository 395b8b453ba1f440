//! Core traits for instruction-stepped emulation.
//!
//! CPUs reach memory and I/O only through the bus traits defined here. The
//! bus is owned by the embedder; cores borrow it.

mod bus;
mod cpu;
mod simple_bus;

pub use bus::{Bus, IoBus};
pub use cpu::Cpu;
pub use simple_bus::SimpleBus;
