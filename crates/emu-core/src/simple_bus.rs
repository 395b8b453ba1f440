//! Flat 64 KiB RAM bus with a 256-port I/O space.

use crate::{Bus, IoBus};

/// Flat RAM covering the whole 16-bit address space, plus I/O ports.
///
/// Port reads return the value last set with `set_port()` (0xFF if none).
/// Port writes are recorded in order so tests can check OUT traffic.
pub struct SimpleBus {
    ram: Box<[u8; 0x1_0000]>,
    ports_in: [u8; 256],
    ports_out: Vec<(u8, u8)>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x1_0000]),
            ports_in: [0xFF; 256],
            ports_out: Vec::new(),
        }
    }

    /// Copy `data` into RAM starting at `address`, wrapping at 0xFFFF.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        let mut addr = address;
        for &byte in data {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Read RAM without going through the `Bus` trait.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    /// Set the value returned by reads from `port`.
    pub fn set_port(&mut self, port: u8, value: u8) {
        self.ports_in[port as usize] = value;
    }

    /// Every `(port, value)` written so far, oldest first.
    #[must_use]
    pub fn port_writes(&self) -> &[(u8, u8)] {
        &self.ports_out
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }

    fn reset(&mut self) {
        self.ram.fill(0);
        self.ports_out.clear();
    }
}

impl IoBus for SimpleBus {
    fn read_io(&mut self, port: u8) -> u8 {
        self.ports_in[port as usize]
    }

    fn write_io(&mut self, port: u8, value: u8) {
        self.ports_out.push((port, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_top_of_memory() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFF, &[0x11, 0x22]);
        assert_eq!(bus.peek(0xFFFF), 0x11);
        assert_eq!(bus.peek(0x0000), 0x22);
    }

    #[test]
    fn unset_ports_read_ff() {
        let mut bus = SimpleBus::new();
        bus.set_port(0x10, 0x42);
        assert_eq!(bus.read_io(0x10), 0x42);
        assert_eq!(bus.read_io(0x11), 0xFF);
    }

    #[test]
    fn reset_clears_ram_and_port_log() {
        let mut bus = SimpleBus::new();
        bus.load(0x4000, &[1, 2, 3]);
        bus.write_io(0xFE, 7);
        bus.reset();
        assert_eq!(bus.peek(0x4001), 0);
        assert!(bus.port_writes().is_empty());
    }
}
