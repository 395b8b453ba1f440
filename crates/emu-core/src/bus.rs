//! Memory and I/O bus interface.

/// A bus that supports memory read/write operations.
///
/// Components access memory through this trait. The bus handles address
/// decoding and routing to the appropriate device. Timing is not modelled:
/// cores account for their own nominal cycle counts.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Clear any memory the bus owns.
    ///
    /// Called by a CPU on cold reset. Buses that front ROM or devices with
    /// their own power-on state can leave this as a no-op.
    fn reset(&mut self) {}
}

/// A bus that also supports a separate I/O port space.
///
/// The 8080 and Z80 address peripherals through IN and OUT instructions on
/// an 8-bit port number, independent of the memory map.
pub trait IoBus: Bus {
    /// Read a byte from the given I/O port.
    fn read_io(&mut self, port: u8) -> u8;

    /// Write a byte to the given I/O port.
    fn write_io(&mut self, port: u8, value: u8);
}
