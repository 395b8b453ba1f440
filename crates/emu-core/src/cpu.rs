//! CPU core trait.

/// An instruction-stepped CPU core.
///
/// Each call to `step()` executes exactly one instruction. Anything that
/// stops the core (a halt, a decode failure) is reported through the
/// `Stop` type rather than swallowed, so the embedder decides what happens
/// next.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Why a step did not complete normally.
    type Stop;

    /// Execute one instruction.
    fn step(&mut self) -> Result<(), Self::Stop>;

    /// Reset the CPU. A cold reset also reinitialises memory owned by the bus.
    fn reset(&mut self, cold: bool);

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Total nominal cycles executed since construction.
    fn cycles(&self) -> u64;
}
