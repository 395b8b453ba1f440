//! Z80 flag register bits.

use bitflags::bitflags;

bitflags! {
    /// The F register.
    ///
    /// Bits 5 and 3 are unused by this core: no instruction sets or clears
    /// them, so they keep whatever value was loaded (e.g. by `POP AF`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u8 {
        /// Sign flag (bit 7) - set if result is negative.
        const S = 0b1000_0000;
        /// Zero flag (bit 6) - set if result is zero.
        const Z = 0b0100_0000;
        /// Unused (bit 5).
        const Y = 0b0010_0000;
        /// Half-carry flag (bit 4) - carry from bit 3 to bit 4.
        const H = 0b0001_0000;
        /// Unused (bit 3).
        const X = 0b0000_1000;
        /// Parity/Overflow flag (bit 2) - parity or overflow depending on instruction.
        const PV = 0b0000_0100;
        /// Add/Subtract flag (bit 1) - set if last operation was subtraction.
        const N = 0b0000_0010;
        /// Carry flag (bit 0) - carry out of bit 7.
        const C = 0b0000_0001;
    }
}

/// Compute parity of a byte (true if even number of 1 bits).
#[must_use]
pub const fn parity(value: u8) -> bool {
    value.count_ones().is_multiple_of(2)
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Flags {
    /// Set or clear Z from a result byte.
    pub fn eval_zero(&mut self, value: u8) {
        self.set(Self::Z, value == 0);
    }

    /// Set or clear S from the top bit of a result byte.
    pub fn eval_sign(&mut self, value: u8) {
        self.set(Self::S, value & 0x80 != 0);
    }

    /// Set H iff adding the low nibbles of `original` and `operand` carries
    /// out of bit 3.
    pub fn eval_half_carry(&mut self, original: u8, operand: u8) {
        self.set(Self::H, ((original & 0x0F) + (operand & 0x0F)) & 0x10 != 0);
    }

    /// Set S and Z from a result byte.
    pub fn eval_sz(&mut self, value: u8) {
        self.eval_sign(value);
        self.eval_zero(value);
    }

    /// Set S, Z and P/V (as parity) from a result byte.
    pub fn eval_szp(&mut self, value: u8) {
        self.eval_sz(value);
        self.set(Self::PV, parity(value));
    }

    /// Evaluate condition code `cc` (bits 5-3 of a conditional opcode).
    ///
    /// 0 NZ, 1 Z, 2 NC, 3 C, 4 PO, 5 PE, 6 P, 7 M.
    #[must_use]
    pub fn condition(self, cc: u8) -> bool {
        let flag = match (cc >> 1) & 3 {
            0 => Self::Z,
            1 => Self::C,
            2 => Self::PV,
            _ => Self::S,
        };
        self.contains(flag) == (cc & 1 != 0)
    }

    /// Eight-character flag string, bit 7 first.
    ///
    /// Named flags print their letter when set and `-` when clear; the two
    /// unused bits print `1` or `0`.
    #[must_use]
    pub fn letters(self) -> String {
        const NAMES: [(Flags, char); 8] = [
            (Flags::S, 'S'),
            (Flags::Z, 'Z'),
            (Flags::Y, '1'),
            (Flags::H, 'H'),
            (Flags::X, '1'),
            (Flags::PV, 'P'),
            (Flags::N, 'N'),
            (Flags::C, 'C'),
        ];
        NAMES
            .iter()
            .map(|&(flag, letter)| match (self.contains(flag), letter) {
                (true, _) => letter,
                (false, '1') => '0',
                (false, _) => '-',
            })
            .collect()
    }
}
