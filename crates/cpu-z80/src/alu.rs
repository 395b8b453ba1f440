//! ALU operations for the Z80.
//!
//! Each function computes a result and updates exactly the flags the
//! instruction affects. Flags an operation does not mention are left as
//! they were.

#![allow(clippy::verbose_bit_mask)] // Nibble tests read as masks.

use crate::flags::{Flags, parity};

/// Increment byte. C is not affected.
#[must_use]
pub fn inc8(f: &mut Flags, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    f.eval_sz(result);
    f.eval_half_carry(value, 1);
    f.set(Flags::PV, value == 0x7F);
    f.remove(Flags::N);
    result
}

/// Decrement byte. C is not affected.
#[must_use]
pub fn dec8(f: &mut Flags, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    f.eval_sz(result);
    // Borrow from bit 4
    f.set(Flags::H, value & 0x0F == 0);
    f.set(Flags::PV, value == 0x80);
    f.insert(Flags::N);
    result
}

/// Add two bytes with optional carry.
#[must_use]
pub fn add8(f: &mut Flags, a: u8, b: u8, carry: bool) -> u8 {
    let c = u8::from(carry);
    let result16 = u16::from(a) + u16::from(b) + u16::from(c);
    let result = result16 as u8;

    f.eval_sz(result);
    f.set(Flags::H, (a & 0x0F) + (b & 0x0F) + c > 0x0F);
    // Overflow: both operands same sign, result different sign
    f.set(Flags::PV, (a ^ b) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
    f.remove(Flags::N);
    f.set(Flags::C, result16 > 0xFF);
    result
}

/// Subtract two bytes with optional borrow.
#[must_use]
pub fn sub8(f: &mut Flags, a: u8, b: u8, carry: bool) -> u8 {
    let c = u8::from(carry);
    let result = a.wrapping_sub(b).wrapping_sub(c);

    f.eval_sz(result);
    f.set(Flags::H, (a & 0x0F) < (b & 0x0F) + c);
    // Overflow: operands different sign, result sign differs from minuend
    f.set(Flags::PV, (a ^ b) & 0x80 != 0 && (a ^ result) & 0x80 != 0);
    f.insert(Flags::N);
    f.set(Flags::C, u16::from(a) < u16::from(b) + u16::from(c));
    result
}

/// AND operation. H is always set.
#[must_use]
pub fn and8(f: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a & b;
    f.eval_szp(result);
    f.insert(Flags::H);
    f.remove(Flags::N | Flags::C);
    result
}

/// XOR operation.
#[must_use]
pub fn xor8(f: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a ^ b;
    f.eval_szp(result);
    f.remove(Flags::H | Flags::N | Flags::C);
    result
}

/// OR operation.
#[must_use]
pub fn or8(f: &mut Flags, a: u8, b: u8) -> u8 {
    let result = a | b;
    f.eval_szp(result);
    f.remove(Flags::H | Flags::N | Flags::C);
    result
}

/// One of the eight accumulator operations selected by bits 5-3 of the
/// opcode: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
///
/// Returns the new accumulator (unchanged for CP).
#[must_use]
pub fn accumulate(f: &mut Flags, op: u8, a: u8, value: u8) -> u8 {
    let carry = f.contains(Flags::C);
    match op & 7 {
        0 => add8(f, a, value, false),
        1 => add8(f, a, value, carry),
        2 => sub8(f, a, value, false),
        3 => sub8(f, a, value, carry),
        4 => and8(f, a, value),
        5 => xor8(f, a, value),
        6 => or8(f, a, value),
        _ => {
            let _ = sub8(f, a, value, false);
            a
        }
    }
}

/// Negate the accumulator (0 - A).
#[must_use]
pub fn neg8(f: &mut Flags, a: u8) -> u8 {
    let result = 0u8.wrapping_sub(a);
    f.eval_sz(result);
    // Borrow from bit 4 in 0 - low nibble
    f.set(Flags::H, a & 0x0F != 0);
    f.set(Flags::PV, a == 0x80);
    f.insert(Flags::N);
    f.set(Flags::C, a != 0);
    result
}

/// Complement the accumulator.
#[must_use]
pub fn cpl(f: &mut Flags, a: u8) -> u8 {
    f.insert(Flags::H | Flags::N);
    !a
}

/// Set the carry flag.
pub fn scf(f: &mut Flags) {
    f.remove(Flags::H | Flags::N);
    f.insert(Flags::C);
}

/// Complement the carry flag; the old carry moves into H.
pub fn ccf(f: &mut Flags) {
    let carry = f.contains(Flags::C);
    f.set(Flags::H, carry);
    f.set(Flags::C, !carry);
    f.remove(Flags::N);
}

/// Decimal adjust the accumulator after BCD addition or subtraction.
#[must_use]
pub fn daa(f: &mut Flags, a: u8) -> u8 {
    let mut correction = 0u8;
    let mut carry = f.contains(Flags::C);

    if f.contains(Flags::H) || a & 0x0F > 9 {
        correction |= 0x06;
    }
    if carry || a > 0x99 {
        correction |= 0x60;
        carry = true;
    }

    let result = if f.contains(Flags::N) {
        f.set(Flags::H, f.contains(Flags::H) && a & 0x0F < 6);
        a.wrapping_sub(correction)
    } else {
        f.set(Flags::H, a & 0x0F > 9);
        a.wrapping_add(correction)
    };

    f.eval_szp(result);
    f.set(Flags::C, carry);
    result
}

/// Rotate A left circular. Only H, N and C change.
#[must_use]
pub fn rlca(f: &mut Flags, a: u8) -> u8 {
    f.remove(Flags::H | Flags::N);
    f.set(Flags::C, a & 0x80 != 0);
    a.rotate_left(1)
}

/// Rotate A right circular.
#[must_use]
pub fn rrca(f: &mut Flags, a: u8) -> u8 {
    f.remove(Flags::H | Flags::N);
    f.set(Flags::C, a & 0x01 != 0);
    a.rotate_right(1)
}

/// Rotate A left through carry.
#[must_use]
pub fn rla(f: &mut Flags, a: u8) -> u8 {
    let old_carry = u8::from(f.contains(Flags::C));
    f.remove(Flags::H | Flags::N);
    f.set(Flags::C, a & 0x80 != 0);
    (a << 1) | old_carry
}

/// Rotate A right through carry.
#[must_use]
pub fn rra(f: &mut Flags, a: u8) -> u8 {
    let old_carry = if f.contains(Flags::C) { 0x80 } else { 0 };
    f.remove(Flags::H | Flags::N);
    f.set(Flags::C, a & 0x01 != 0);
    (a >> 1) | old_carry
}

/// 16-bit add for ADD HL,rr. S, Z and P/V are not affected.
#[must_use]
pub fn add16(f: &mut Flags, a: u16, b: u16) -> u16 {
    let result = u32::from(a) + u32::from(b);
    f.set(Flags::H, (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF);
    f.remove(Flags::N);
    f.set(Flags::C, result > 0xFFFF);
    result as u16
}

/// 16-bit add with carry for ADC HL,rr.
#[must_use]
pub fn adc16(f: &mut Flags, a: u16, b: u16) -> u16 {
    let c = u32::from(f.contains(Flags::C));
    let result32 = u32::from(a) + u32::from(b) + c;
    let result = result32 as u16;

    f.set(Flags::S, result & 0x8000 != 0);
    f.set(Flags::Z, result == 0);
    let half = u32::from(a & 0x0FFF) + u32::from(b & 0x0FFF) + c;
    let overflow = (a ^ b) & 0x8000 == 0 && (a ^ result) & 0x8000 != 0;
    f.set(Flags::H, half > 0x0FFF);
    f.set(Flags::PV, overflow);
    f.remove(Flags::N);
    f.set(Flags::C, result32 > 0xFFFF);
    result
}

/// 16-bit subtract with carry for SBC HL,rr.
#[must_use]
pub fn sbc16(f: &mut Flags, a: u16, b: u16) -> u16 {
    let c = u32::from(f.contains(Flags::C));
    let result = a.wrapping_sub(b).wrapping_sub(c as u16);

    f.set(Flags::S, result & 0x8000 != 0);
    f.set(Flags::Z, result == 0);
    f.set(Flags::H, u32::from(a & 0x0FFF) < u32::from(b & 0x0FFF) + c);
    let overflow = (a ^ b) & 0x8000 != 0 && (a ^ result) & 0x8000 != 0;
    f.set(Flags::PV, overflow);
    f.insert(Flags::N);
    f.set(Flags::C, u32::from(a) < u32::from(b) + c);
    result
}

/// Flags for IN r,(C) and LD A,I / LD A,R style loads: S, Z from the
/// value, H and N reset. P/V is left to the caller.
pub fn eval_load(f: &mut Flags, value: u8) {
    f.eval_sz(value);
    f.remove(Flags::H | Flags::N);
}

/// Flags for IN r,(C): as `eval_load`, with P/V from parity.
pub fn eval_in(f: &mut Flags, value: u8) {
    eval_load(f, value);
    f.set(Flags::PV, parity(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inc_at_signed_boundary() {
        let mut f = Flags::C;
        let r = inc8(&mut f, 0x7F);
        assert_eq!(r, 0x80);
        assert!(f.contains(Flags::PV | Flags::H | Flags::S | Flags::C));
        assert!(!f.intersects(Flags::Z | Flags::N));
    }

    #[test]
    fn inc_wraps_to_zero() {
        let mut f = Flags::empty();
        assert_eq!(inc8(&mut f, 0xFF), 0);
        assert!(f.contains(Flags::Z | Flags::H));
        assert!(!f.intersects(Flags::PV | Flags::C));
    }

    #[test]
    fn dec_at_signed_boundary() {
        let mut f = Flags::empty();
        let r = dec8(&mut f, 0x80);
        assert_eq!(r, 0x7F);
        assert!(f.contains(Flags::PV | Flags::N | Flags::H));
        assert!(!f.intersects(Flags::S | Flags::Z | Flags::C));
    }

    #[test]
    fn add_overflow_and_carry() {
        let mut f = Flags::empty();
        assert_eq!(add8(&mut f, 0x7F, 0x01, false), 0x80);
        assert!(f.contains(Flags::PV | Flags::H | Flags::S));
        assert!(!f.contains(Flags::C));

        assert_eq!(add8(&mut f, 0xFF, 0x01, false), 0x00);
        assert!(f.contains(Flags::Z | Flags::C | Flags::H));
        assert!(!f.contains(Flags::PV));
    }

    #[test]
    fn sub_borrow() {
        let mut f = Flags::empty();
        assert_eq!(sub8(&mut f, 0x10, 0x01, false), 0x0F);
        assert!(f.contains(Flags::H | Flags::N));
        assert!(!f.contains(Flags::C));

        assert_eq!(sub8(&mut f, 0x00, 0x01, false), 0xFF);
        assert!(f.contains(Flags::C | Flags::S));

        assert_eq!(sub8(&mut f, 0x80, 0x01, false), 0x7F);
        assert!(f.contains(Flags::PV));
    }

    #[test]
    fn compare_leaves_accumulator() {
        let mut f = Flags::empty();
        assert_eq!(accumulate(&mut f, 7, 0x42, 0x42), 0x42);
        assert!(f.contains(Flags::Z | Flags::N));
    }

    #[test]
    fn logical_ops_set_parity() {
        let mut f = Flags::C | Flags::N;
        assert_eq!(and8(&mut f, 0xF0, 0x30), 0x30);
        assert!(f.contains(Flags::H | Flags::PV));
        assert!(!f.intersects(Flags::C | Flags::N));

        assert_eq!(xor8(&mut f, 0xFF, 0xFE), 0x01);
        assert!(!f.intersects(Flags::H | Flags::PV));

        assert_eq!(or8(&mut f, 0, 0), 0);
        assert!(f.contains(Flags::Z | Flags::PV));
    }

    #[test]
    fn neg_edge_cases() {
        let mut f = Flags::empty();
        assert_eq!(neg8(&mut f, 0x80), 0x80);
        assert!(f.contains(Flags::PV | Flags::C | Flags::N | Flags::S));
        assert!(!f.contains(Flags::H));

        assert_eq!(neg8(&mut f, 0x00), 0x00);
        assert!(f.contains(Flags::Z));
        assert!(!f.intersects(Flags::C | Flags::PV | Flags::H));

        assert_eq!(neg8(&mut f, 0x01), 0xFF);
        assert!(f.contains(Flags::H | Flags::C));
    }

    #[test]
    fn ccf_moves_carry_into_half_carry() {
        let mut f = Flags::C | Flags::N;
        ccf(&mut f);
        assert_eq!(f, Flags::H);
        ccf(&mut f);
        assert_eq!(f, Flags::C);
    }

    #[test]
    fn cpl_preserves_other_flags() {
        let mut f = Flags::S | Flags::C;
        assert_eq!(cpl(&mut f, 0x5A), 0xA5);
        assert_eq!(f, Flags::S | Flags::C | Flags::H | Flags::N);
    }

    #[test]
    fn daa_after_bcd_add() {
        // 0x15 + 0x27 = 0x3C, adjusted to 0x42
        let mut f = Flags::empty();
        let sum = add8(&mut f, 0x15, 0x27, false);
        assert_eq!(daa(&mut f, sum), 0x42);
        assert!(!f.contains(Flags::C));

        // 0x99 + 0x01 = 0x9A, adjusted to 0x00 with carry
        let sum = add8(&mut f, 0x99, 0x01, false);
        assert_eq!(daa(&mut f, sum), 0x00);
        assert!(f.contains(Flags::C | Flags::Z));
    }

    #[test]
    fn daa_after_bcd_subtract() {
        // 0x42 - 0x15 = 0x2D, adjusted to 0x27
        let mut f = Flags::empty();
        let diff = sub8(&mut f, 0x42, 0x15, false);
        assert_eq!(daa(&mut f, diff), 0x27);
    }

    #[test]
    fn sixteen_bit_carry_and_overflow() {
        let mut f = Flags::S | Flags::Z;
        assert_eq!(add16(&mut f, 0xFFFF, 0x0001), 0x0000);
        assert!(f.contains(Flags::C | Flags::H | Flags::S | Flags::Z));

        let mut f = Flags::empty();
        assert_eq!(adc16(&mut f, 0x7FFF, 0x0000), 0x7FFF);
        f.insert(Flags::C);
        assert_eq!(adc16(&mut f, 0x7FFF, 0x0000), 0x8000);
        assert!(f.contains(Flags::PV | Flags::S));

        let mut f = Flags::C;
        assert_eq!(sbc16(&mut f, 0x0001, 0x0000), 0x0000);
        assert!(f.contains(Flags::Z | Flags::N));
        assert!(!f.contains(Flags::C));
    }
}
