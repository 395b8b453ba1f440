//! Arithmetic, logic and accumulator rotates.

use super::{Exec, Flow};
use crate::alu;

pub(crate) fn inc_r(cx: &mut Exec<'_>) -> Flow {
    cx.modify_r8(cx.y(), alu::inc8);
    Flow::Next
}

pub(crate) fn dec_r(cx: &mut Exec<'_>) -> Flow {
    cx.modify_r8(cx.y(), alu::dec8);
    Flow::Next
}

/// INC rr. No flags.
pub(crate) fn inc_rp(cx: &mut Exec<'_>) -> Flow {
    let p = cx.p();
    cx.set_rp(p, cx.rp(p).wrapping_add(1));
    Flow::Next
}

/// DEC rr. No flags.
pub(crate) fn dec_rp(cx: &mut Exec<'_>) -> Flow {
    let p = cx.p();
    cx.set_rp(p, cx.rp(p).wrapping_sub(1));
    Flow::Next
}

/// ADD HL,rr / ADD IX,rr.
pub(crate) fn add_hl_rp(cx: &mut Exec<'_>) -> Flow {
    let hl = cx.hl();
    let value = cx.rp(cx.p());
    let result = alu::add16(&mut cx.regs.f, hl, value);
    cx.set_hl(result);
    Flow::Next
}

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP with a register or memory operand.
pub(crate) fn alu_r(cx: &mut Exec<'_>) -> Flow {
    let value = cx.r8(cx.z());
    accumulate(cx, value);
    Flow::Next
}

/// The same eight operations with an immediate operand.
pub(crate) fn alu_n(cx: &mut Exec<'_>) -> Flow {
    let value = cx.imm8();
    accumulate(cx, value);
    Flow::Next
}

fn accumulate(cx: &mut Exec<'_>, value: u8) {
    let op = cx.y();
    cx.regs.a = alu::accumulate(&mut cx.regs.f, op, cx.regs.a, value);
}

pub(crate) fn rlca(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::rlca(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn rrca(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::rrca(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn rla(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::rla(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn rra(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::rra(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn daa(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::daa(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn cpl(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::cpl(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

pub(crate) fn scf(cx: &mut Exec<'_>) -> Flow {
    alu::scf(cx.flags());
    Flow::Next
}

pub(crate) fn ccf(cx: &mut Exec<'_>) -> Flow {
    alu::ccf(cx.flags());
    Flow::Next
}
