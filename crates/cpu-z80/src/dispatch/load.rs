//! Loads, exchanges and stack transfers. None of these touch the flags
//! (except POP AF, which replaces them).

use super::{Exec, Flow};

/// LD r,r' / LD r,(HL) / LD (HL),r and the indexed forms.
pub(crate) fn ld_r_r(cx: &mut Exec<'_>) -> Flow {
    let value = cx.r8(cx.z());
    cx.set_r8(cx.y(), value);
    Flow::Next
}

/// LD r,n / LD (HL),n / LD (IX+d),n.
pub(crate) fn ld_r_n(cx: &mut Exec<'_>) -> Flow {
    let value = cx.imm8();
    cx.set_r8(cx.y(), value);
    Flow::Next
}

/// LD rr,nn.
pub(crate) fn ld_rp_nn(cx: &mut Exec<'_>) -> Flow {
    let value = cx.imm16();
    cx.set_rp(cx.p(), value);
    Flow::Next
}

/// LD (BC),A / LD (DE),A.
pub(crate) fn ld_ind_a(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.rp(cx.p());
    cx.bus.write(addr, cx.regs.a);
    Flow::Next
}

/// LD A,(BC) / LD A,(DE).
pub(crate) fn ld_a_ind(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.rp(cx.p());
    cx.regs.a = cx.bus.read(addr);
    Flow::Next
}

/// LD (nn),HL.
pub(crate) fn ld_nn_hl(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    cx.write16(addr, cx.hl());
    Flow::Next
}

/// LD HL,(nn).
pub(crate) fn ld_hl_nn(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    let value = cx.read16(addr);
    cx.set_hl(value);
    Flow::Next
}

pub(crate) fn ld_nn_a(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    cx.bus.write(addr, cx.regs.a);
    Flow::Next
}

pub(crate) fn ld_a_nn(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    cx.regs.a = cx.bus.read(addr);
    Flow::Next
}

pub(crate) fn ld_sp_hl(cx: &mut Exec<'_>) -> Flow {
    cx.regs.sp = cx.hl();
    Flow::Next
}

pub(crate) fn push(cx: &mut Exec<'_>) -> Flow {
    let value = cx.rp_af(cx.p());
    cx.push(value);
    Flow::Next
}

pub(crate) fn pop(cx: &mut Exec<'_>) -> Flow {
    let value = cx.pop();
    cx.set_rp_af(cx.p(), value);
    Flow::Next
}

/// EX AF,AF'.
pub(crate) fn ex_af(cx: &mut Exec<'_>) -> Flow {
    let af = cx.regs.af();
    cx.regs.set_af(cx.regs.af_alt);
    cx.regs.af_alt = af;
    Flow::Next
}

/// EXX: swap BC, DE and HL with their alternates.
pub(crate) fn exx(cx: &mut Exec<'_>) -> Flow {
    let r = &mut *cx.regs;
    let (bc, de, hl) = (r.bc(), r.de(), r.hl());
    r.set_bc(r.bc_alt);
    r.set_de(r.de_alt);
    r.set_hl(r.hl_alt);
    r.bc_alt = bc;
    r.de_alt = de;
    r.hl_alt = hl;
    Flow::Next
}

/// EX DE,HL. Always HL, even after a prefix.
pub(crate) fn ex_de_hl(cx: &mut Exec<'_>) -> Flow {
    let de = cx.regs.de();
    cx.regs.set_de(cx.regs.hl());
    cx.regs.set_hl(de);
    Flow::Next
}

/// EX (SP),HL / EX (SP),IX.
pub(crate) fn ex_sp_hl(cx: &mut Exec<'_>) -> Flow {
    let sp = cx.regs.sp;
    let value = cx.read16(sp);
    cx.write16(sp, cx.hl());
    cx.set_hl(value);
    Flow::Next
}
