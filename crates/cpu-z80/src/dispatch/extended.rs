//! ED-page handlers.

use super::{Exec, Flow};
use crate::alu;
use crate::flags::Flags;

/// IN r,(C). The port is the low byte, C.
pub(crate) fn in_r_c(cx: &mut Exec<'_>) -> Flow {
    let value = cx.bus.read_io(cx.regs.c);
    alu::eval_in(&mut cx.regs.f, value);
    cx.regs.set_reg8(cx.y(), value);
    Flow::Next
}

/// OUT (C),r.
pub(crate) fn out_c_r(cx: &mut Exec<'_>) -> Flow {
    let value = cx.regs.reg8(cx.y());
    cx.bus.write_io(cx.regs.c, value);
    Flow::Next
}

pub(crate) fn sbc_hl_rp(cx: &mut Exec<'_>) -> Flow {
    let hl = cx.regs.hl();
    let value = cx.rp(cx.p());
    let result = alu::sbc16(&mut cx.regs.f, hl, value);
    cx.regs.set_hl(result);
    Flow::Next
}

pub(crate) fn adc_hl_rp(cx: &mut Exec<'_>) -> Flow {
    let hl = cx.regs.hl();
    let value = cx.rp(cx.p());
    let result = alu::adc16(&mut cx.regs.f, hl, value);
    cx.regs.set_hl(result);
    Flow::Next
}

/// LD (nn),rr.
pub(crate) fn ld_nn_rp(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    cx.write16(addr, cx.rp(cx.p()));
    Flow::Next
}

/// LD rr,(nn).
pub(crate) fn ld_rp_mem(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.imm16();
    let value = cx.read16(addr);
    cx.set_rp(cx.p(), value);
    Flow::Next
}

pub(crate) fn neg(cx: &mut Exec<'_>) -> Flow {
    cx.regs.a = alu::neg8(&mut cx.regs.f, cx.regs.a);
    Flow::Next
}

/// RETN: return and restore IFF1 from IFF2.
pub(crate) fn retn(cx: &mut Exec<'_>) -> Flow {
    cx.regs.iff1 = cx.regs.iff2;
    Flow::Jump(cx.pop())
}

/// RETI behaves like RETN here; there is no daisy chain to notify.
pub(crate) fn reti(cx: &mut Exec<'_>) -> Flow {
    retn(cx)
}

/// IM 0/1/2, selected by bits 4-3 (0, 2, 3).
pub(crate) fn im(cx: &mut Exec<'_>) -> Flow {
    cx.regs.im = match cx.y() & 3 {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    };
    Flow::Next
}

pub(crate) fn ld_i_a(cx: &mut Exec<'_>) -> Flow {
    cx.regs.i = cx.regs.a;
    Flow::Next
}

pub(crate) fn ld_r_a(cx: &mut Exec<'_>) -> Flow {
    cx.regs.r = cx.regs.a;
    Flow::Next
}

/// LD A,I. P/V reports IFF2.
pub(crate) fn ld_a_i(cx: &mut Exec<'_>) -> Flow {
    let i = cx.regs.i;
    load_special(cx, i);
    Flow::Next
}

/// LD A,R. P/V reports IFF2.
pub(crate) fn ld_a_r(cx: &mut Exec<'_>) -> Flow {
    let r = cx.regs.r;
    load_special(cx, r);
    Flow::Next
}

fn load_special(cx: &mut Exec<'_>, value: u8) {
    cx.regs.a = value;
    alu::eval_load(&mut cx.regs.f, value);
    let iff2 = cx.regs.iff2;
    cx.regs.f.set(Flags::PV, iff2);
}

/// RRD: rotate the low nibbles of A and (HL) right through (HL).
pub(crate) fn rrd(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.regs.hl();
    let m = cx.bus.read(addr);
    let a = cx.regs.a;
    cx.bus.write(addr, (a << 4) | (m >> 4));
    cx.regs.a = (a & 0xF0) | (m & 0x0F);
    nibble_flags(cx);
    Flow::Next
}

/// RLD: rotate the low nibbles of A and (HL) left through (HL).
pub(crate) fn rld(cx: &mut Exec<'_>) -> Flow {
    let addr = cx.regs.hl();
    let m = cx.bus.read(addr);
    let a = cx.regs.a;
    cx.bus.write(addr, (m << 4) | (a & 0x0F));
    cx.regs.a = (a & 0xF0) | (m >> 4);
    nibble_flags(cx);
    Flow::Next
}

fn nibble_flags(cx: &mut Exec<'_>) {
    let a = cx.regs.a;
    cx.regs.f.eval_szp(a);
    cx.regs.f.remove(Flags::H | Flags::N);
}

/// Step HL (and DE) by +1 or -1 per opcode bit 3, decrement BC.
/// Returns the new BC.
fn block_advance(cx: &mut Exec<'_>, with_de: bool) -> u16 {
    let step: u16 = if cx.opcode & 0x08 == 0 { 1 } else { 0xFFFF };
    let r = &mut *cx.regs;
    r.set_hl(r.hl().wrapping_add(step));
    if with_de {
        r.set_de(r.de().wrapping_add(step));
    }
    let bc = r.bc().wrapping_sub(1);
    r.set_bc(bc);
    bc
}

/// Repeating forms (opcode bit 4) rerun the same instruction while
/// `again` holds.
fn block_flow(cx: &Exec<'_>, again: bool) -> Flow {
    match (cx.opcode & 0x10 != 0, again) {
        (false, _) => Flow::Next,
        (true, true) => Flow::Jump(cx.at),
        (true, false) => Flow::Skip,
    }
}

/// LDI / LDD / LDIR / LDDR.
pub(crate) fn block_ld(cx: &mut Exec<'_>) -> Flow {
    let value = cx.bus.read(cx.regs.hl());
    cx.bus.write(cx.regs.de(), value);
    let bc = block_advance(cx, true);

    let f = &mut cx.regs.f;
    f.remove(Flags::H | Flags::N);
    f.set(Flags::PV, bc != 0);
    block_flow(cx, bc != 0)
}

/// CPI / CPD / CPIR / CPDR. C is preserved.
pub(crate) fn block_cp(cx: &mut Exec<'_>) -> Flow {
    let value = cx.bus.read(cx.regs.hl());
    let a = cx.regs.a;
    let result = a.wrapping_sub(value);
    let bc = block_advance(cx, false);

    let f = &mut cx.regs.f;
    f.eval_sz(result);
    f.set(Flags::H, (a & 0x0F) < (value & 0x0F));
    f.set(Flags::PV, bc != 0);
    f.insert(Flags::N);
    block_flow(cx, bc != 0 && result != 0)
}
