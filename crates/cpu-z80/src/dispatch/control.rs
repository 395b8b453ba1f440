//! Jumps, calls, returns, HALT and the base-page I/O and interrupt
//! instructions.

use super::{Exec, Flow};

pub(crate) fn nop(_: &mut Exec<'_>) -> Flow {
    Flow::Next
}

pub(crate) fn halt(_: &mut Exec<'_>) -> Flow {
    Flow::Halt
}

/// Target of a relative jump: the next instruction plus the signed offset.
fn relative(cx: &mut Exec<'_>) -> u16 {
    let d = cx.byte(0) as i8;
    cx.next_pc().wrapping_add_signed(i16::from(d))
}

/// Branch when `cond` holds, otherwise fall through at the not-taken cost.
fn branch_if(cond: bool, target: u16) -> Flow {
    if cond { Flow::Jump(target) } else { Flow::Skip }
}

pub(crate) fn jp(cx: &mut Exec<'_>) -> Flow {
    Flow::Jump(cx.imm16())
}

pub(crate) fn jp_cc(cx: &mut Exec<'_>) -> Flow {
    let target = cx.imm16();
    branch_if(cx.regs.f.condition(cx.y()), target)
}

/// JP (HL) / JP (IX): jumps to the register's value, not memory.
pub(crate) fn jp_hl(cx: &mut Exec<'_>) -> Flow {
    Flow::Jump(cx.hl())
}

pub(crate) fn jr(cx: &mut Exec<'_>) -> Flow {
    Flow::Jump(relative(cx))
}

/// JR NZ/Z/NC/C. Only the first four conditions exist.
pub(crate) fn jr_cc(cx: &mut Exec<'_>) -> Flow {
    let target = relative(cx);
    branch_if(cx.regs.f.condition(cx.y() & 3), target)
}

pub(crate) fn djnz(cx: &mut Exec<'_>) -> Flow {
    cx.regs.b = cx.regs.b.wrapping_sub(1);
    let target = relative(cx);
    branch_if(cx.regs.b != 0, target)
}

pub(crate) fn call(cx: &mut Exec<'_>) -> Flow {
    let target = cx.imm16();
    cx.push(cx.next_pc());
    Flow::Jump(target)
}

pub(crate) fn call_cc(cx: &mut Exec<'_>) -> Flow {
    if cx.regs.f.condition(cx.y()) {
        call(cx)
    } else {
        Flow::Skip
    }
}

pub(crate) fn ret(cx: &mut Exec<'_>) -> Flow {
    Flow::Jump(cx.pop())
}

pub(crate) fn ret_cc(cx: &mut Exec<'_>) -> Flow {
    if cx.regs.f.condition(cx.y()) {
        ret(cx)
    } else {
        Flow::Skip
    }
}

/// RST p: call to the vector in bits 5-3.
pub(crate) fn rst(cx: &mut Exec<'_>) -> Flow {
    cx.push(cx.next_pc());
    Flow::Jump(u16::from(cx.opcode & 0x38))
}

pub(crate) fn di(cx: &mut Exec<'_>) -> Flow {
    cx.regs.iff1 = false;
    cx.regs.iff2 = false;
    Flow::Next
}

pub(crate) fn ei(cx: &mut Exec<'_>) -> Flow {
    cx.regs.iff1 = true;
    cx.regs.iff2 = true;
    Flow::Next
}

/// OUT (n),A.
pub(crate) fn out_n_a(cx: &mut Exec<'_>) -> Flow {
    let port = cx.imm8();
    cx.bus.write_io(port, cx.regs.a);
    Flow::Next
}

/// IN A,(n). No flags.
pub(crate) fn in_a_n(cx: &mut Exec<'_>) -> Flow {
    let port = cx.imm8();
    cx.regs.a = cx.bus.read_io(port);
    Flow::Next
}
