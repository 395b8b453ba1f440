//! Unprefixed opcodes, shared with the 8080.

use super::Page;
use super::{
    ABS, CC, Entry, IMM, IMM16, NONE, PORT, R8_8080, REL, RP, RP_8080, cond, ind, op, r8, reg,
};
use crate::dispatch::{arith, control, load};

pub(super) const ALU: [&str; 8] = ["add", "adc", "sub", "sbc", "and", "xor", "or", "cp"];
const ALU_8080: [&str; 8] = ["add", "adc", "sub", "sbb", "ana", "xra", "ora", "cmp"];
const ALU_IMM_8080: [&str; 8] = ["adi", "aci", "sui", "sbi", "ani", "xri", "ori", "cpi"];
const JP_8080: [&str; 8] = ["jnz", "jz", "jnc", "jc", "jpo", "jpe", "jp", "jm"];
const CALL_8080: [&str; 8] = ["cnz", "cz", "cnc", "cc", "cpo", "cpe", "cp", "cm"];
const RET_8080: [&str; 8] = ["rnz", "rz", "rnc", "rc", "rpo", "rpe", "rp", "rm"];
const RST: [&str; 8] = ["$00", "$08", "$10", "$18", "$20", "$28", "$30", "$38"];
const RST_8080: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];
const PUSH: [&str; 4] = ["bc", "de", "hl", "af"];
const PUSH_8080: [&str; 4] = ["b", "d", "h", "psw"];

/// ADD, ADC and SBC name the accumulator in Zilog syntax; the rest don't.
pub(super) const fn alu_names_a(op: usize) -> bool {
    matches!(op, 0 | 1 | 3)
}

pub(super) const fn page() -> [Entry; 256] {
    let mut t = [Entry::Invalid; 256];

    // Register-pair column: ld rr,nn / inc rr / add hl,rr / dec rr
    let mut p = 0;
    while p < 4 {
        let row = p << 4;
        t[row | 0x01] = Entry::Op(
            op("ld", reg(RP[p]), IMM16, 3, 10, load::ld_rp_nn).intel("lxi", RP_8080[p], ""),
        );
        t[row | 0x03] = Entry::Op(
            op("inc", reg(RP[p]), NONE, 1, 6, arith::inc_rp).intel("inx", RP_8080[p], ""),
        );
        t[row | 0x09] = Entry::Op(
            op("add", reg("hl"), reg(RP[p]), 1, 11, arith::add_hl_rp).intel("dad", "", RP_8080[p]),
        );
        t[row | 0x0B] = Entry::Op(
            op("dec", reg(RP[p]), NONE, 1, 6, arith::dec_rp).intel("dcx", RP_8080[p], ""),
        );
        p += 1;
    }

    // 8-bit column: inc r / dec r / ld r,n
    let mut r = 0;
    while r < 8 {
        let row = r << 3;
        let dst = r8(r as u8);
        let (inc_cycles, ld_cycles) = if r == 6 { (11, 10) } else { (4, 7) };
        t[row | 0x04] = Entry::Op(
            op("inc", dst, NONE, 1, inc_cycles, arith::inc_r).intel("inr", R8_8080[r], ""),
        );
        t[row | 0x05] = Entry::Op(
            op("dec", dst, NONE, 1, inc_cycles, arith::dec_r).intel("dcr", R8_8080[r], ""),
        );
        t[row | 0x06] = Entry::Op(
            op("ld", dst, IMM, 2, ld_cycles, load::ld_r_n).intel("mvi", R8_8080[r], ""),
        );
        r += 1;
    }

    t[0x00] = Entry::Op(
        op("nop", NONE, NONE, 1, 4, control::nop).intel("nop", "", ""),
    );
    t[0x02] = Entry::Op(
        op("ld", ind("bc"), reg("a"), 1, 7, load::ld_ind_a).intel("stax", "b", ""),
    );
    t[0x07] = Entry::Op(
        op("rlca", NONE, NONE, 1, 4, arith::rlca).intel("rlc", "", ""),
    );
    t[0x08] = Entry::Op(op("ex", reg("af"), reg("af'"), 1, 4, load::ex_af));
    t[0x0A] = Entry::Op(
        op("ld", reg("a"), ind("bc"), 1, 7, load::ld_a_ind).intel("ldax", "", "b"),
    );
    t[0x0F] = Entry::Op(
        op("rrca", NONE, NONE, 1, 4, arith::rrca).intel("rrc", "", ""),
    );

    t[0x10] = Entry::Op(op("djnz", REL, NONE, 2, 13, control::djnz).not_taken(8));
    t[0x12] = Entry::Op(
        op("ld", ind("de"), reg("a"), 1, 7, load::ld_ind_a).intel("stax", "d", ""),
    );
    t[0x17] = Entry::Op(op("rla", NONE, NONE, 1, 4, arith::rla).intel("ral", "", ""));
    t[0x18] = Entry::Op(op("jr", REL, NONE, 2, 12, control::jr));
    t[0x1A] = Entry::Op(
        op("ld", reg("a"), ind("de"), 1, 7, load::ld_a_ind).intel("ldax", "", "d"),
    );
    t[0x1F] = Entry::Op(op("rra", NONE, NONE, 1, 4, arith::rra).intel("rar", "", ""));

    let mut cc = 0;
    while cc < 4 {
        t[0x20 | (cc << 3)] = Entry::Op(
            op("jr", cond(CC[cc]), REL, 2, 12, control::jr_cc).not_taken(7),
        );
        cc += 1;
    }

    t[0x22] = Entry::Op(
        op("ld", ABS, reg("hl"), 3, 16, load::ld_nn_hl).intel("shld", "", ""),
    );
    t[0x27] = Entry::Op(op("daa", NONE, NONE, 1, 4, arith::daa).intel("daa", "", ""));
    t[0x2A] = Entry::Op(
        op("ld", reg("hl"), ABS, 3, 16, load::ld_hl_nn).intel("lhld", "", ""),
    );
    t[0x2F] = Entry::Op(op("cpl", NONE, NONE, 1, 4, arith::cpl).intel("cma", "", ""));
    t[0x32] = Entry::Op(
        op("ld", ABS, reg("a"), 3, 13, load::ld_nn_a).intel("sta", "", ""),
    );
    t[0x37] = Entry::Op(op("scf", NONE, NONE, 1, 4, arith::scf).intel("stc", "", ""));
    t[0x3A] = Entry::Op(
        op("ld", reg("a"), ABS, 3, 13, load::ld_a_nn).intel("lda", "", ""),
    );
    t[0x3F] = Entry::Op(op("ccf", NONE, NONE, 1, 4, arith::ccf).intel("cmc", "", ""));

    // 40-7F: ld r,r' with HALT in place of ld (hl),(hl)
    let mut i = 0x40;
    while i < 0x80 {
        let d = (i >> 3) & 7;
        let s = i & 7;
        t[i] = if i == 0x76 {
            Entry::Op(
                op("halt", NONE, NONE, 1, 4, control::halt).intel("hlt", "", ""),
            )
        } else {
            let cycles = if d == 6 || s == 6 { 7 } else { 4 };
            Entry::Op(
                op("ld", r8(d as u8), r8(s as u8), 1, cycles, load::ld_r_r)
                    .intel("mov", R8_8080[d], R8_8080[s]),
            )
        };
        i += 1;
    }

    // 80-BF: accumulator group
    while i < 0xC0 {
        let o = (i >> 3) & 7;
        let s = i & 7;
        let dst = if alu_names_a(o) { reg("a") } else { NONE };
        let cycles = if s == 6 { 7 } else { 4 };
        t[i] = Entry::Op(
            op(ALU[o], dst, r8(s as u8), 1, cycles, arith::alu_r)
                .intel(ALU_8080[o], "", R8_8080[s]),
        );
        i += 1;
    }

    // C0-FF: one row per condition code or restart vector
    let mut n = 0;
    while n < 8 {
        let row = 0xC0 | (n << 3);
        t[row] = Entry::Op(
            op("ret", cond(CC[n]), NONE, 1, 11, control::ret_cc)
                .not_taken(5)
                .intel(RET_8080[n], "", ""),
        );
        t[row | 0x02] = Entry::Op(
            op("jp", cond(CC[n]), IMM16, 3, 10, control::jp_cc).intel(JP_8080[n], "", ""),
        );
        t[row | 0x04] = Entry::Op(
            op("call", cond(CC[n]), IMM16, 3, 17, control::call_cc)
                .not_taken(10)
                .intel(CALL_8080[n], "", ""),
        );
        let dst = if alu_names_a(n) { reg("a") } else { NONE };
        t[row | 0x06] = Entry::Op(
            op(ALU[n], dst, IMM, 2, 7, arith::alu_n).intel(ALU_IMM_8080[n], "", ""),
        );
        t[row | 0x07] = Entry::Op(
            op("rst", reg(RST[n]), NONE, 1, 11, control::rst).intel("rst", RST_8080[n], ""),
        );
        n += 1;
    }

    let mut p = 0;
    while p < 4 {
        let row = 0xC0 | (p << 4);
        t[row | 0x01] = Entry::Op(
            op("pop", reg(PUSH[p]), NONE, 1, 10, load::pop).intel("pop", PUSH_8080[p], ""),
        );
        t[row | 0x05] = Entry::Op(
            op("push", reg(PUSH[p]), NONE, 1, 11, load::push).intel("push", PUSH_8080[p], ""),
        );
        p += 1;
    }

    t[0xC3] = Entry::Op(
        op("jp", IMM16, NONE, 3, 10, control::jp).intel("jmp", "", ""),
    );
    t[0xC9] = Entry::Op(
        op("ret", NONE, NONE, 1, 10, control::ret).intel("ret", "", ""),
    );
    t[0xCD] = Entry::Op(
        op("call", IMM16, NONE, 3, 17, control::call).intel("call", "", ""),
    );
    t[0xD3] = Entry::Op(
        op("out", PORT, reg("a"), 2, 11, control::out_n_a).intel("out", "", ""),
    );
    t[0xD9] = Entry::Op(op("exx", NONE, NONE, 1, 4, load::exx));
    t[0xDB] = Entry::Op(
        op("in", reg("a"), PORT, 2, 11, control::in_a_n).intel("in", "", ""),
    );
    t[0xDD] = Entry::Prefix(Page::Dd);
    t[0xE3] = Entry::Op(
        op("ex", ind("sp"), reg("hl"), 1, 19, load::ex_sp_hl).intel("xthl", "", ""),
    );
    t[0xE9] = Entry::Op(
        op("jp", ind("hl"), NONE, 1, 4, control::jp_hl).intel("pchl", "", ""),
    );
    t[0xEB] = Entry::Op(
        op("ex", reg("de"), reg("hl"), 1, 4, load::ex_de_hl).intel("xchg", "", ""),
    );
    t[0xED] = Entry::Prefix(Page::Ed);
    t[0xF3] = Entry::Op(op("di", NONE, NONE, 1, 4, control::di).intel("di", "", ""));
    t[0xF9] = Entry::Op(
        op("ld", reg("sp"), reg("hl"), 1, 6, load::ld_sp_hl).intel("sphl", "", ""),
    );
    t[0xFB] = Entry::Op(op("ei", NONE, NONE, 1, 4, control::ei).intel("ei", "", ""));
    t[0xFD] = Entry::Prefix(Page::Fd);

    t
}
