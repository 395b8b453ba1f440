//! ED page: Z80-only I/O, 16-bit arithmetic, interrupt control and block
//! instructions.

use super::{ABS, Entry, NONE, R8, RP, ind, op, reg};
use crate::dispatch::{Handler, extended as ed};

const IM: [&str; 3] = ["0", "1", "2"];
const BLOCK: [[&str; 4]; 2] = [
    ["ldi", "ldd", "ldir", "lddr"],
    ["cpi", "cpd", "cpir", "cpdr"],
];

pub(super) const fn page() -> [Entry; 256] {
    let mut t = [Entry::Invalid; 256];

    // in r,(c) / out (c),r; the (hl) slot is undocumented and left out
    let mut r = 0;
    while r < 8 {
        if r != 6 {
            let row = 0x40 | (r << 3);
            t[row] = Entry::Op(op("in", reg(R8[r]), ind("c"), 2, 12, ed::in_r_c));
            t[row | 0x01] = Entry::Op(op("out", ind("c"), reg(R8[r]), 2, 12, ed::out_c_r));
        }
        r += 1;
    }

    let mut p = 0;
    while p < 4 {
        let row = 0x40 | (p << 4);
        t[row | 0x02] = Entry::Op(op("sbc", reg("hl"), reg(RP[p]), 2, 15, ed::sbc_hl_rp));
        t[row | 0x03] = Entry::Op(op("ld", ABS, reg(RP[p]), 4, 20, ed::ld_nn_rp));
        t[row | 0x0A] = Entry::Op(op("adc", reg("hl"), reg(RP[p]), 2, 15, ed::adc_hl_rp));
        t[row | 0x0B] = Entry::Op(op("ld", reg(RP[p]), ABS, 4, 20, ed::ld_rp_mem));
        p += 1;
    }

    t[0x44] = Entry::Op(op("neg", NONE, NONE, 2, 8, ed::neg));
    t[0x45] = Entry::Op(op("retn", NONE, NONE, 2, 14, ed::retn));
    t[0x4D] = Entry::Op(op("reti", NONE, NONE, 2, 14, ed::reti));
    t[0x46] = Entry::Op(op("im", reg(IM[0]), NONE, 2, 8, ed::im));
    t[0x56] = Entry::Op(op("im", reg(IM[1]), NONE, 2, 8, ed::im));
    t[0x5E] = Entry::Op(op("im", reg(IM[2]), NONE, 2, 8, ed::im));
    t[0x47] = Entry::Op(op("ld", reg("i"), reg("a"), 2, 9, ed::ld_i_a));
    t[0x4F] = Entry::Op(op("ld", reg("r"), reg("a"), 2, 9, ed::ld_r_a));
    t[0x57] = Entry::Op(op("ld", reg("a"), reg("i"), 2, 9, ed::ld_a_i));
    t[0x5F] = Entry::Op(op("ld", reg("a"), reg("r"), 2, 9, ed::ld_a_r));
    t[0x67] = Entry::Op(op("rrd", NONE, NONE, 2, 18, ed::rrd));
    t[0x6F] = Entry::Op(op("rld", NONE, NONE, 2, 18, ed::rld));

    // A0-B9: bit 0 selects compare, bit 3 decrement, bit 4 repeat
    let mut i = 0;
    while i < 8 {
        let compare = i & 1;
        let step = i >> 1;
        let opcode = 0xA0 | ((step & 2) << 3) | ((step & 1) << 3) | compare;
        let exec: Handler = if compare == 0 {
            ed::block_ld
        } else {
            ed::block_cp
        };
        let name = BLOCK[compare][step];
        t[opcode] = Entry::Op(if step >= 2 {
            op(name, NONE, NONE, 2, 21, exec).not_taken(16)
        } else {
            op(name, NONE, NONE, 2, 16, exec)
        });
        i += 1;
    }

    t
}
