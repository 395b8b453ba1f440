//! DD and FD pages: HL instructions rewritten for IX or IY.
//!
//! Both pages come from the same builder, parameterized by the index
//! register's name. The handlers are the base-page ones; they pick the
//! active index register from the page they were decoded from.

use super::base::{ALU, alu_names_a};
use super::{ABS, Entry, IMM, IMM16, NONE, R8, idx, ind, op, reg};
use crate::dispatch::{arith, control, load};

pub(super) const fn page(ix: &'static str) -> [Entry; 256] {
    let mut t = [Entry::Invalid; 256];
    let pairs = ["bc", "de", ix, "sp"];

    let mut p = 0;
    while p < 4 {
        t[(p << 4) | 0x09] = Entry::Op(op("add", reg(ix), reg(pairs[p]), 2, 15, arith::add_hl_rp));
        p += 1;
    }

    t[0x21] = Entry::Op(op("ld", reg(ix), IMM16, 4, 14, load::ld_rp_nn));
    t[0x22] = Entry::Op(op("ld", ABS, reg(ix), 4, 20, load::ld_nn_hl));
    t[0x23] = Entry::Op(op("inc", reg(ix), NONE, 2, 10, arith::inc_rp));
    t[0x2A] = Entry::Op(op("ld", reg(ix), ABS, 4, 20, load::ld_hl_nn));
    t[0x2B] = Entry::Op(op("dec", reg(ix), NONE, 2, 10, arith::dec_rp));
    t[0x34] = Entry::Op(op("inc", idx(ix), NONE, 3, 23, arith::inc_r));
    t[0x35] = Entry::Op(op("dec", idx(ix), NONE, 3, 23, arith::dec_r));
    t[0x36] = Entry::Op(op("ld", idx(ix), IMM, 4, 19, load::ld_r_n));

    // ld r,(ix+d) and ld (ix+d),r; H and L stay H and L
    let mut r = 0;
    while r < 8 {
        if r != 6 {
            t[0x46 | (r << 3)] = Entry::Op(op("ld", reg(R8[r]), idx(ix), 3, 19, load::ld_r_r));
            t[0x70 | r] = Entry::Op(op("ld", idx(ix), reg(R8[r]), 3, 19, load::ld_r_r));
        }
        r += 1;
    }

    let mut o = 0;
    while o < 8 {
        let dst = if alu_names_a(o) { reg("a") } else { NONE };
        t[0x86 | (o << 3)] = Entry::Op(op(ALU[o], dst, idx(ix), 3, 19, arith::alu_r));
        o += 1;
    }

    t[0xE1] = Entry::Op(op("pop", reg(ix), NONE, 2, 14, load::pop));
    t[0xE3] = Entry::Op(op("ex", ind("sp"), reg(ix), 2, 23, load::ex_sp_hl));
    t[0xE5] = Entry::Op(op("push", reg(ix), NONE, 2, 15, load::push));
    t[0xE9] = Entry::Op(op("jp", ind(ix), NONE, 2, 8, control::jp_hl));
    t[0xF9] = Entry::Op(op("ld", reg("sp"), reg(ix), 2, 10, load::ld_sp_hl));

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_differ_only_in_register_name() {
        let dd = page("ix");
        let fd = page("iy");
        for (i, (a, b)) in dd.iter().zip(fd.iter()).enumerate() {
            match (a, b) {
                (Entry::Invalid, Entry::Invalid) => {}
                (Entry::Op(a), Entry::Op(b)) => {
                    assert_eq!(a.z80.mnemonic, b.z80.mnemonic, "{i:#04x}");
                    assert_eq!((a.len, a.cycles), (b.len, b.cycles), "{i:#04x}");
                    assert!(a.i8080.is_none());
                }
                _ => panic!("{i:#04x} differs"),
            }
        }
    }

    #[test]
    fn hl_register_names_survive_in_memory_forms() {
        let dd = page("ix");
        let Entry::Op(ld_h) = dd[0x66] else {
            panic!("ld h,(ix+d)")
        };
        assert_eq!((ld_h.z80.dst, ld_h.z80.src), ("h", "ix"));
        assert!(matches!(dd[0x76], Entry::Invalid));
        assert!(matches!(dd[0x44], Entry::Invalid));
    }
}
