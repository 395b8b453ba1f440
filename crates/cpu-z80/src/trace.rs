//! Run logs produced by `Z80::trace`.

use crate::stop::Stop;

/// Parallel logs of a traced run.
///
/// Entry `n` of `instructions` is the instruction that was about to run;
/// entry `n` of `registers` is the register dump after it ran. The last
/// entries belong to the instruction that stopped the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// `"addr: text"` lines, address in four hex digits.
    pub instructions: Vec<String>,
    /// Register dump lines.
    pub registers: Vec<String>,
    /// Why the run ended.
    pub stop: Stop,
}

impl Trace {
    /// Number of instructions executed, including the one that stopped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
