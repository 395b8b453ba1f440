//! Instruction-set dialect selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which instruction set the core decodes and how it spells it.
///
/// Both dialects share register semantics, flags and timing. The 8080
/// dialect has no prefix pages, no relative jumps and no alternate register
/// set, and uses Intel mnemonics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    #[default]
    Z80,
    #[cfg_attr(feature = "serde", serde(rename = "8080"))]
    I8080,
}

/// Unknown dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect `{0}` (expected z80 or 8080)")]
pub struct ParseDialectError(String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "z80" => Ok(Self::Z80),
            "8080" | "i8080" => Ok(Self::I8080),
            _ => Err(ParseDialectError(s.to_owned())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Z80 => "z80",
            Self::I8080 => "8080",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Z80".parse(), Ok(Dialect::Z80));
        assert_eq!("8080".parse(), Ok(Dialect::I8080));
        assert_eq!("i8080".parse(), Ok(Dialect::I8080));
        assert!("6502".parse::<Dialect>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for d in [Dialect::Z80, Dialect::I8080] {
            assert_eq!(d.to_string().parse(), Ok(d));
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = "6809".parse::<Dialect>().unwrap_err();
        let expected = "unknown dialect `6809` (expected z80 or 8080)";
        assert_eq!(err.to_string(), expected);
    }
}
