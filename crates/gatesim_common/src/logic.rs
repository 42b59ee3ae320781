//! The 0/1/X value carried by every net.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Value of a net during simulation.
///
/// `X` stands for anything not known to be a clean 0 or 1: a net that has not
/// been driven yet, a register before its first capture, or the result of a
/// gate whose inputs leave the answer open. Nets start out as `X`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Driven low.
    Zero = 0,
    /// Driven high.
    One = 1,
    /// Unknown or undriven.
    #[default]
    X = 2,
}

impl Logic {
    /// Parses one vector-file character. `x` and `X` both mean unknown.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::X),
            _ => None,
        }
    }

    /// Character written to output lines. Unknown is always upper-case.
    pub fn symbol(self) -> char {
        match self {
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::X => 'X',
        }
    }

    /// `true` for `Zero` and `One`.
    pub fn is_known(self) -> bool {
        !matches!(self, Logic::X)
    }
}

impl From<bool> for Logic {
    fn from(b: bool) -> Self {
        if b {
            Logic::One
        } else {
            Logic::Zero
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Logic::Zero => "0",
            Logic::One => "1",
            Logic::X => "X",
        })
    }
}

// A 0 on either side decides AND even when the other side is X.
impl BitAnd for Logic {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Logic::Zero, _) | (_, Logic::Zero) => Logic::Zero,
            (Logic::One, Logic::One) => Logic::One,
            _ => Logic::X,
        }
    }
}

// Likewise a 1 decides OR.
impl BitOr for Logic {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Logic::One, _) | (_, Logic::One) => Logic::One,
            (Logic::Zero, Logic::Zero) => Logic::Zero,
            _ => Logic::X,
        }
    }
}

impl Not for Logic {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Logic::Zero => Logic::One,
            Logic::One => Logic::Zero,
            Logic::X => Logic::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Logic::{self, *};

    const ALL: [Logic; 3] = [Zero, One, X];

    #[test]
    fn zero_controls_and() {
        for v in ALL {
            assert_eq!(Zero & v, Zero);
            assert_eq!(v & Zero, Zero);
        }
        assert_eq!(One & One, One);
        assert_eq!(One & X, X);
        assert_eq!(X & X, X);
    }

    #[test]
    fn one_controls_or() {
        for v in ALL {
            assert_eq!(One | v, One);
            assert_eq!(v | One, One);
        }
        assert_eq!(Zero | Zero, Zero);
        assert_eq!(X | Zero, X);
        assert_eq!(X | X, X);
    }

    #[test]
    fn operators_are_symmetric() {
        for a in ALL {
            for b in ALL {
                assert_eq!(a & b, b & a, "{a} & {b}");
                assert_eq!(a | b, b | a, "{a} | {b}");
            }
        }
    }

    #[test]
    fn not_keeps_unknown() {
        assert_eq!(!Zero, One);
        assert_eq!(!One, Zero);
        assert_eq!(!X, X);
    }

    #[test]
    fn nets_start_unknown() {
        assert_eq!(Logic::default(), X);
        assert!(!X.is_known());
        assert!(One.is_known());
    }

    #[test]
    fn vector_characters() {
        let parsed: Vec<Option<Logic>> = "01xXz2".chars().map(Logic::from_char).collect();
        assert_eq!(parsed, vec![Some(Zero), Some(One), Some(X), Some(X), None, None]);
    }

    #[test]
    fn printed_form() {
        let printed: String = ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(printed, "01X");
        assert_eq!(Logic::from(true).symbol(), '1');
        assert_eq!(Logic::from(false).symbol(), '0');
    }
}
