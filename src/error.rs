//! Error types for domain violations.

use std::fmt;

/// Errors reported for inputs outside an operation's documented domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The digit-permutation operations require a positive integer.
    NotPositive,

    /// The successor permutation exists but does not fit in a `u64`.
    Overflow,

    /// Roman-numeral encoding supports 1..=39.
    RomanOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotPositive => {
                write!(f, "input must be a positive integer")
            }
            Error::Overflow => {
                write!(f, "successor permutation does not fit in a u64")
            }
            Error::RomanOutOfRange(n) => {
                write!(f, "roman numeral out of range: need 1..=39, got {}", n)
            }
        }
    }
}

impl std::error::Error for Error {}
