use core::fmt;

/// Which constant table a derivation check refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    /// `K[0..64)`, cube roots of the first 64 primes.
    RoundConstants,
    /// `H[0..8)`, square roots of the first 8 primes.
    InitialState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The message bit length does not fit in the 64-bit length field.
    InputTooLarge { len: usize },
    /// A hardcoded constant disagrees with its derivation.
    ConstantMismatch {
        table: Table,
        index: usize,
        expected: u32,
        derived: u32,
    },
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::RoundConstants => f.write_str("K"),
            Table::InitialState => f.write_str("H"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputTooLarge { len } => {
                write!(f, "message of {} bytes exceeds 2^64 - 1 bits", len)
            }
            Error::ConstantMismatch { table, index, expected, derived } => write!(
                f,
                "{}[{}] is {:#010x} but derives to {:#010x}",
                table, index, expected, derived
            ),
        }
    }
}

impl std::error::Error for Error {}
