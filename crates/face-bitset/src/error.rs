//! Error type for bitset operations.

use std::fmt;

/// Error type for bitset operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BitsetError {
    /// Bit index at or beyond the bitset's capacity
    IndexOutOfBounds { index: usize, capacity: usize },
    /// Binary operation on bitsets with different face lengths
    SizeMismatch { left: usize, right: usize },
    /// Character other than '0' or '1' in a bit string
    InvalidChar(char),
    /// Bit string whose length is not a multiple of 64
    InvalidLength { len: usize },
    /// Membership probability outside `0.0..=1.0`
    InvalidProbability(f64),
}

impl fmt::Display for BitsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsetError::IndexOutOfBounds { index, capacity } => {
                write!(f, "Index {index} out of bounds for capacity {capacity}")
            }
            BitsetError::SizeMismatch { left, right } => {
                write!(f, "Size mismatch: face length {left} vs {right}")
            }
            BitsetError::InvalidChar(c) => write!(f, "Invalid bit '{c}': must be 0 or 1"),
            BitsetError::InvalidLength { len } => {
                write!(f, "Invalid bit string length {len}: must be a multiple of 64")
            }
            BitsetError::InvalidProbability(p) => {
                write!(f, "Invalid probability {p}: must be in 0.0..=1.0")
            }
        }
    }
}

impl std::error::Error for BitsetError {}
