// src/error.rs

//! Error types for lane decomposition.
//!
//! Note there is deliberately no "no such lane" variant: a positional index
//! past the last lane is answered with `None`, never with an error.

use std::fmt;

/// Error returned when a register snapshot cannot be decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// The word sequence length does not match the claimed register width.
    InvalidWidth {
        /// Number of 64-bit words the width requires.
        expected: usize,
        /// Number of 64-bit words actually supplied.
        actual: usize,
    },
    /// A raw byte dump whose length does not match the register width.
    InvalidByteLength {
        /// Number of bytes the width requires.
        expected: usize,
        /// Number of bytes actually supplied.
        actual: usize,
    },
    /// A register width (in bits) other than 128, 256 or 512.
    UnsupportedBits(u32),
    /// A host vector type name that maps to no known register width.
    UnknownTypeName(String),
    /// Textual input (a word or config value) could not be parsed.
    Parse(String),
    /// The register source could not produce a snapshot.
    Source(String),
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::InvalidWidth { expected, actual } => {
                write!(f, "expected {} 64-bit words, got {}", expected, actual)
            }
            LaneError::InvalidByteLength { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
            LaneError::UnsupportedBits(bits) => {
                write!(f, "unsupported register width: {} bits (expected 128, 256 or 512)", bits)
            }
            LaneError::UnknownTypeName(name) => write!(f, "unknown vector type '{}'", name),
            LaneError::Parse(msg) => write!(f, "parse error: {}", msg),
            LaneError::Source(msg) => write!(f, "register source error: {}", msg),
        }
    }
}

impl std::error::Error for LaneError {}
