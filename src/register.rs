// src/register.rs

//! Raw register snapshots and the supported register widths.
//!
//! A register is held as an array of 64-bit words in little-endian word
//! order: word 0 carries the least-significant 64 bits.

use serde::{Deserialize, Serialize};

use crate::error::LaneError;

/// Size of the extraction unit, in bits. Every lane width divides it evenly,
/// so no lane element ever straddles two words.
pub const WORD_BITS: u32 = 64;

/// The register widths a lane view can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterWidth {
    #[serde(rename = "128")]
    W128,
    #[serde(rename = "256")]
    W256,
    #[serde(rename = "512")]
    W512,
}

impl RegisterWidth {
    /// All supported widths, narrowest first.
    pub const ALL: [RegisterWidth; 3] = [RegisterWidth::W128, RegisterWidth::W256, RegisterWidth::W512];

    /// Total width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            RegisterWidth::W128 => 128,
            RegisterWidth::W256 => 256,
            RegisterWidth::W512 => 512,
        }
    }

    /// Number of 64-bit words backing a register of this width.
    pub const fn words(self) -> usize {
        (self.bits() / WORD_BITS) as usize
    }

    pub fn from_bits(bits: u32) -> Result<Self, LaneError> {
        match bits {
            128 => Ok(RegisterWidth::W128),
            256 => Ok(RegisterWidth::W256),
            512 => Ok(RegisterWidth::W512),
            other => Err(LaneError::UnsupportedBits(other)),
        }
    }

    /// Width whose backing word count is exactly `words`, if any.
    pub fn from_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.words() == words)
    }

    /// The integer vector type a host formatter is registered against.
    pub const fn type_name(self) -> &'static str {
        match self {
            RegisterWidth::W128 => "__m128i",
            RegisterWidth::W256 => "__m256i",
            RegisterWidth::W512 => "__m512i",
        }
    }

    pub fn from_type_name(name: &str) -> Result<Self, LaneError> {
        Self::ALL
            .into_iter()
            .find(|w| w.type_name() == name.trim())
            .ok_or_else(|| LaneError::UnknownTypeName(name.to_string()))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level word count, used to restrict `RawRegister<N>` operations to the
/// supported widths at compile time.
pub struct WordCount<const N: usize>;

impl<const N: usize> sealed::Sealed for WordCount<N> {}

/// Implemented only for the word counts of 128, 256 and 512-bit registers.
pub trait SupportedWordCount: sealed::Sealed {
    const WIDTH: RegisterWidth;
}

impl SupportedWordCount for WordCount<2> {
    const WIDTH: RegisterWidth = RegisterWidth::W128;
}

impl SupportedWordCount for WordCount<4> {
    const WIDTH: RegisterWidth = RegisterWidth::W256;
}

impl SupportedWordCount for WordCount<8> {
    const WIDTH: RegisterWidth = RegisterWidth::W512;
}

/// An immutable snapshot of an `N`-word register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRegister<const N: usize> {
    words: [u64; N],
}

pub type Reg128 = RawRegister<2>;
pub type Reg256 = RawRegister<4>;
pub type Reg512 = RawRegister<8>;

impl<const N: usize> RawRegister<N> {
    pub const fn new(words: [u64; N]) -> Self {
        RawRegister { words }
    }

    /// Builds a register from a slice, failing fast when the slice does not
    /// hold exactly `N` words.
    pub fn from_words(words: &[u64]) -> Result<Self, LaneError> {
        let words: [u64; N] = words.try_into().map_err(|_| LaneError::InvalidWidth {
            expected: N,
            actual: words.len(),
        })?;
        Ok(RawRegister { words })
    }

    /// Builds a register from a little-endian byte dump (`N * 8` bytes).
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, LaneError> {
        if bytes.len() != N * 8 {
            return Err(LaneError::InvalidByteLength {
                expected: N * 8,
                actual: bytes.len(),
            });
        }
        let mut words = [0u64; N];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        Ok(RawRegister { words })
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    pub fn words(&self) -> &[u64; N] {
        &self.words
    }

    pub const fn bits(&self) -> u32 {
        N as u32 * WORD_BITS
    }
}

impl<const N: usize> RawRegister<N>
where
    WordCount<N>: SupportedWordCount,
{
    /// The register width this word count corresponds to.
    pub fn width(&self) -> RegisterWidth {
        <WordCount<N> as SupportedWordCount>::WIDTH
    }
}

impl<const N: usize> From<[u64; N]> for RawRegister<N> {
    fn from(words: [u64; N]) -> Self {
        RawRegister::new(words)
    }
}

/// Parses one 64-bit word, either hex (`0x` prefix) or decimal.
/// Underscores are accepted as digit separators.
pub fn parse_word(text: &str) -> Result<u64, LaneError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    let parsed = match cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse::<u64>(),
    };
    parsed.map_err(|e| LaneError::Parse(format!("'{}': {}", text, e)))
}
