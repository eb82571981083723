// src/decompose.rs

//! Splits a raw register into its eight lane interpretations.
//!
//! There is a single extraction routine shared by every width and every
//! lane kind. Widths only differ in their word count `N`, and signed kinds
//! only differ from their unsigned counterparts in how the extracted bit
//! pattern is cast.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::error::LaneError;
use crate::lanes::{Lane, LaneKind, LaneSet, LaneValues};
use crate::register::{RawRegister, RegisterWidth, SupportedWordCount, WordCount, WORD_BITS};

/// Yields the raw bit patterns of every `kind`-wide element in `words`,
/// lowest bits of word 0 first.
///
/// Element `k` is `(words[k*L/64] >> ((k*L) % 64)) & mask`. Lane widths all
/// divide 64, so an element never crosses a word boundary.
fn extract(words: &[u64], kind: LaneKind) -> impl Iterator<Item = u64> + '_ {
    let lane_bits = kind.bit_width();
    let mask = kind.mask();
    debug_assert_eq!(WORD_BITS % lane_bits, 0);
    let per_word = WORD_BITS / lane_bits;
    words
        .iter()
        .flat_map(move |&word| (0..per_word).map(move |i| (word >> (i * lane_bits)) & mask))
}

fn decompose_slice(width: RegisterWidth, words: &[u64]) -> LaneSet {
    debug_assert_eq!(words.len(), width.words());
    trace!("decomposing {}-bit register: {:x?}", width.bits(), words);
    let lanes = LaneKind::ALL
        .iter()
        .map(|&kind| {
            let values = LaneValues::from_patterns(kind, extract(words, kind));
            Lane::new(kind, width, values)
        })
        .collect();
    LaneSet::from_lanes(width, lanes)
}

/// Decomposes a register into its eight lanes. Total and pure.
pub fn decompose<const N: usize>(register: &RawRegister<N>) -> LaneSet
where
    WordCount<N>: SupportedWordCount,
{
    decompose_slice(register.width(), register.words())
}

/// Decomposes a word slice whose length selects the register width
/// (2, 4 or 8 words).
pub fn decompose_words(words: &[u64]) -> Result<LaneSet, LaneError> {
    match RegisterWidth::from_words(words.len()) {
        Some(width) => Ok(decompose_slice(width, words)),
        None => {
            // Report the nearest width that could hold the input.
            let expected = RegisterWidth::ALL
                .iter()
                .map(|w| w.words())
                .find(|&n| n >= words.len())
                .unwrap_or(RegisterWidth::W512.words());
            debug!("rejecting register snapshot of {} words", words.len());
            Err(LaneError::InvalidWidth {
                expected,
                actual: words.len(),
            })
        }
    }
}

/// Decomposes a word slice the caller claims is `width` wide.
pub fn decompose_as(width: RegisterWidth, words: &[u64]) -> Result<LaneSet, LaneError> {
    if words.len() != width.words() {
        debug!(
            "{}-bit register snapshot has {} words, expected {}",
            width.bits(),
            words.len(),
            width.words()
        );
        return Err(LaneError::InvalidWidth {
            expected: width.words(),
            actual: words.len(),
        });
    }
    Ok(decompose_slice(width, words))
}

/// Decomposes many registers of the same width. Each register is handled
/// independently; the output order matches the input order.
pub fn decompose_batch<const N: usize>(registers: &[RawRegister<N>]) -> Vec<LaneSet>
where
    WordCount<N>: SupportedWordCount,
{
    registers.iter().map(decompose::<N>).collect()
}

/// Width-specific lane view. Zero-sized; exists so callers can name the
/// decomposer for a width as a type (`LaneView256::decompose(...)`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneView<const N: usize> {
    _words: PhantomData<[u64; N]>,
}

pub type LaneView128 = LaneView<2>;
pub type LaneView256 = LaneView<4>;
pub type LaneView512 = LaneView<8>;

impl<const N: usize> LaneView<N>
where
    WordCount<N>: SupportedWordCount,
{
    pub const WIDTH: RegisterWidth = <WordCount<N> as SupportedWordCount>::WIDTH;

    pub fn decompose(register: &RawRegister<N>) -> LaneSet {
        decompose(register)
    }

    /// Like `decompose`, but from an unchecked slice.
    pub fn decompose_words(words: &[u64]) -> Result<LaneSet, LaneError> {
        decompose_as(Self::WIDTH, words)
    }
}

#[cfg(test)]
mod tests;
