// src/lanes.rs

//! Lane kinds and the typed lane views produced by decomposition.
//!
//! A `LaneSet` always holds exactly eight `Lane`s, ordered as
//! `u8, i8, u16, i16, u32, i32, u64, i64`. Host tools enumerate them by
//! positional index, so the order is part of the public contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::register::{RegisterWidth, WORD_BITS};

/// Element width and signedness of one lane interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LaneKind {
    U8 = 0,
    I8 = 1,
    U16 = 2,
    I16 = 3,
    U32 = 4,
    I32 = 5,
    U64 = 6,
    I64 = 7,
}

impl LaneKind {
    /// Number of lane kinds; every `LaneSet` has exactly this many entries.
    pub const COUNT: usize = 8;

    /// All kinds in positional order.
    pub const ALL: [LaneKind; LaneKind::COUNT] = [
        LaneKind::U8,
        LaneKind::I8,
        LaneKind::U16,
        LaneKind::I16,
        LaneKind::U32,
        LaneKind::I32,
        LaneKind::U64,
        LaneKind::I64,
    ];

    /// Positional index (0..8) of this kind.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at a positional index. Indices past the last kind yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Element width in bits.
    pub const fn bit_width(self) -> u32 {
        match self {
            LaneKind::U8 | LaneKind::I8 => 8,
            LaneKind::U16 | LaneKind::I16 => 16,
            LaneKind::U32 | LaneKind::I32 => 32,
            LaneKind::U64 | LaneKind::I64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, LaneKind::I8 | LaneKind::I16 | LaneKind::I32 | LaneKind::I64)
    }

    /// Mask selecting the low `bit_width()` bits of a word.
    pub const fn mask(self) -> u64 {
        match self.bit_width() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// The same-width kind of opposite signedness (`u8` <-> `i8`, ...).
    pub const fn counterpart(self) -> Self {
        match self {
            LaneKind::U8 => LaneKind::I8,
            LaneKind::I8 => LaneKind::U8,
            LaneKind::U16 => LaneKind::I16,
            LaneKind::I16 => LaneKind::U16,
            LaneKind::U32 => LaneKind::I32,
            LaneKind::I32 => LaneKind::U32,
            LaneKind::U64 => LaneKind::I64,
            LaneKind::I64 => LaneKind::U64,
        }
    }

    /// Short element type name, e.g. `u8` or `i32`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            LaneKind::U8 => "u8",
            LaneKind::I8 => "i8",
            LaneKind::U16 => "u16",
            LaneKind::I16 => "i16",
            LaneKind::U32 => "u32",
            LaneKind::I32 => "i32",
            LaneKind::U64 => "u64",
            LaneKind::I64 => "i64",
        }
    }

    /// Number of elements this kind has in a register of `width`.
    pub const fn count(self, width: RegisterWidth) -> usize {
        (width.bits() / self.bit_width()) as usize
    }

    /// Lane name as shown to the user: `<u|i><bits>x<count>`, e.g. `i32x8`.
    pub fn name(self, width: RegisterWidth) -> String {
        format!("{}x{}", self.mnemonic(), self.count(width))
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Typed element storage for one lane, least-significant element first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneValues {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    U64(Vec<u64>),
    I64(Vec<i64>),
}

// Runs `$body` with `$v` bound to the inner vector, whatever its element type.
macro_rules! with_values {
    ($values:expr, $v:ident => $body:expr) => {
        match $values {
            LaneValues::U8($v) => $body,
            LaneValues::I8($v) => $body,
            LaneValues::U16($v) => $body,
            LaneValues::I16($v) => $body,
            LaneValues::U32($v) => $body,
            LaneValues::I32($v) => $body,
            LaneValues::U64($v) => $body,
            LaneValues::I64($v) => $body,
        }
    };
}

impl LaneValues {
    /// Builds typed values from already-masked raw element patterns.
    ///
    /// Signed kinds reinterpret the pattern as two's complement at the lane
    /// width; the `as` casts truncate first, so the sign bit is bit L-1.
    pub fn from_patterns<I>(kind: LaneKind, patterns: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let patterns = patterns.into_iter();
        match kind {
            LaneKind::U8 => LaneValues::U8(patterns.map(|p| p as u8).collect()),
            LaneKind::I8 => LaneValues::I8(patterns.map(|p| p as u8 as i8).collect()),
            LaneKind::U16 => LaneValues::U16(patterns.map(|p| p as u16).collect()),
            LaneKind::I16 => LaneValues::I16(patterns.map(|p| p as u16 as i16).collect()),
            LaneKind::U32 => LaneValues::U32(patterns.map(|p| p as u32).collect()),
            LaneKind::I32 => LaneValues::I32(patterns.map(|p| p as u32 as i32).collect()),
            LaneKind::U64 => LaneValues::U64(patterns.collect()),
            LaneKind::I64 => LaneValues::I64(patterns.map(|p| p as i64).collect()),
        }
    }

    pub fn kind(&self) -> LaneKind {
        match self {
            LaneValues::U8(_) => LaneKind::U8,
            LaneValues::I8(_) => LaneKind::I8,
            LaneValues::U16(_) => LaneKind::U16,
            LaneValues::I16(_) => LaneKind::I16,
            LaneValues::U32(_) => LaneKind::U32,
            LaneValues::I32(_) => LaneKind::I32,
            LaneValues::U64(_) => LaneKind::U64,
            LaneValues::I64(_) => LaneKind::I64,
        }
    }

    pub fn len(&self) -> usize {
        with_values!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bit pattern of element `index`, zero-extended to 64 bits.
    pub fn bits(&self, index: usize) -> Option<u64> {
        match self {
            LaneValues::U8(v) => v.get(index).map(|&x| x as u64),
            LaneValues::I8(v) => v.get(index).map(|&x| x as u8 as u64),
            LaneValues::U16(v) => v.get(index).map(|&x| x as u64),
            LaneValues::I16(v) => v.get(index).map(|&x| x as u16 as u64),
            LaneValues::U32(v) => v.get(index).map(|&x| x as u64),
            LaneValues::I32(v) => v.get(index).map(|&x| x as u32 as u64),
            LaneValues::U64(v) => v.get(index).copied(),
            LaneValues::I64(v) => v.get(index).map(|&x| x as u64),
        }
    }

    /// Iterates the raw bit patterns of all elements, in order.
    pub fn patterns(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len()).filter_map(move |i| self.bits(i))
    }

    /// Packs the elements back into 64-bit words, least-significant first.
    pub fn to_words(&self) -> Vec<u64> {
        let lane_bits = self.kind().bit_width();
        let per_word = (WORD_BITS / lane_bits) as usize;
        let mut words = vec![0u64; self.len().div_ceil(per_word)];
        for (k, pattern) in self.patterns().enumerate() {
            let shift = (k % per_word) as u32 * lane_bits;
            words[k / per_word] |= pattern << shift;
        }
        words
    }

    /// Element `index` in its natural decimal form.
    pub fn render(&self, index: usize) -> Option<String> {
        with_values!(self, v => v.get(index).map(|x| x.to_string()))
    }

    /// All elements in natural decimal form.
    pub fn rendered(&self) -> Vec<String> {
        with_values!(self, v => v.iter().map(|x| x.to_string()).collect())
    }
}

/// One named lane interpretation of a register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub kind: LaneKind,
    /// Display name, e.g. `u16x8`.
    pub name: String,
    pub values: LaneValues,
}

impl Lane {
    pub fn new(kind: LaneKind, width: RegisterWidth, values: LaneValues) -> Self {
        debug_assert_eq!(values.kind(), kind);
        debug_assert_eq!(values.len(), kind.count(width));
        Lane {
            kind,
            name: kind.name(width),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Lane {
    /// Renders as `name = {e0, e1, ...}` with decimal elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {{{}}}", self.name, self.values.rendered().join(", "))
    }
}

/// All eight lane interpretations of one register snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSet {
    width: RegisterWidth,
    lanes: Vec<Lane>, // Always LaneKind::COUNT entries, in LaneKind::ALL order.
}

impl LaneSet {
    /// Assembles a set from lanes given in `LaneKind::ALL` order.
    pub(crate) fn from_lanes(width: RegisterWidth, lanes: Vec<Lane>) -> Self {
        debug_assert!(lanes.iter().map(|l| l.kind).eq(LaneKind::ALL));
        LaneSet { width, lanes }
    }

    pub fn width(&self) -> RegisterWidth {
        self.width
    }

    /// Number of lane views. Always 8.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Lane at a positional index.
    ///
    /// Indices past the last lane return `None` rather than an error: host
    /// tools enumerate children by probing increasing indices until nothing
    /// comes back, so running off the end is the normal way a listing stops.
    pub fn get(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    pub fn by_kind(&self, kind: LaneKind) -> &Lane {
        &self.lanes[kind.index()]
    }

    /// Lane by display name, e.g. `i32x8`.
    pub fn by_name(&self, name: &str) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lane> {
        self.lanes.iter()
    }
}

impl<'a> IntoIterator for &'a LaneSet {
    type Item = &'a Lane;
    type IntoIter = std::slice::Iter<'a, Lane>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}

impl fmt::Display for LaneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", lane)?;
        }
        Ok(())
    }
}
