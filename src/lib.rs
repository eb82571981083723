//! Typed lane views of wide SIMD registers.
//!
//! A 128, 256 or 512-bit register value is split into every standard integer
//! lane interpretation (`u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`),
//! each exposed as a named, independently addressable view. The raw bits are
//! never lost: every lane packs back into the original words.

pub mod config;
pub mod decompose;
pub mod error;
pub mod lanes;
pub mod register;
pub mod render;
pub mod view;

pub use decompose::{
    decompose, decompose_as, decompose_batch, decompose_words, LaneView, LaneView128, LaneView256,
    LaneView512,
};
pub use error::LaneError;
pub use lanes::{Lane, LaneKind, LaneSet, LaneValues};
pub use register::{RawRegister, Reg128, Reg256, Reg512, RegisterWidth};
pub use view::{RegisterSource, SnapshotSource, SyntheticView};
