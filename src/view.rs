// src/view.rs

//! Host-facing synthetic child provider.
//!
//! Inspection hosts (debugger pretty-printers and the like) drive a synthetic
//! value through a small protocol: refresh it, ask how many children it has,
//! then fetch children by positional index or resolve a child name to an
//! index. `SyntheticView` implements that protocol on top of `decompose`.
//!
//! Where the register bits come from is not this crate's business: the host
//! supplies a `RegisterSource`.

use std::collections::HashMap;

use log::{debug, trace};

use crate::decompose::decompose_as;
use crate::error::LaneError;
use crate::lanes::{Lane, LaneKind, LaneSet};
use crate::register::RegisterWidth;

/// Supplies register snapshots to a view.
///
/// Implementations may read live process memory, a captured trace, simulator
/// state, etc. A snapshot only needs to stay stable for one `read_words` call.
pub trait RegisterSource {
    /// Opaque identifier for one register in the source.
    type Handle;

    /// Returns the register's words, least-significant word first.
    fn read_words(&self, handle: &Self::Handle) -> Result<Vec<u64>, LaneError>;
}

impl<S: RegisterSource + ?Sized> RegisterSource for &S {
    type Handle = S::Handle;

    fn read_words(&self, handle: &Self::Handle) -> Result<Vec<u64>, LaneError> {
        (**self).read_words(handle)
    }
}

/// In-memory source keyed by register name. Useful for captured snapshots
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    registers: HashMap<String, Vec<u64>>,
}

impl SnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the snapshot for `name`.
    pub fn set(&mut self, name: impl Into<String>, words: Vec<u64>) {
        self.registers.insert(name.into(), words);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u64>> {
        self.registers.remove(name)
    }
}

impl RegisterSource for SnapshotSource {
    type Handle = String;

    fn read_words(&self, handle: &String) -> Result<Vec<u64>, LaneError> {
        self.registers
            .get(handle)
            .cloned()
            .ok_or_else(|| LaneError::Source(format!("no snapshot for register '{}'", handle)))
    }
}

/// A register presented to a host as eight synthetic children.
pub struct SyntheticView<S: RegisterSource> {
    source: S,
    handle: S::Handle,
    width: RegisterWidth,
    lanes: Option<LaneSet>, // None until the first successful update.
}

impl<S: RegisterSource> SyntheticView<S> {
    pub fn new(source: S, handle: S::Handle, width: RegisterWidth) -> Self {
        SyntheticView {
            source,
            handle,
            width,
            lanes: None,
        }
    }

    pub fn width(&self) -> RegisterWidth {
        self.width
    }

    /// Re-reads the register and rebuilds every lane.
    ///
    /// Nothing is carried over from the previous refresh. On failure the
    /// previous lanes are dropped too, so a stale snapshot is never shown.
    pub fn update(&mut self) -> Result<(), LaneError> {
        self.lanes = None;
        let words = self.source.read_words(&self.handle)?;
        let lanes = decompose_as(self.width, &words)?;
        trace!("refreshed {} view", self.width.type_name());
        self.lanes = Some(lanes);
        Ok(())
    }

    /// Number of children. Always 8, independent of refresh state.
    pub fn num_children(&self) -> usize {
        LaneKind::COUNT
    }

    /// Child at a positional index.
    ///
    /// Returns `None` for `index >= 8` (and before the first successful
    /// `update`). Hosts probe past the end to find where a listing stops, so
    /// this must stay a silent `None` and never become an error.
    pub fn child_at_index(&self, index: usize) -> Option<&Lane> {
        self.lanes.as_ref()?.get(index)
    }

    /// Resolves a child name to its positional index.
    ///
    /// Accepts `[n]`, a bare `n`, or a lane name such as `u16x8`. Names that
    /// resolve to nothing, including indices past the end, yield `None`.
    pub fn child_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        let positional = name
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(name);
        if let Ok(index) = positional.parse::<usize>() {
            return LaneKind::from_index(index).map(LaneKind::index);
        }
        let found = LaneKind::ALL
            .into_iter()
            .find(|kind| kind.name(self.width) == name)
            .map(LaneKind::index);
        if found.is_none() {
            debug!("no child named '{}' in {} view", name, self.width.type_name());
        }
        found
    }

    /// The lanes from the last successful refresh.
    pub fn lane_set(&self) -> Option<&LaneSet> {
        self.lanes.as_ref()
    }
}
