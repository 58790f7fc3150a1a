//! A single stop on a single line.

use mr_core::{LineId, StationId};

/// One stop on one line.
///
/// The same physical interchange on three lines is three `Station`s with the
/// same `name`; the graph links them through its crossing registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Position in the graph's station arena.
    pub id: StationId,
    /// Line-local index as declared in the network description.
    pub index: u32,
    pub name: String,
    /// Owning line.
    pub line: LineId,
    /// Station treated as topologically identical to this one.  Symmetric:
    /// if `a.alias == Some(b.id)` then `b.alias == Some(a.id)`.
    pub alias: Option<StationId>,
}

impl Station {
    /// `true` if `other` is this station or its alias.
    #[inline]
    pub fn is_same_place(&self, other: StationId) -> bool {
        self.id == other || self.alias == Some(other)
    }
}
