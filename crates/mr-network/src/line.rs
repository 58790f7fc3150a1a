//! Transit lines.

use mr_core::{LineId, StationId};

/// A named, ordered sequence of stations.
///
/// Line-local indices are contiguous from `first_index`, so index lookup is a
/// subtraction plus a bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    first_index: u32,
    stations: Vec<StationId>,
}

impl Line {
    pub(crate) fn new(id: LineId, name: String) -> Self {
        Self { id, name, first_index: 0, stations: Vec::new() }
    }

    /// Index the next pushed station must carry.
    pub(crate) fn next_index(&self) -> Option<u32> {
        if self.stations.is_empty() {
            None
        } else {
            Some(self.first_index + self.stations.len() as u32)
        }
    }

    pub(crate) fn push(&mut self, index: u32, station: StationId) {
        if self.stations.is_empty() {
            self.first_index = index;
        }
        self.stations.push(station);
    }

    /// Station at line-local `index`, if the line has one there.
    #[inline]
    pub fn station_at(&self, index: u32) -> Option<StationId> {
        let offset = index.checked_sub(self.first_index)?;
        self.stations.get(offset as usize).copied()
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn first_index(&self) -> u32 {
        self.first_index
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
