//! Stations a search must not enter.

use mr_core::StationId;
use mr_network::{NetworkGraph, StationSet};

/// The always-ignored stations (start and its alias) plus whatever the
/// disjoint decomposition has frozen so far.
///
/// Each decomposition starts from a fresh set, so repeated runs over the same
/// graph never see each other's frozen stations.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    set: StationSet,
}

impl ExclusionSet {
    pub fn new(graph: &NetworkGraph) -> Self {
        Self { set: graph.excluded_set() }
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.set.contains(&station)
    }

    /// Freeze a single station.
    pub fn freeze(&mut self, station: StationId) {
        self.set.insert(station);
    }

    /// Freeze an interior station of a committed route together with every
    /// same-named station on other lines.
    ///
    /// Passing the start or end station itself is a no-op.  A twin is frozen
    /// even when it is the end station, which closes the end to later routes.
    pub fn freeze_interior(&mut self, graph: &NetworkGraph, station: StationId) {
        let start = graph.station(graph.start());
        if start.is_same_place(station) || graph.is_end(station) {
            return;
        }
        self.freeze(station);
        for twin in graph.crossing_counterparts(station) {
            self.freeze(twin);
        }
    }

    pub fn as_set(&self) -> &StationSet {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
