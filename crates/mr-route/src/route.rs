//! The `Route` type.

use mr_core::StationId;

/// An ordered list of stations from a route's first station to its last,
/// both inclusive.
///
/// Topology is fixed once created; allocation and simulation only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
}

impl Route {
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    /// A copy of `self` with `station` in front.
    pub fn prepended(&self, station: StationId) -> Route {
        let mut stations = Vec::with_capacity(self.stations.len() + 1);
        stations.push(station);
        stations.extend_from_slice(&self.stations);
        Route { stations }
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of stations, endpoints included.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of moves needed to traverse the route.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn last(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Stations strictly between the first and the last.
    pub fn interior(&self) -> &[StationId] {
        match self.stations.len() {
            0..=2 => &[],
            n     => &self.stations[1..n - 1],
        }
    }

    pub fn position_of(&self, station: StationId) -> Option<usize> {
        self.stations.iter().position(|&s| s == station)
    }

    /// Station following `station` on this route, if any.
    pub fn next_after(&self, station: StationId) -> Option<StationId> {
        let i = self.position_of(station)?;
        self.stations.get(i + 1).copied()
    }
}
