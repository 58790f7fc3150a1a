//! A route together with its allocation state.

use mr_core::{PathId, StationId};
use mr_route::Route;

use crate::Vehicle;

/// A planned route and the vehicles travelling on it.
///
/// `cost` starts at the route's hop count and grows by `delta` for every
/// vehicle assigned; `delta` is 2 when the route touches a crossing station,
/// otherwise 1.
#[derive(Debug, Clone)]
pub struct FleetPath {
    pub id:       PathId,
    pub route:    Route,
    pub cost:     usize,
    pub delta:    usize,
    pub assigned: u32,
    /// In ascending id order.
    pub vehicles: Vec<Vehicle>,
}

impl FleetPath {
    pub fn hop_count(&self) -> usize {
        self.route.hop_count()
    }

    /// `true` once every vehicle on this path stands on `end`.
    pub fn all_at(&self, end: StationId) -> bool {
        self.vehicles.iter().all(|v| v.position == end)
    }

    /// Station following `station` on this path's route.
    pub fn next_station(&self, station: StationId) -> Option<StationId> {
        self.route.next_after(station)
    }
}
