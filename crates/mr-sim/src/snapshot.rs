//! Per-turn view of where every vehicle stands.

use mr_core::{StationId, Turn, VehicleId};
use mr_fleet::FleetPath;

/// Vehicle positions after a turn, in ascending vehicle id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub turn:      Turn,
    pub start:     StationId,
    pub end:       StationId,
    pub positions: Vec<(VehicleId, StationId)>,
}

impl TurnSnapshot {
    pub fn capture(turn: Turn, start: StationId, end: StationId, paths: &[FleetPath]) -> Self {
        let mut positions: Vec<(VehicleId, StationId)> = paths
            .iter()
            .flat_map(|p| p.vehicles.iter().map(|v| (v.id, v.position)))
            .collect();
        positions.sort_unstable_by_key(|&(id, _)| id);
        Self { turn, start, end, positions }
    }

    pub fn position_of(&self, vehicle: VehicleId) -> Option<StationId> {
        self.positions
            .binary_search_by_key(&vehicle, |&(id, _)| id)
            .ok()
            .map(|i| self.positions[i].1)
    }

    pub fn at_start(&self) -> Vec<VehicleId> {
        self.ids_where(|s| s == self.start)
    }

    pub fn at_end(&self) -> Vec<VehicleId> {
        self.ids_where(|s| s == self.end)
    }

    /// Vehicles neither at the start nor at the end, with their station.
    pub fn in_transit(&self) -> Vec<(VehicleId, StationId)> {
        self.positions
            .iter()
            .copied()
            .filter(|&(_, s)| s != self.start && s != self.end)
            .collect()
    }

    pub fn all_arrived(&self) -> bool {
        self.positions.iter().all(|&(_, s)| s == self.end)
    }

    fn ids_where(&self, pred: impl Fn(StationId) -> bool) -> Vec<VehicleId> {
        self.positions
            .iter()
            .filter(|&&(_, s)| pred(s))
            .map(|&(id, _)| id)
            .collect()
    }
}
