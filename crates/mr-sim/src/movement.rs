//! One turn of movement: busy set, decide, commit.
//!
//! Paths are handled independently.  Their interiors are disjoint, and the
//! start and end stations hold any number of vehicles, so no coordination
//! across paths is needed.
//!
//! Within a path:
//!
//! 1. **Busy**: every vehicle's last decided station counts as occupied,
//!    unless that station is the end.  Before the first turn nothing has been
//!    decided and nothing is busy.
//! 2. **Decide** (ascending vehicle id): a vehicle claims the next station of
//!    its route if nobody holds or has already claimed it, and the claim is
//!    added to the busy set.  Otherwise it waits where it is.
//! 3. **Commit**: all vehicles move to their decided station at once, so no
//!    decision sees a sibling's updated position.

use tracing::trace;

use mr_core::StationId;
use mr_fleet::FleetPath;
use mr_network::StationSet;

#[derive(Debug, Clone, Copy)]
pub struct MovementSimulator {
    end: StationId,
}

impl MovementSimulator {
    pub fn new(end: StationId) -> Self {
        Self { end }
    }

    /// Stations on `path` that may not be claimed this turn.
    pub fn busy_stations(&self, path: &FleetPath) -> StationSet {
        path.vehicles
            .iter()
            .filter_map(|v| v.next)
            .filter(|&next| next != self.end)
            .collect()
    }

    /// Fill in every vehicle's `next` without moving anyone.
    pub fn decide(&self, path: &mut FleetPath) {
        let mut busy = self.busy_stations(path);
        let route = &path.route;
        for vehicle in &mut path.vehicles {
            match route.next_after(vehicle.position) {
                Some(ahead) if !busy.contains(&ahead) => {
                    busy.insert(ahead);
                    vehicle.next = Some(ahead);
                }
                Some(_) => vehicle.next = Some(vehicle.position),
                // Already at the end of its route; keep the last decision.
                None => {
                    vehicle.next.get_or_insert(vehicle.position);
                }
            }
        }
    }

    /// Decide then commit one path.  Returns how many vehicles moved.
    pub fn advance_path(&self, path: &mut FleetPath) -> usize {
        self.decide(path);
        let moved = path.vehicles.iter_mut().map(|v| v.commit()).filter(|&m| m).count();
        trace!(path = %path.id, moved, "path advanced");
        moved
    }

    /// Advance every path by one turn.  Returns how many vehicles moved.
    #[cfg(not(feature = "parallel"))]
    pub fn advance(&self, paths: &mut [FleetPath]) -> usize {
        paths.iter_mut().map(|p| self.advance_path(p)).sum()
    }

    /// Advance every path by one turn.  Returns how many vehicles moved.
    #[cfg(feature = "parallel")]
    pub fn advance(&self, paths: &mut [FleetPath]) -> usize {
        use rayon::prelude::*;

        paths.par_iter_mut().map(|p| self.advance_path(p)).sum()
    }
}
