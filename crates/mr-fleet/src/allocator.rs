//! Greedy minimum-cost vehicle allocation.
//!
//! Each of the `N` vehicles goes to the path whose current cost is lowest
//! (earliest path in planner order on ties), and that path's cost then grows
//! by its delta.  The penalty is applied after every assignment, the first
//! one included.  This approximates minimising the largest per-path
//! completion time.
//!
//! Paths keep the order the planner produced them in; vehicle ids are then
//! handed out from 1 in that order.

use tracing::{debug, info};

use mr_core::{PathId, VehicleId};
use mr_network::NetworkGraph;
use mr_route::Route;

use crate::{FleetError, FleetPath, FleetResult, Vehicle};

/// Cost increment for a route that touches any crossing station.
pub const CROSSING_DELTA: usize = 2;
/// Cost increment for a route confined to plain stations.
pub const PLAIN_DELTA: usize = 1;

pub struct FleetAllocator<'g> {
    graph: &'g NetworkGraph,
}

impl<'g> FleetAllocator<'g> {
    pub fn new(graph: &'g NetworkGraph) -> Self {
        Self { graph }
    }

    /// Delta for `route`: [`CROSSING_DELTA`] if any of its stations is a
    /// registered crossing, else [`PLAIN_DELTA`].
    pub fn delta_for(&self, route: &Route) -> usize {
        if route.stations().iter().any(|&s| self.graph.is_crossing(s)) {
            CROSSING_DELTA
        } else {
            PLAIN_DELTA
        }
    }

    /// Distribute `vehicles` over `routes` and place every vehicle at the
    /// start station.
    pub fn allocate(&self, routes: Vec<Route>, vehicles: u32) -> FleetResult<Vec<FleetPath>> {
        if routes.is_empty() {
            return Err(FleetError::NoPaths);
        }
        if vehicles == 0 {
            return Err(FleetError::NoVehicles);
        }

        let mut paths: Vec<FleetPath> = routes
            .into_iter()
            .enumerate()
            .map(|(i, route)| FleetPath {
                id:       PathId(i as u32),
                cost:     route.hop_count(),
                delta:    self.delta_for(&route),
                assigned: 0,
                vehicles: Vec::new(),
                route,
            })
            .collect();

        for _ in 0..vehicles {
            // `min_by_key` keeps the first of equal minima.
            let Some(cheapest) = paths.iter_mut().min_by_key(|p| p.cost) else {
                return Err(FleetError::NoPaths);
            };
            cheapest.assigned += 1;
            cheapest.cost     += cheapest.delta;
            debug!(path = %cheapest.id, cost = cheapest.cost, "vehicle assigned");
        }

        let start = self.graph.start();
        let mut next_id = 1u32;
        for path in &mut paths {
            path.vehicles = (next_id..next_id + path.assigned)
                .map(|n| Vehicle::new(VehicleId(n), start))
                .collect();
            next_id += path.assigned;
        }

        info!(
            paths    = paths.len(),
            vehicles,
            split    = ?paths.iter().map(|p| p.assigned).collect::<Vec<_>>(),
            "fleet allocated"
        );
        Ok(paths)
    }
}
