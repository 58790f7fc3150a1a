//! The `Simulation` struct and its turn loop.

use tracing::{debug, info};

use mr_core::Turn;
use mr_fleet::FleetPath;
use mr_network::NetworkGraph;

use crate::{MovementSimulator, SimError, SimObserver, SimResult, TurnSnapshot};

/// Allocated paths plus the turn counter.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<'g> {
    graph: &'g NetworkGraph,
    paths: Vec<FleetPath>,
    mover: MovementSimulator,
    turn:  Turn,
    limit: Turn,
}

impl<'g> Simulation<'g> {
    pub(crate) fn new(
        graph: &'g NetworkGraph,
        paths: Vec<FleetPath>,
        mover: MovementSimulator,
        limit: Turn,
    ) -> Self {
        Self { graph, paths, mover, turn: Turn::ZERO, limit }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &'g NetworkGraph {
        self.graph
    }

    pub fn paths(&self) -> &[FleetPath] {
        &self.paths
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn limit(&self) -> Turn {
        self.limit
    }

    pub fn vehicle_count(&self) -> usize {
        self.paths.iter().map(|p| p.vehicles.len()).sum()
    }

    pub fn all_arrived(&self) -> bool {
        let end = self.graph.end();
        self.paths.iter().all(|p| p.all_at(end))
    }

    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot::capture(self.turn, self.graph.start(), self.graph.end(), &self.paths)
    }

    // ── Turn loop ─────────────────────────────────────────────────────────

    /// Advance every vehicle by one turn and return the new turn number.
    ///
    /// Once the fleet has arrived further steps leave every position as is.
    pub fn step(&mut self) -> Turn {
        let moved = self.mover.advance(&mut self.paths);
        self.turn = self.turn.next();
        debug!(turn = self.turn.0, moved, "turn committed");
        self.turn
    }

    /// Step until every vehicle is at the end station and return the total
    /// number of turns.
    ///
    /// Fails with [`SimError::Stalled`] once the turn limit is reached with
    /// vehicles still underway.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Turn> {
        observer.on_start(&self.snapshot());
        while !self.all_arrived() {
            if self.turn >= self.limit {
                return Err(SimError::Stalled { limit: self.limit });
            }
            self.step();
            observer.on_turn_end(&self.snapshot());
        }
        info!(turns = self.turn.0, vehicles = self.vehicle_count(), "fleet arrived");
        observer.on_finish(self.turn);
        Ok(self.turn)
    }
}
