//! Fluent builder for constructing a [`Simulation`].

use tracing::info;

use mr_core::Turn;
use mr_fleet::{FleetAllocator, FleetPath};
use mr_network::NetworkGraph;
use mr_route::Planner;

use crate::{MovementSimulator, SimResult, Simulation, Strategy};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.strategy(s)`   | `Strategy::MultiPath`                            |
/// | `.planner(p)`    | the strategy's planner                           |
/// | `.vehicles(n)`   | the network's `TRAINS` value                     |
/// | `.max_turns(n)`  | Σ (hops + 2 × assigned) over paths, plus one     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&graph)
///     .strategy(Strategy::SingleSharedPath)
///     .build()?;
/// let total = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'g> {
    graph:     &'g NetworkGraph,
    strategy:  Strategy,
    planner:   Option<Box<dyn Planner + 'g>>,
    vehicles:  Option<u32>,
    max_turns: Option<u64>,
}

impl<'g> SimBuilder<'g> {
    pub fn new(graph: &'g NetworkGraph) -> Self {
        Self {
            graph,
            strategy:  Strategy::default(),
            planner:   None,
            vehicles:  None,
            max_turns: None,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use a custom planner instead of the strategy's built-in one.
    pub fn planner(mut self, planner: impl Planner + 'g) -> Self {
        self.planner = Some(Box::new(planner));
        self
    }

    /// Override the fleet size read from the network file.
    pub fn vehicles(mut self, n: u32) -> Self {
        self.vehicles = Some(n);
        self
    }

    /// Override the turn limit after which the run counts as stalled.
    pub fn max_turns(mut self, n: u64) -> Self {
        self.max_turns = Some(n);
        self
    }

    /// Plan routes, allocate the fleet, and return a simulation at turn 0.
    pub fn build(self) -> SimResult<Simulation<'g>> {
        let graph   = self.graph;
        let planner: Box<dyn Planner + 'g> = match self.planner {
            Some(p) => p,
            None    => self.strategy.planner(),
        };

        let routes = planner.plan(graph)?;
        let paths  = FleetAllocator::new(graph).allocate(routes, self.vehicles.unwrap_or(graph.trains()))?;
        let limit  = Turn(self.max_turns.unwrap_or_else(|| default_turn_limit(&paths)));

        info!(
            planner = planner.name(),
            paths   = paths.len(),
            limit   = limit.0,
            "simulation ready"
        );

        Ok(Simulation::new(graph, paths, MovementSimulator::new(graph.end()), limit))
    }
}

/// A vehicle trails the one ahead of it by two turns, so the last vehicle on
/// a path is home within `hops + 2 × assigned` turns.
pub fn default_turn_limit(paths: &[FleetPath]) -> u64 {
    let sum: u64 = paths
        .iter()
        .map(|p| p.hop_count() as u64 + 2 * u64::from(p.assigned))
        .sum();
    sum + 1
}
