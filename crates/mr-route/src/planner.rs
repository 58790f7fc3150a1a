//! Planner trait and the two built-in strategies.

use mr_network::NetworkGraph;

use crate::{PathFinder, Route, RouteResult};

/// Produces the routes a fleet will be spread over.
///
/// Implement this trait to plug in a different decomposition; the simulator
/// only needs a non-empty list of start-to-end routes.
pub trait Planner {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    fn plan(&self, graph: &NetworkGraph) -> RouteResult<Vec<Route>>;
}

/// Every vehicle follows the single shortest route.
pub struct SharedPathPlanner;

impl Planner for SharedPathPlanner {
    fn name(&self) -> &'static str {
        "single"
    }

    fn plan(&self, graph: &NetworkGraph) -> RouteResult<Vec<Route>> {
        PathFinder::new(graph).best_single_path()
    }
}

/// Vehicles are spread across all interior-disjoint routes.
pub struct DisjointPathPlanner;

impl Planner for DisjointPathPlanner {
    fn name(&self) -> &'static str {
        "multi"
    }

    fn plan(&self, graph: &NetworkGraph) -> RouteResult<Vec<Route>> {
        PathFinder::new(graph).find_disjoint_paths()
    }
}
