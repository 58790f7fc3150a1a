//! Entry points for the outer driver.

use mr_core::Turn;
use mr_network::NetworkGraph;

use crate::{SimBuilder, SimObserver, SimResult, Strategy};

/// All vehicles on the shortest route.
pub fn run_single_shared_path<O: SimObserver>(graph: &NetworkGraph, observer: &mut O) -> SimResult<Turn> {
    run_strategy(graph, Strategy::SingleSharedPath, observer)
}

/// Vehicles spread over every interior-disjoint route.
pub fn run_multi_path<O: SimObserver>(graph: &NetworkGraph, observer: &mut O) -> SimResult<Turn> {
    run_strategy(graph, Strategy::MultiPath, observer)
}

pub fn run_strategy<O: SimObserver>(
    graph:    &NetworkGraph,
    strategy: Strategy,
    observer: &mut O,
) -> SimResult<Turn> {
    SimBuilder::new(graph).strategy(strategy).build()?.run(observer)
}
