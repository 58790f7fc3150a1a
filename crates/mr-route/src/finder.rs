//! Breadth-first search and disjoint-path decomposition.
//!
//! # Predecessor bookkeeping
//!
//! The search records a station's predecessor every time one of its queue
//! entries is dequeued, not only the first time.  A station queued twice
//! before it is first expanded therefore keeps the predecessor of whichever
//! entry was processed last.  On networks with cycles the reconstructed route
//! can then be longer than the fewest-hop one.
//!
//! Stations are blocked for expansion as soon as they are first dequeued, so
//! the predecessor relation stays acyclic: a recorded predecessor was always
//! dequeued before the station it points to.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use mr_core::StationId;
use mr_network::{NetworkGraph, StationSet};

use crate::{ExclusionSet, Route, RouteError, RouteResult};

/// `station → predecessor` as last written; the search origin maps to `None`.
type Predecessors = FxHashMap<StationId, Option<StationId>>;

/// Path discovery over one graph.
///
/// Holds no search state between calls; every method starts from the graph's
/// own exclusion set.
#[derive(Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g NetworkGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g NetworkGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g NetworkGraph {
        self.graph
    }

    // ── Single search ─────────────────────────────────────────────────────

    /// Fewest-hop route from `from` to `to` (or its alias), avoiding the
    /// start station and its alias.
    ///
    /// The returned route always ends with `to` itself, even when the search
    /// reached its alias.
    pub fn shortest_path(&self, from: StationId, to: StationId) -> RouteResult<Route> {
        self.shortest_path_excluding(from, to, &self.graph.excluded_set())
    }

    /// Like [`shortest_path`](Self::shortest_path) with an explicit exclusion
    /// set.  `from` is always expanded, even when excluded.
    pub fn shortest_path_excluding(
        &self,
        from:     StationId,
        to:       StationId,
        excluded: &StationSet,
    ) -> RouteResult<Route> {
        let graph  = self.graph;
        let target = graph.station(to);

        let mut blocked = excluded.clone();
        let mut preds   = Predecessors::default();
        let mut queue: VecDeque<(StationId, Option<StationId>)> = VecDeque::new();
        queue.push_back((from, None));

        let mut reached = false;
        while let Some((station, via)) = queue.pop_front() {
            preds.insert(station, via);
            blocked.insert(station);
            if target.is_same_place(station) {
                reached = true;
                break;
            }
            queue.extend(
                graph
                    .neighbors(station, &blocked)
                    .into_iter()
                    .map(|(next, prev)| (next, Some(prev))),
            );
        }

        if !reached {
            debug!(%from, %to, visited = preds.len(), "no path");
            return Err(RouteError::NoPath { from, to });
        }
        self.reconstruct(&preds, from, to)
    }

    /// Walk predecessors back from `to`, falling back to its alias's entry
    /// when `to` itself was never dequeued.
    fn reconstruct(&self, preds: &Predecessors, from: StationId, to: StationId) -> RouteResult<Route> {
        let graph = self.graph;
        let limit = graph.station_count();

        let mut stations = Vec::new();
        let mut walker   = to;
        while !graph.station(walker).is_same_place(from) {
            stations.push(walker);
            if stations.len() > limit {
                return Err(RouteError::NoPath { from, to });
            }
            let prev = preds
                .get(&walker)
                .or_else(|| graph.alias(walker).and_then(|a| preds.get(&a)))
                .copied()
                .flatten();
            walker = prev.ok_or(RouteError::NoPath { from, to })?;
        }
        stations.push(from);
        stations.reverse();
        Ok(Route::new(stations))
    }

    // ── Decomposition ─────────────────────────────────────────────────────

    /// Routes from start to end that share no interior station.
    ///
    /// Each round searches from every neighbor of the start station and keeps
    /// the shortest candidate (earliest neighbor on ties); its interior
    /// stations and their crossing twins are then frozen.  A neighbor that is
    /// the end station contributes the direct two-station route once.  Rounds
    /// stop when the start has no unexcluded neighbor left or no neighbor
    /// yields a route.
    pub fn find_disjoint_paths(&self) -> RouteResult<Vec<Route>> {
        let graph = self.graph;
        let (start, end) = (graph.start(), graph.end());

        let mut exclusions = ExclusionSet::new(graph);
        let mut routes: Vec<Route> = Vec::new();
        let mut near = graph.neighbors(start, exclusions.as_set());

        while !near.is_empty() {
            let mut best: Option<Route> = None;
            for &(next, _) in &near {
                if graph.is_end(next) {
                    let direct = Route::new(vec![start, end]);
                    if !routes.contains(&direct) {
                        info!(hops = 1, "direct route committed");
                        routes.push(direct);
                    }
                    continue;
                }
                match self.shortest_path_excluding(next, end, exclusions.as_set()) {
                    Ok(tail) => {
                        let candidate = tail.prepended(start);
                        if best.as_ref().map_or(true, |b| candidate.len() < b.len()) {
                            best = Some(candidate);
                        }
                    }
                    Err(e) => warn!(%next, "candidate discarded: {e}"),
                }
            }

            let Some(chosen) = best else {
                break;
            };
            for &station in chosen.interior() {
                exclusions.freeze_interior(graph, station);
            }
            info!(hops = chosen.hop_count(), frozen = exclusions.len(), "route committed");
            routes.push(chosen);
            near = graph.neighbors(start, exclusions.as_set());
        }

        if routes.is_empty() {
            return Err(RouteError::Unreachable { start, end });
        }
        Ok(routes)
    }

    /// The shortest of [`find_disjoint_paths`](Self::find_disjoint_paths)'s
    /// routes (earliest on ties), alone.
    pub fn best_single_path(&self) -> RouteResult<Vec<Route>> {
        let best = self
            .find_disjoint_paths()?
            .into_iter()
            .reduce(|best, r| if r.len() < best.len() { r } else { best })
            .ok_or(RouteError::Unreachable { start: self.graph.start(), end: self.graph.end() })?;
        Ok(vec![best])
    }
}
