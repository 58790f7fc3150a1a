//! Incremental network construction.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use mr_core::{LineId, NetworkConfig, StationId};

use crate::graph::lookup_in;
use crate::{CrossingRegistry, Line, NetworkError, NetworkGraph, NetworkResult, Station};

/// Construct a [`NetworkGraph`] line by line, then call [`build`](Self::build).
///
/// Stations must be added to a line in ascending, contiguous index order.
/// `build()` links circular lines (first and last station share a name),
/// resolves the configured start and end stations, and rejects a start that
/// coincides with the end or its alias.
///
/// # Example
///
/// ```
/// use mr_core::NetworkConfig;
/// use mr_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// let red = b.add_line("Red").unwrap();
/// for (i, name) in ["R0", "R1", "R2"].iter().enumerate() {
///     b.add_station(red, i as u32, name).unwrap();
/// }
/// let graph = b.build(&NetworkConfig::new(1, "R0", "R2").unwrap()).unwrap();
/// assert_eq!(graph.station_count(), 3);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    stations:  Vec<Station>,
    lines:     Vec<Line>,
    line_ids:  FxHashMap<String, LineId>,
    crossings: CrossingRegistry,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new line and return its id (sequential from 0).
    pub fn add_line(&mut self, name: &str) -> NetworkResult<LineId> {
        let name = name.trim();
        if self.line_ids.contains_key(name) {
            return Err(NetworkError::DuplicateLine(name.to_owned()));
        }
        let id = LineId(self.lines.len() as u32);
        self.lines.push(Line::new(id, name.to_owned()));
        self.line_ids.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Append a station at line-local `index` to `line`.
    ///
    /// The first station fixes the line's starting index; every later one
    /// must follow it without gaps.
    pub fn add_station(&mut self, line: LineId, index: u32, name: &str) -> NetworkResult<StationId> {
        let entry = &mut self.lines[line.index()];
        match entry.next_index() {
            Some(expected) if expected != index => {
                return Err(NetworkError::IndexGap { line: entry.name.clone(), expected, got: index });
            }
            _ => {}
        }

        let id = StationId(self.stations.len() as u32);
        entry.push(index, id);
        self.stations.push(Station {
            id,
            index,
            name: name.trim().to_owned(),
            line,
            alias: None,
        });
        Ok(id)
    }

    /// Register `station` as a crossing with `other_line`.
    ///
    /// The station's own line moves to the front of the crossing's
    /// membership, followed by `other_line`.  `other_line` may be declared
    /// later.
    pub fn add_crossing(&mut self, station: StationId, other_line: &str) {
        let s = &self.stations[station.index()];
        let own_line = &self.lines[s.line.index()].name;
        self.crossings.register(&s.name, own_line, other_line.trim());
    }

    /// Link `a` and `b` as aliases of one another.
    pub fn link_alias(&mut self, a: StationId, b: StationId) {
        self.stations[a.index()].alias = Some(b);
        self.stations[b.index()].alias = Some(a);
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Validate and produce the graph.
    pub fn build(mut self, config: &NetworkConfig) -> NetworkResult<NetworkGraph> {
        if self.lines.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }
        if let Some(empty) = self.lines.iter().find(|l| l.is_empty()) {
            return Err(NetworkError::EmptyLine(empty.name.clone()));
        }

        // ── Circular lines: alias the repeated terminus ───────────────────
        let seams: Vec<(StationId, StationId)> = self
            .lines
            .iter()
            .filter(|l| l.len() > 1)
            .filter_map(|l| {
                let first = *l.stations().first()?;
                let last  = *l.stations().last()?;
                (self.stations[first.index()].name == self.stations[last.index()].name)
                    .then_some((first, last))
            })
            .collect();
        for (first, last) in seams {
            debug!(line = %self.stations[first.index()].line, "circular line");
            self.link_alias(first, last);
        }

        // ── Resolve and check start / end ─────────────────────────────────
        let resolve = |identifier: &str| {
            lookup_in(&self.stations, &self.lines, identifier)
                .ok_or_else(|| NetworkError::StationNotFound(identifier.to_owned()))
        };
        let start = resolve(&config.start)?;
        let end   = resolve(&config.end)?;
        if self.stations[end.index()].is_same_place(start) {
            return Err(NetworkError::StartIsEnd(config.start.clone()));
        }

        info!(
            lines     = self.lines.len(),
            stations  = self.stations.len(),
            crossings = self.crossings.len(),
            trains    = config.trains,
            "network built"
        );

        Ok(NetworkGraph {
            stations:  self.stations,
            lines:     self.lines,
            line_ids:  self.line_ids,
            crossings: self.crossings,
            start,
            end,
            trains:    config.trains,
        })
    }
}
