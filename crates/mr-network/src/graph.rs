//! The network graph: station arena, lines, crossings, and adjacency policy.
//!
//! # Neighbor rule
//!
//! [`NetworkGraph::neighbors`] is the single expansion function used by every
//! search.  For a station `s` it yields, in order:
//!
//! 1. If `s` is a crossing, the same-named station on each member line.  The
//!    one on the end station's line goes first; the rest follow in registry
//!    order.
//! 2. The stations at `s.index ± 1` on `s`'s line (`+1` before `-1`), then,
//!    when `s` has an alias, the stations at `alias.index ± 1` on the alias's
//!    line.  A circular line's seam therefore has neighbors on both sides.
//!
//! Every entry is paired with `s` as its discovery predecessor and entries in
//! the caller's exclusion set are dropped.  The crossing-first ordering biases
//! breadth-first search towards staying on the destination's line.

use rustc_hash::{FxHashMap, FxHashSet};

use mr_core::{LineId, StationId};

use crate::{CrossingRegistry, Line, Station};

/// Set of station ids used for exclusions and occupancy checks.
pub type StationSet = FxHashSet<StationId>;

/// The immutable network a run operates on.
///
/// Built once by [`NetworkBuilder`](crate::NetworkBuilder) with the start and
/// end stations already resolved and validated; never revalidated.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    pub(crate) stations:  Vec<Station>,
    pub(crate) lines:     Vec<Line>,
    pub(crate) line_ids:  FxHashMap<String, LineId>,
    pub(crate) crossings: CrossingRegistry,
    pub(crate) start:     StationId,
    pub(crate) end:       StationId,
    pub(crate) trains:    u32,
}

impl NetworkGraph {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn crossings(&self) -> &CrossingRegistry {
        &self.crossings
    }

    pub fn start(&self) -> StationId {
        self.start
    }

    pub fn end(&self) -> StationId {
        self.end
    }

    /// Required fleet size.
    pub fn trains(&self) -> u32 {
        self.trains
    }

    #[inline]
    pub fn alias(&self, id: StationId) -> Option<StationId> {
        self.station(id).alias
    }

    /// `true` for the end station and its alias.
    #[inline]
    pub fn is_end(&self, id: StationId) -> bool {
        self.station(self.end).is_same_place(id)
    }

    /// `true` if the station's name is registered as a crossing.
    pub fn is_crossing(&self, id: StationId) -> bool {
        self.crossings.contains(&self.station(id).name)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve a line by name.
    pub fn line_of(&self, name: &str) -> Option<&Line> {
        self.line_ids.get(name).map(|&id| self.line(id))
    }

    /// Resolve a station by name, by `"line:index"` label, or by bare
    /// line-local index.
    ///
    /// Lines are searched in declaration order and the first station matching
    /// any of the three forms wins.
    pub fn lookup(&self, identifier: &str) -> Option<StationId> {
        lookup_in(&self.stations, &self.lines, identifier)
    }

    /// First station called `name` on `line`.
    pub fn station_named(&self, line: &Line, name: &str) -> Option<StationId> {
        line.stations()
            .iter()
            .copied()
            .find(|&id| self.station(id).name == name)
    }

    /// `"line:index"` label for `id`.
    pub fn position(&self, id: StationId) -> String {
        let s = self.station(id);
        format!("{}:{}", self.line(s.line).name, s.index)
    }

    /// Human-readable label: `Name(line:index)`, or `Name(line:index&alias)`
    /// when the station is aliased.
    pub fn label(&self, id: StationId) -> String {
        let s = self.station(id);
        match s.alias {
            None        => format!("{}({})", s.name, self.position(id)),
            Some(alias) => format!("{}({}&{})", s.name, self.position(id), self.station(alias).index),
        }
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Stations that are always ignored by searches: the start station and
    /// its alias.
    ///
    /// Returns a fresh set on every call; callers extend it freely.
    pub fn excluded_set(&self) -> StationSet {
        let mut set = StationSet::default();
        set.insert(self.start);
        if let Some(alias) = self.alias(self.start) {
            set.insert(alias);
        }
        set
    }

    /// Every station sharing `id`'s name through the crossing registry,
    /// including `id` itself when its own line is registered.
    pub fn crossing_counterparts(&self, id: StationId) -> Vec<StationId> {
        let name = &self.station(id).name;
        let Some(lines) = self.crossings.lines(name) else {
            return Vec::new();
        };
        lines
            .iter()
            .filter_map(|line_name| self.line_of(line_name))
            .filter_map(|line| self.station_named(line, name))
            .collect()
    }

    /// `(neighbor, predecessor)` pairs reachable from `station` in one hop,
    /// skipping anything in `excluded`.  See the module docs for ordering.
    pub fn neighbors(&self, station: StationId, excluded: &StationSet) -> Vec<(StationId, StationId)> {
        let current = self.station(station);
        let mut found: Vec<StationId> = Vec::new();

        // ── Crossing hops (destination line first) ────────────────────────
        if let Some(lines) = self.crossings.lines(&current.name) {
            let end_line = self.station(self.end).line;
            for line_name in lines {
                let Some(line) = self.line_of(line_name) else {
                    continue;
                };
                let Some(twin) = self.station_named(line, &current.name) else {
                    continue;
                };
                if twin == station {
                    continue;
                }
                if line.id == end_line {
                    found.insert(0, twin);
                } else {
                    found.push(twin);
                }
            }
        }

        // ── Same-line hops, then around the alias ─────────────────────────
        self.push_line_neighbors(current, &mut found);
        if let Some(alias) = current.alias {
            self.push_line_neighbors(self.station(alias), &mut found);
        }

        found
            .into_iter()
            .filter(|s| !excluded.contains(s))
            .map(|s| (s, station))
            .collect()
    }

    fn push_line_neighbors(&self, station: &Station, out: &mut Vec<StationId>) {
        let line = self.line(station.line);
        let after  = station.index.checked_add(1).and_then(|i| line.station_at(i));
        let before = station.index.checked_sub(1).and_then(|i| line.station_at(i));
        out.extend(after);
        out.extend(before);
    }
}

/// Shared by the graph and the builder (which resolves start/end before the
/// graph exists).
pub(crate) fn lookup_in(stations: &[Station], lines: &[Line], identifier: &str) -> Option<StationId> {
    let identifier = identifier.trim();
    let as_index = identifier.parse::<u32>().ok();
    lines.iter().find_map(|line| {
        line.stations().iter().copied().find(|&id| {
            let s = &stations[id.index()];
            s.name == identifier
                || as_index == Some(s.index)
                || is_position(&line.name, s.index, identifier)
        })
    })
}

fn is_position(line: &str, index: u32, identifier: &str) -> bool {
    identifier
        .rsplit_once(':')
        .is_some_and(|(l, i)| l == line && i.parse::<u32>() == Ok(index))
}
