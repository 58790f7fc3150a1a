//! The per-turn text report.
//!
//! ```text
//! Turn: 1
//! R0(Red:0)-T2|R1(Red:1)-T1
//!
//! ...
//! Total turn: 6
//! ```
//!
//! Each turn line lists the start station with the vehicles still there,
//! then every vehicle underway (highest id first), then the end station with
//! the vehicles that arrived.  Empty groups are left out.

use std::io::Write;

use mr_core::{Turn, VehicleId};
use mr_network::NetworkGraph;
use mr_sim::{SimObserver, TurnSnapshot};
use tracing::warn;

use crate::{OutputError, OutputResult};

/// Render the segment line for one snapshot.
pub fn render_turn(graph: &NetworkGraph, snapshot: &TurnSnapshot) -> String {
    let mut segments: Vec<String> = Vec::new();

    let waiting = snapshot.at_start();
    if !waiting.is_empty() {
        segments.push(format!("{}-{}", graph.label(snapshot.start), join_ids(&waiting)));
    }
    for &(id, station) in snapshot.in_transit().iter().rev() {
        segments.push(format!("{}-{id}", graph.label(station)));
    }
    let arrived = snapshot.at_end();
    if !arrived.is_empty() {
        segments.push(format!("{}-{}", graph.label(snapshot.end), join_ids(&arrived)));
    }

    segments.join("|")
}

fn join_ids(ids: &[VehicleId]) -> String {
    ids.iter().map(VehicleId::to_string).collect::<Vec<_>>().join(",")
}

/// A [`SimObserver`] that prints the turn report to any [`Write`] sink.
///
/// Write errors are kept (first one only) and retrieved with
/// [`take_error`](Self::take_error) after the run.
pub struct TextReporter<'g, W: Write> {
    graph:      &'g NetworkGraph,
    out:        W,
    quiet:      bool,
    last_error: Option<OutputError>,
}

impl<'g, W: Write> TextReporter<'g, W> {
    pub fn new(graph: &'g NetworkGraph, out: W) -> Self {
        Self { graph, out, quiet: false, last_error: None }
    }

    /// Print only the final total.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "turn report write failed");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_turn(&mut self, snapshot: &TurnSnapshot) -> OutputResult<()> {
        let line = render_turn(self.graph, snapshot);
        writeln!(self.out, "Turn: {}\n{line}\n", snapshot.turn)?;
        Ok(())
    }

    fn write_total(&mut self, total: Turn) -> OutputResult<()> {
        writeln!(self.out, "Total turn: {total}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SimObserver for TextReporter<'_, W> {
    fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
        if self.quiet {
            return;
        }
        let result = self.write_turn(snapshot);
        self.store_err(result);
    }

    fn on_finish(&mut self, total: Turn) {
        let result = self.write_total(total);
        self.store_err(result);
    }
}
