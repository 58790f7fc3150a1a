//! `ReportObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use mr_core::Turn;
use mr_network::NetworkGraph;
use mr_sim::{SimObserver, TurnSnapshot};
use tracing::warn;

use crate::row::{Bucket, PositionRow, RunSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Run-level facts for the summary row, known once the simulation is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub strategy: String,
    pub paths:    usize,
    pub vehicles: usize,
}

/// A [`SimObserver`] that writes every snapshot (turn 0 included) and the
/// final summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct ReportObserver<'g, W: OutputWriter> {
    graph:      &'g NetworkGraph,
    writer:     W,
    info:       RunInfo,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> ReportObserver<'g, W> {
    pub fn new(graph: &'g NetworkGraph, writer: W, info: RunInfo) -> Self {
        Self { graph, writer, info, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// One row per vehicle, in id order.
    pub fn rows_for(&self, snapshot: &TurnSnapshot) -> Vec<PositionRow> {
        snapshot
            .positions
            .iter()
            .map(|&(id, station)| {
                let s = self.graph.station(station);
                let bucket = if station == snapshot.start {
                    Bucket::Start
                } else if station == snapshot.end {
                    Bucket::End
                } else {
                    Bucket::Transit
                };
                PositionRow {
                    turn:    snapshot.turn.0,
                    vehicle: id.0,
                    station: s.name.clone(),
                    line:    self.graph.line(s.line).name.clone(),
                    index:   s.index,
                    bucket,
                }
            })
            .collect()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "report row write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn record(&mut self, snapshot: &TurnSnapshot) {
        let rows = self.rows_for(snapshot);
        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }
}

impl<W: OutputWriter> SimObserver for ReportObserver<'_, W> {
    fn on_start(&mut self, snapshot: &TurnSnapshot) {
        self.record(snapshot);
    }

    fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
        self.record(snapshot);
    }

    fn on_finish(&mut self, total: Turn) {
        let row = RunSummaryRow {
            strategy: self.info.strategy.clone(),
            paths:    self.info.paths,
            vehicles: self.info.vehicles,
            turns:    total.0,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
