//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `turn_snapshots.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, RunSummaryRow};

pub const SNAPSHOTS_FILE: &str = "turn_snapshots.csv";
pub const SUMMARY_FILE:   &str = "run_summary.csv";

/// Writes positions and the run summary to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["turn", "vehicle", "station", "line", "index", "bucket"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(["strategy", "paths", "vehicles", "turns"])?;

        Ok(Self { snapshots, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.turn.to_string(),
                row.vehicle.to_string(),
                row.station.clone(),
                row.line.clone(),
                row.index.to_string(),
                row.bucket.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.strategy.clone(),
            row.paths.to_string(),
            row.vehicles.to_string(),
            row.turns.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
