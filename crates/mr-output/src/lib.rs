//! `mr-output`: reporting for the `metro_rush` solver.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`text`]     | `render_turn`, `TextReporter`: the per-turn stdout report |
//! | [`row`]      | `PositionRow`, `RunSummaryRow`, `Bucket`                   |
//! | [`writer`]   | `OutputWriter` trait                                       |
//! | [`csv`]      | `CsvWriter`: `turn_snapshots.csv`, `run_summary.csv`      |
//! | [`observer`] | `ReportObserver`: bridges `SimObserver` to a writer       |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use mr_output::{CsvWriter, ReportObserver, RunInfo, TextReporter};
//!
//! let csv = ReportObserver::new(&graph, CsvWriter::new(dir)?, info);
//! let mut obs = (TextReporter::new(&graph, std::io::stdout()), csv);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.1.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{ReportObserver, RunInfo};
pub use row::{Bucket, PositionRow, RunSummaryRow};
pub use text::{TextReporter, render_turn};
pub use writer::OutputWriter;
