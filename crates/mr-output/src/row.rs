//! Plain data row types written by output backends.

use std::fmt;

/// Where a vehicle stands relative to the run's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Start,
    Transit,
    End,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Start   => "start",
            Bucket::Transit => "transit",
            Bucket::End     => "end",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vehicle's position after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    pub turn:    u64,
    pub vehicle: u32,
    pub station: String,
    pub line:    String,
    /// Line-local index.
    pub index:   u32,
    pub bucket:  Bucket,
}

/// One row per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub strategy: String,
    pub paths:    usize,
    pub vehicles: usize,
    pub turns:    u64,
}
