//! Path-discovery error type.

use thiserror::Error;

use mr_core::StationId;

/// No-solution outcomes of a search.  The driver treats both as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no path from {from} to {to}")]
    NoPath { from: StationId, to: StationId },

    #[error("end station {end} is unreachable from start station {start}")]
    Unreachable { start: StationId, end: StationId },
}

pub type RouteResult<T> = Result<T, RouteError>;
