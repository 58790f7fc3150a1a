use mr_core::Turn;
use mr_fleet::FleetError;
use mr_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("path planning failed: {0}")]
    Route(#[from] RouteError),

    #[error("fleet allocation failed: {0}")]
    Fleet(#[from] FleetError),

    #[error("unknown strategy {0} (expected 1 or 2)")]
    UnknownStrategy(u8),

    #[error("fleet did not reach the end station within {limit} turns")]
    Stalled { limit: Turn },
}

pub type SimResult<T> = Result<T, SimError>;
