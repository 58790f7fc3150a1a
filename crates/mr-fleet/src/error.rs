use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("no routes to allocate vehicles over")]
    NoPaths,

    #[error("vehicle count must be at least 1")]
    NoVehicles,
}

pub type FleetResult<T> = Result<T, FleetError>;
