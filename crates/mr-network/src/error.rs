//! Network-subsystem error type.

use thiserror::Error;

use mr_core::CoreError;

/// Errors produced while loading or constructing a network.
///
/// All of them are configuration errors: the description is fixed input, so
/// the caller is expected to abort rather than retry.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {0:?} declared twice")]
    DuplicateLine(String),

    #[error("line {0:?} has no stations")]
    EmptyLine(String),

    #[error("network has no lines")]
    EmptyNetwork,

    #[error("line {line:?}: expected station index {expected}, got {got}")]
    IndexGap { line: String, expected: u32, got: u32 },

    #[error("station {0:?} not found in network")]
    StationNotFound(String),

    #[error("start station {0} is the end station")]
    StartIsEnd(String),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
