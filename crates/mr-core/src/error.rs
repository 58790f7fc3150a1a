//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while assembling the run configuration record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown configuration key {0:?} (expected TRAINS, START or END)")]
    UnknownKey(String),

    #[error("configuration key {0:?} given more than once")]
    DuplicateKey(String),

    #[error("missing configuration key {0:?}")]
    MissingKey(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
