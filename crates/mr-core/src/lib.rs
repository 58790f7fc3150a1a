//! `mr-core`: foundational types for the `metro_rush` solver.
//!
//! This crate is a dependency of every other `mr-*` crate.  It has no `mr-*`
//! dependencies and only two external ones (`thiserror` and `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `StationId`, `LineId`, `VehicleId`, `PathId`          |
//! | [`turn`]    | `Turn`: the discrete simulation step counter         |
//! | [`config`]  | `NetworkConfig`: trains / start / end record         |
//! | [`error`]   | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{LineId, PathId, StationId, VehicleId};
pub use turn::Turn;
