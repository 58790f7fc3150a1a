//! `mr-sim`: the turn loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`movement`] | `MovementSimulator`: busy set, decide, commit               |
//! | [`snapshot`] | `TurnSnapshot`: positions grouped into start/transit/end    |
//! | [`observer`] | `SimObserver` trait and `NoopObserver`                       |
//! | [`strategy`] | `Strategy`: the `--algo` switch mapped onto a planner       |
//! | [`builder`]  | `SimBuilder`: plan, allocate, and set the turn limit        |
//! | [`sim`]      | `Simulation`: `step()` and `run()`                          |
//! | [`run`]      | `run_single_shared_path`, `run_multi_path`                   |
//! | [`error`]    | `SimError`, `SimResult<T>`                                   |
//!
//! # Quick start
//!
//! ```rust,ignore
//! let graph = mr_network::load_network(path)?;
//! let total = mr_sim::run_multi_path(&graph, &mut NoopObserver)?;
//! println!("Total turn: {total}");
//! ```
//!
//! # Feature flags
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Per-path decide/commit runs on Rayon's pool       |

pub mod builder;
pub mod error;
pub mod movement;
pub mod observer;
pub mod run;
pub mod sim;
pub mod snapshot;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use movement::MovementSimulator;
pub use observer::{NoopObserver, SimObserver};
pub use run::{run_multi_path, run_single_shared_path, run_strategy};
pub use sim::Simulation;
pub use snapshot::TurnSnapshot;
pub use strategy::Strategy;
