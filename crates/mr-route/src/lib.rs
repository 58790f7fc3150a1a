//! `mr-route`: path discovery over a [`NetworkGraph`](mr_network::NetworkGraph).
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`route`]     | `Route`: ordered station ids, start to end inclusive      |
//! | [`exclusion`] | `ExclusionSet`: start, its alias, and frozen stations     |
//! | [`finder`]    | `PathFinder`: BFS, disjoint decomposition, best single    |
//! | [`planner`]   | `Planner` trait, `SharedPathPlanner`, `DisjointPathPlanner`|
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! # Pluggability
//!
//! `mr-sim` asks a [`Planner`] for routes, so the single-shared-path and
//! multi-path strategies are interchangeable and applications can add their
//! own without touching the simulator.

pub mod error;
pub mod exclusion;
pub mod finder;
pub mod planner;
pub mod route;


pub use error::{RouteError, RouteResult};
pub use exclusion::ExclusionSet;
pub use finder::PathFinder;
pub use planner::{DisjointPathPlanner, Planner, SharedPathPlanner};
pub use route::Route;
