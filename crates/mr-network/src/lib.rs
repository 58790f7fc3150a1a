//! `mr-network`: transit lines, crossing stations, and adjacency policy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`station`]  | `Station`: one stop on one line                           |
//! | [`line`]     | `Line`: ordered station ids with contiguous indices       |
//! | [`crossing`] | `CrossingRegistry`: station name → member line names      |
//! | [`graph`]    | `NetworkGraph`: lookup and the `neighbors` rule           |
//! | [`builder`]  | `NetworkBuilder`: incremental construction + validation   |
//! | [`loader`]   | `load_network`, `load_network_reader`, `parse_network`     |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Station identity
//!
//! A real-world interchange appears once per line it lies on.  Those
//! `Station`s are never merged; they share a name that is registered in the
//! [`CrossingRegistry`].  Circular lines repeat their first station at the
//! end, and the two copies are linked through a symmetric alias stored as a
//! `StationId` in the arena, never as a reference.

pub mod builder;
pub mod crossing;
pub mod error;
pub mod graph;
pub mod line;
pub mod loader;
pub mod station;


pub use builder::NetworkBuilder;
pub use crossing::CrossingRegistry;
pub use error::{NetworkError, NetworkResult};
pub use graph::{NetworkGraph, StationSet};
pub use line::Line;
pub use loader::{load_network, load_network_reader, parse_network};
pub use station::Station;
