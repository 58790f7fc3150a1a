//! `mr-fleet`: spreading a fixed number of vehicles over planned routes.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`vehicle`]   | `Vehicle`: id, current station, decided next hop  |
//! | [`path`]      | `FleetPath`: a route plus its cost and vehicles   |
//! | [`allocator`] | `FleetAllocator`: greedy minimum-cost assignment  |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                     |

pub mod allocator;
pub mod error;
pub mod path;
pub mod vehicle;


pub use allocator::FleetAllocator;
pub use error::{FleetError, FleetResult};
pub use path::FleetPath;
pub use vehicle::Vehicle;
