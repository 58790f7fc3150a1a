//! The two top-level strategies.

use std::fmt;

use mr_route::{DisjointPathPlanner, Planner, SharedPathPlanner};

use crate::SimError;

/// Which planner feeds the allocator.  The discriminants match the CLI's
/// `--algo` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Strategy {
    /// Every vehicle on the single shortest route.
    SingleSharedPath = 1,
    /// Vehicles spread over all interior-disjoint routes.
    #[default]
    MultiPath = 2,
}

impl Strategy {
    pub fn planner(self) -> Box<dyn Planner> {
        match self {
            Strategy::SingleSharedPath => Box::new(SharedPathPlanner),
            Strategy::MultiPath        => Box::new(DisjointPathPlanner),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SingleSharedPath => "single",
            Strategy::MultiPath        => "multi",
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strategy::SingleSharedPath),
            2 => Ok(Strategy::MultiPath),
            n => Err(SimError::UnknownStrategy(n)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
