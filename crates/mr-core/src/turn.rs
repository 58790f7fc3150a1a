//! Discrete turn counter.
//!
//! Time advances in whole turns.  Turn 0 is the initial placement (every
//! vehicle at the start station); each call to the movement phase produces
//! the next turn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute turn number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
