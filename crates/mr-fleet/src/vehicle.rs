//! Per-vehicle movement state.

use mr_core::{StationId, VehicleId};

/// One vehicle of the fleet.
///
/// `next` holds the station decided in the most recent turn (equal to
/// `position` once committed, or when the vehicle waited).  It is `None`
/// until the first turn is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id:       VehicleId,
    pub position: StationId,
    pub next:     Option<StationId>,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: StationId) -> Self {
        Self { id, position, next: None }
    }

    /// Move to the decided station.  Returns `true` if the position changed.
    #[inline]
    pub fn commit(&mut self) -> bool {
        match self.next {
            Some(next) if next != self.position => {
                self.position = next;
                true
            }
            _ => false,
        }
    }
}
