//! Simulation observer trait for reporting and data collection.

use mr_core::Turn;

use crate::TurnSnapshot;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// struct Arrivals(Vec<usize>);
///
/// impl SimObserver for Arrivals {
///     fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
///         self.0.push(snapshot.at_end().len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first turn, with every vehicle at the start.
    fn on_start(&mut self, _snapshot: &TurnSnapshot) {}

    /// Called after every turn's commit phase.
    fn on_turn_end(&mut self, _snapshot: &TurnSnapshot) {}

    /// Called once when every vehicle has arrived.
    fn on_finish(&mut self, _total: Turn) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Both observers, in order.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_start(&mut self, snapshot: &TurnSnapshot) {
        self.0.on_start(snapshot);
        self.1.on_start(snapshot);
    }

    fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
        self.0.on_turn_end(snapshot);
        self.1.on_turn_end(snapshot);
    }

    fn on_finish(&mut self, total: Turn) {
        self.0.on_finish(total);
        self.1.on_finish(total);
    }
}

/// An observer that may be switched off at runtime.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_start(&mut self, snapshot: &TurnSnapshot) {
        if let Some(o) = self {
            o.on_start(snapshot);
        }
    }

    fn on_turn_end(&mut self, snapshot: &TurnSnapshot) {
        if let Some(o) = self {
            o.on_turn_end(snapshot);
        }
    }

    fn on_finish(&mut self, total: Turn) {
        if let Some(o) = self {
            o.on_finish(total);
        }
    }
}
