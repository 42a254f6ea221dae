//! Capability traits for observers.
//!
//! These traits abstract over solver event and action types so an observer can
//! be written once and used with any solver that emits population samples.
//!
//! # Event traits
//!
//! - [`HasSample`] — events that carry a `(time, population)` sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use fishery_core::Observer;
//! use fishery_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the population has held within `band` of `target` for a while.
//! struct Settled {
//!     target: f64,
//!     band: f64,
//!     needed: usize,
//!     streak: usize,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for Settled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if (event.sample().population - self.target).abs() < self.band {
//!             self.streak += 1;
//!         } else {
//!             self.streak = 0;
//!         }
//!         (self.streak >= self.needed).then(A::stop_early)
//!     }
//! }
//! ```

use fishery_core::{Observer, Sample};
use fishery_solvers::euler;

/// An event that carries a population sample.
pub trait HasSample {
    /// Returns the sample recorded for this event.
    fn sample(&self) -> Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasSample for euler::Event {
    fn sample(&self) -> Sample {
        self.sample
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Stops a run once the population drops below a threshold.
///
/// Useful for treating a population as commercially extinct well before it
/// reaches zero. The sample that crosses the threshold is still recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    threshold: f64,
}

impl StopBelow {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasSample, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.sample().population < self.threshold).then(A::stop_early)
    }
}
