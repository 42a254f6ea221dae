use fishery_core::Sample;

use super::Method;

/// Event emitted by the Euler solvers for each recorded sample.
///
/// Step 0 is the initial condition. Steps 1..N follow each update, including
/// the final non-positive sample of a collapsing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The discretization that produced this sample.
    pub method: Method,

    /// The sample index (0 for the initial condition).
    pub step: usize,

    /// The recorded time and population.
    pub sample: Sample,
}
