//! Side-by-side forward and backward Euler runs.
//!
//! Both methods integrate the same model from the same initial condition.
//! Each trajectory truncates independently, so comparisons are made over the
//! samples both runs computed.

use fishery_core::{ModelParameters, SimulationConfig, Trajectory};

use crate::euler::{self, backward, forward};

/// Forward and backward trajectories for the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub forward: Trajectory,
    pub backward: Trajectory,
}

impl Comparison {
    /// Returns the number of time points present in both trajectories.
    #[must_use]
    pub fn common_len(&self) -> usize {
        self.forward.len().min(self.backward.len())
    }

    /// Returns `(time, |P_fwd − P_bwd| / |P_bwd|)` over the common time points.
    ///
    /// The ratio is not finite where the backward population is exactly zero.
    pub fn relative_differences(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.forward
            .samples()
            .iter()
            .zip(self.backward.samples())
            .map(|(f, b)| {
                let diff = (f.population - b.population).abs();
                (f.time, diff / b.population.abs())
            })
    }

    /// Returns the largest relative difference over the first `steps` common samples.
    ///
    /// Returns `None` if there are no common samples.
    #[must_use]
    pub fn max_relative_difference(&self, steps: usize) -> Option<f64> {
        self.relative_differences()
            .take(steps)
            .map(|(_, rel)| rel)
            .reduce(f64::max)
    }
}

/// Integrates the model with both methods.
///
/// # Errors
///
/// Returns the backward solver's [`euler::Error`] if it fails.
pub fn run(
    params: &ModelParameters,
    config: &SimulationConfig,
) -> Result<Comparison, euler::Error> {
    Ok(Comparison {
        forward: forward::solve_unobserved(params, config),
        backward: backward::solve_unobserved(params, config)?,
    })
}
