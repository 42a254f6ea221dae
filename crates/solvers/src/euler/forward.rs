//! Explicit (forward) Euler.
//!
//! Replacing the derivative with a forward difference gives the next
//! population directly from the current one:
//!
//! ```text
//! P[n] = P[n−1] + dt·(k·P[n−1]·(1 − P[n−1]/K) − m)
//! ```

use std::convert::Infallible;

use fishery_core::{ModelParameters, Observer, SimulationConfig, Trajectory};

use super::{Action, Event, Method, drive};

/// Integrates the model using forward Euler.
///
/// The run stops at the first sample with `P[n] ≤ 0`, which is kept
/// unclamped as the final sample. Forward Euler has no failure modes for
/// validated inputs.
pub fn solve<Obs>(
    params: &ModelParameters,
    config: &SimulationConfig,
    observer: Obs,
) -> Trajectory
where
    Obs: Observer<Event, Action>,
{
    let dt = config.step_size();
    let result = drive(
        Method::Forward,
        config,
        |_, previous| Ok::<_, Infallible>(step(params, previous, dt)),
        observer,
    );

    match result {
        Ok(trajectory) => trajectory,
        Err(never) => match never {},
    }
}

/// Integrates the model using forward Euler without observation.
#[must_use]
pub fn solve_unobserved(params: &ModelParameters, config: &SimulationConfig) -> Trajectory {
    solve(params, config, ())
}

/// Applies a single explicit update from `previous`.
#[must_use]
pub fn step(params: &ModelParameters, previous: f64, dt: f64) -> f64 {
    previous + dt * params.growth(previous)
}
