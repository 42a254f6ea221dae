//! Euler integrators for the harvested logistic model.
//!
//! Two discretizations of `dP/dt = k·P·(1 − P/K) − m` are provided:
//!
//! - [`forward`] — explicit Euler, `P[n] = P[n−1] + dt·f(P[n−1])`
//! - [`backward`] — implicit Euler, `P[n] = P[n−1] + dt·f(P[n])`, solved in
//!   closed form as a quadratic in `P[n]`
//!
//! Both step from the initial population until the horizon is reached or the
//! population falls to zero or below. A collapsing run keeps its final
//! (possibly negative) sample and computes nothing further.
//!
//! # Example
//!
//! ```
//! use fishery_core::{ModelParameters, SimulationConfig, Status};
//! use fishery_solvers::euler::{self, Method};
//!
//! let params = ModelParameters::new(0.1, 1000.0, 10.0)?;
//! let config = SimulationConfig::new(1.0, 260.0, 500.0)?;
//!
//! let trajectory = euler::solve_unobserved(Method::Backward, &params, &config)?;
//! assert_eq!(trajectory.status(), Status::Complete);
//!
//! for (t, p) in trajectory.iter().take(3) {
//!     println!("t={t}: {p}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;

pub mod backward;
pub mod forward;

use std::fmt;

use fishery_core::{
    ModelParameters, Observer, SimulationConfig, Status, Trajectory, TrajectoryBuilder,
};
use tracing::debug;

pub use action::Action;
pub use error::Error;
pub use event::Event;

/// The time-stepping scheme used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Explicit (forward) Euler.
    Forward,

    /// Implicit (backward) Euler.
    Backward,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward Euler"),
            Self::Backward => f.write_str("backward Euler"),
        }
    }
}

/// Integrates the model with the chosen method.
///
/// The observer receives an [`Event`] for every recorded sample and may
/// return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns [`Error::Domain`] if backward Euler meets a negative discriminant.
/// Forward Euler never fails.
pub fn solve<Obs>(
    method: Method,
    params: &ModelParameters,
    config: &SimulationConfig,
    observer: Obs,
) -> Result<Trajectory, Error>
where
    Obs: Observer<Event, Action>,
{
    match method {
        Method::Forward => Ok(forward::solve(params, config, observer)),
        Method::Backward => backward::solve(params, config, observer),
    }
}

/// Integrates the model with the chosen method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    method: Method,
    params: &ModelParameters,
    config: &SimulationConfig,
) -> Result<Trajectory, Error> {
    solve(method, params, config, ())
}

/// Drives a single run given the per-step update rule.
///
/// `advance` maps `(step, previous population)` to the population at `step`.
/// Every recorded sample, the initial one included, is observed and then
/// checked for collapse. Collapse is checked before the observer's action, so
/// a collapsing sample always ends the run as [`Status::Collapsed`].
fn drive<E, F, Obs>(
    method: Method,
    config: &SimulationConfig,
    mut advance: F,
    mut observer: Obs,
) -> Result<Trajectory, E>
where
    F: FnMut(usize, f64) -> Result<f64, E>,
    Obs: Observer<Event, Action>,
{
    let mut builder = TrajectoryBuilder::new(config);

    for step in 0..config.step_count() {
        if step > 0 {
            let population = advance(step, builder.last().population)?;
            builder.push(population);
        }

        let sample = builder.last();
        let action = observer.observe(&Event {
            method,
            step,
            sample,
        });

        if sample.population <= 0.0 {
            debug!(%method, step, population = sample.population, "population collapsed");
            return Ok(builder.finish(Status::Collapsed));
        }

        if let Some(Action::StopEarly) = action {
            debug!(%method, step, "stopped by observer");
            return Ok(builder.finish(Status::StoppedByObserver));
        }
    }

    Ok(builder.finish(Status::Complete))
}
