//! Looped parameter sweeps.
//!
//! A sweep integrates one [`Scenario`] per variant with the same method. Runs
//! are independent: a failing run is reported in the [`Sweep`] and does not
//! affect the others. Results keep the input order, so run `i` always
//! corresponds to scenario `i`.
//!
//! # Example
//!
//! ```
//! use fishery_core::{ModelParameters, SimulationConfig};
//! use fishery_solvers::{euler::Method, sweep::{self, Scenario}};
//!
//! let scenarios = Scenario::over_harvest_rates(
//!     ModelParameters::default(),
//!     SimulationConfig::default(),
//!     [10.0, 20.0, 30.0],
//! )?;
//!
//! let sweep = sweep::run(Method::Forward, scenarios);
//! let trajectories = sweep.into_result()?;
//! assert_eq!(trajectories.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use fishery_core::{ModelParameters, ParameterError, SimulationConfig, Trajectory};
use thiserror::Error;
use tracing::{debug, warn};

use crate::euler::{self, Method};

/// One variant of a sweep: a model and the run it should be integrated over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub params: ModelParameters,
    pub config: SimulationConfig,
}

impl Scenario {
    #[must_use]
    pub fn new(params: ModelParameters, config: SimulationConfig) -> Self {
        Self { params, config }
    }

    /// Builds one scenario per initial population, sharing everything else.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InitialPopulation`] for the first invalid value.
    pub fn over_initial_populations<I>(
        params: ModelParameters,
        config: SimulationConfig,
        populations: I,
    ) -> Result<Vec<Self>, ParameterError>
    where
        I: IntoIterator<Item = f64>,
    {
        populations
            .into_iter()
            .map(|p0| {
                config
                    .with_initial_population(p0)
                    .map(|config| Self::new(params, config))
            })
            .collect()
    }

    /// Builds one scenario per harvest rate, sharing everything else.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::HarvestRate`] for the first invalid value.
    pub fn over_harvest_rates<I>(
        params: ModelParameters,
        config: SimulationConfig,
        rates: I,
    ) -> Result<Vec<Self>, ParameterError>
    where
        I: IntoIterator<Item = f64>,
    {
        rates
            .into_iter()
            .map(|m| params.with_harvest_rate(m).map(|params| Self::new(params, config)))
            .collect()
    }
}

/// The outcome of integrating a single scenario within a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Position of the scenario in the sweep input.
    pub index: usize,

    /// The scenario that was integrated.
    pub scenario: Scenario,

    /// The trajectory, or the error that aborted it.
    pub outcome: Result<Trajectory, euler::Error>,
}

/// A run that failed within a sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("sweep run {index} failed: {error}")]
pub struct Failure {
    pub index: usize,

    #[source]
    pub error: euler::Error,
}

/// Ordered results of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    method: Method,
    runs: Vec<Run>,
}

impl Sweep {
    /// Returns the method every run was integrated with.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns all runs in input order.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Returns the number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if the sweep had no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the successful runs as `(index, trajectory)` pairs.
    pub fn trajectories(&self) -> impl Iterator<Item = (usize, &Trajectory)> + '_ {
        self.runs
            .iter()
            .filter_map(|run| run.outcome.as_ref().ok().map(|t| (run.index, t)))
    }

    /// Returns the failed runs.
    pub fn failures(&self) -> impl Iterator<Item = Failure> + '_ {
        self.runs.iter().filter_map(|run| {
            run.outcome.as_ref().err().map(|&error| Failure {
                index: run.index,
                error,
            })
        })
    }

    /// Returns every trajectory in input order, or the first failure.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] of the lowest-indexed failed run.
    pub fn into_result(self) -> Result<Vec<Trajectory>, Failure> {
        self.runs
            .into_iter()
            .map(|run| {
                let index = run.index;
                run.outcome.map_err(|error| Failure { index, error })
            })
            .collect()
    }
}

/// Integrates every scenario with `method`, independently and in order.
pub fn run<I>(method: Method, scenarios: I) -> Sweep
where
    I: IntoIterator<Item = Scenario>,
{
    let runs: Vec<Run> = scenarios
        .into_iter()
        .enumerate()
        .map(|(index, scenario)| {
            let outcome = euler::solve_unobserved(method, &scenario.params, &scenario.config);
            if let Err(error) = &outcome {
                warn!(%method, index, %error, "sweep run failed");
            }
            Run {
                index,
                scenario,
                outcome,
            }
        })
        .collect();

    debug!(%method, runs = runs.len(), "sweep finished");
    Sweep { method, runs }
}
