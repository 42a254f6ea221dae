use crate::ParameterError;

/// Step size, horizon, and initial condition for a single integration run.
///
/// All times are in weeks. The number of samples a run may produce is
/// `floor(horizon_weeks / step_size)`, with the initial population occupying
/// index zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSimulationConfig")
)]
pub struct SimulationConfig {
    step_size: f64,
    horizon_weeks: f64,
    initial_population: f64,
}

impl Default for SimulationConfig {
    /// Daily steps over five years, starting from 500 individuals.
    fn default() -> Self {
        Self::new(1.0 / 7.0, 52.0 * 5.0, 500.0).expect("known-good config")
    }
}

impl SimulationConfig {
    /// Creates a validated simulation config.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if:
    ///
    /// - `step_size` is non-finite or not positive,
    /// - `horizon_weeks` is non-finite or not positive,
    /// - the horizon is shorter than one step (or the step count overflows),
    /// - `initial_population` is non-finite or negative.
    pub fn new(
        step_size: f64,
        horizon_weeks: f64,
        initial_population: f64,
    ) -> Result<Self, ParameterError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ParameterError::StepSize(step_size));
        }
        if !horizon_weeks.is_finite() || horizon_weeks <= 0.0 {
            return Err(ParameterError::Horizon(horizon_weeks));
        }

        let steps = (horizon_weeks / step_size).floor();
        #[allow(clippy::cast_precision_loss)]
        let max_steps = usize::MAX as f64;
        if !(1.0..max_steps).contains(&steps) {
            return Err(ParameterError::StepCount {
                horizon: horizon_weeks,
                step_size,
            });
        }

        if !initial_population.is_finite() || initial_population < 0.0 {
            return Err(ParameterError::InitialPopulation(initial_population));
        }

        Ok(Self {
            step_size,
            horizon_weeks,
            initial_population,
        })
    }

    /// Returns a copy of this config starting from a different population.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InitialPopulation`] if the value is negative
    /// or non-finite.
    pub fn with_initial_population(self, initial_population: f64) -> Result<Self, ParameterError> {
        Self::new(self.step_size, self.horizon_weeks, initial_population)
    }

    /// Returns the step size `dt` in weeks.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the simulated duration in weeks.
    #[must_use]
    pub fn horizon_weeks(&self) -> f64 {
        self.horizon_weeks
    }

    /// Returns the initial population `P0`.
    #[must_use]
    pub fn initial_population(&self) -> f64 {
        self.initial_population
    }

    /// Returns the maximum number of samples a run produces.
    ///
    /// This is `floor(horizon_weeks / step_size)` and is always at least one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_count(&self) -> usize {
        (self.horizon_weeks / self.step_size).floor() as usize
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSimulationConfig {
    step_size: f64,
    horizon_weeks: f64,
    initial_population: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSimulationConfig> for SimulationConfig {
    type Error = ParameterError;

    fn try_from(raw: RawSimulationConfig) -> Result<Self, Self::Error> {
        Self::new(raw.step_size, raw.horizon_weeks, raw.initial_population)
    }
}
