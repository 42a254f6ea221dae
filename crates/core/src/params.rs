use crate::ParameterError;

/// Parameters of the harvested logistic model.
///
/// Values are validated on construction:
///
/// - `growth_rate` (`k`) must be finite and positive.
/// - `carrying_capacity` (`K`) must be finite and positive.
/// - `harvest_rate` (`m`) must be finite and non-negative.
///
/// The parameters are immutable; use [`with_harvest_rate`] to derive a
/// variant for a harvest-rate sweep.
///
/// [`with_harvest_rate`]: ModelParameters::with_harvest_rate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawModelParameters")
)]
pub struct ModelParameters {
    growth_rate: f64,
    carrying_capacity: f64,
    harvest_rate: f64,
}

/// Stable and unstable equilibria of the harvested model.
///
/// With harvesting the logistic equation has two equilibria as long as
/// `m ≤ kK/4`. Populations above `unstable` tend toward `stable`; populations
/// below `unstable` decline and eventually collapse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibria {
    pub stable: f64,
    pub unstable: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::new(0.1, 1000.0, 10.0).expect("known-good parameters")
    }
}

impl ModelParameters {
    /// Creates validated model parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any value is non-finite or out of range.
    pub fn new(
        growth_rate: f64,
        carrying_capacity: f64,
        harvest_rate: f64,
    ) -> Result<Self, ParameterError> {
        if !growth_rate.is_finite() || growth_rate <= 0.0 {
            return Err(ParameterError::GrowthRate(growth_rate));
        }
        if !carrying_capacity.is_finite() || carrying_capacity <= 0.0 {
            return Err(ParameterError::CarryingCapacity(carrying_capacity));
        }
        if !harvest_rate.is_finite() || harvest_rate < 0.0 {
            return Err(ParameterError::HarvestRate(harvest_rate));
        }

        Ok(Self {
            growth_rate,
            carrying_capacity,
            harvest_rate,
        })
    }

    /// Returns a copy of these parameters with a different harvest rate.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::HarvestRate`] if `harvest_rate` is negative
    /// or non-finite.
    pub fn with_harvest_rate(self, harvest_rate: f64) -> Result<Self, ParameterError> {
        Self::new(self.growth_rate, self.carrying_capacity, harvest_rate)
    }

    /// Returns the intrinsic growth rate `k`.
    #[must_use]
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Returns the carrying capacity `K`.
    #[must_use]
    pub fn carrying_capacity(&self) -> f64 {
        self.carrying_capacity
    }

    /// Returns the constant harvest rate `m`.
    #[must_use]
    pub fn harvest_rate(&self) -> f64 {
        self.harvest_rate
    }

    /// Evaluates the right-hand side `k·P·(1 − P/K) − m` at `population`.
    #[must_use]
    pub fn growth(&self, population: f64) -> f64 {
        self.growth_rate * population * (1.0 - population / self.carrying_capacity)
            - self.harvest_rate
    }

    /// Returns the maximum sustainable yield `kK/4`.
    ///
    /// Harvesting faster than this leaves no positive equilibrium, so every
    /// trajectory eventually collapses.
    #[must_use]
    pub fn critical_harvest_rate(&self) -> f64 {
        self.growth_rate * self.carrying_capacity / 4.0
    }

    /// Returns the equilibria `K/2·(1 ± √(1 − 4m/(kK)))`.
    ///
    /// Returns `None` when the harvest rate exceeds
    /// [`critical_harvest_rate`](Self::critical_harvest_rate).
    #[must_use]
    pub fn equilibria(&self) -> Option<Equilibria> {
        let disc =
            1.0 - 4.0 * self.harvest_rate / (self.growth_rate * self.carrying_capacity);
        if disc < 0.0 {
            return None;
        }

        let half = self.carrying_capacity / 2.0;
        let root = disc.sqrt();
        Some(Equilibria {
            stable: half * (1.0 + root),
            unstable: half * (1.0 - root),
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawModelParameters {
    growth_rate: f64,
    carrying_capacity: f64,
    harvest_rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawModelParameters> for ModelParameters {
    type Error = ParameterError;

    fn try_from(raw: RawModelParameters) -> Result<Self, Self::Error> {
        Self::new(raw.growth_rate, raw.carrying_capacity, raw.harvest_rate)
    }
}
