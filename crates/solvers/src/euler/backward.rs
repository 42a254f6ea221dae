//! Implicit (backward) Euler.
//!
//! Replacing the derivative with a backward difference makes the next
//! population the unknown of
//!
//! ```text
//! P[n] = P[n−1] + dt·(k·P[n]·(1 − P[n]/K) − m)
//! ```
//!
//! which rearranges to the quadratic `a·P[n]² + b·P[n] + c = 0` with
//!
//! ```text
//! a = dt·k/K
//! b = 1 − k·dt
//! c = m·dt − P[n−1]
//! ```
//!
//! # Root selection
//!
//! Each step takes the `+√` root, `(−b + √(b² − 4ac)) / 2a`. For the regime
//! this model is calibrated for (k ≈ 0.1, K ≈ 1000, m ≈ 10, dt ∈ [1/7, 1]) the
//! other root is negative and physically meaningless. The chosen root is not
//! checked for sign; outside that regime callers are responsible for the
//! result. When no real root exists, or the root cannot be represented (a
//! quadratic coefficient that underflows to zero), the run fails with
//! [`Error::Domain`].

use fishery_core::{ModelParameters, Observer, SimulationConfig, Trajectory};

use super::{Action, Error, Event, Method, drive};

/// Coefficients of the per-step implicit equation.
///
/// `a` and `b` depend only on the model and step size; `c` is recomputed from
/// the previous population at every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    harvest_per_step: f64,
}

impl Quadratic {
    /// Builds the coefficients for the given model and step size.
    #[must_use]
    pub fn new(params: &ModelParameters, dt: f64) -> Self {
        let k = params.growth_rate();
        Self {
            a: dt * k / params.carrying_capacity(),
            b: 1.0 - k * dt,
            harvest_per_step: params.harvest_rate() * dt,
        }
    }

    /// Returns the quadratic coefficient `dt·k/K`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient `1 − k·dt`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant coefficient `m·dt − previous`.
    #[must_use]
    pub fn c(&self, previous: f64) -> f64 {
        self.harvest_per_step - previous
    }

    /// Returns `b² − 4ac` for a step from `previous`.
    #[must_use]
    pub fn discriminant(&self, previous: f64) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c(previous)
    }

    /// Returns the `+√` root for a step from `previous`.
    ///
    /// Returns `None` if the discriminant is negative or the root is not finite.
    #[must_use]
    pub fn root(&self, previous: f64) -> Option<f64> {
        let discriminant = self.discriminant(previous);
        if discriminant < 0.0 {
            return None;
        }
        let root = (-self.b + discriminant.sqrt()) / (2.0 * self.a);
        root.is_finite().then_some(root)
    }

    /// Evaluates `a·P² + b·P + c` for a candidate `population`.
    ///
    /// This is zero, up to rounding, when `population` solves the step.
    #[must_use]
    pub fn residual(&self, previous: f64, population: f64) -> f64 {
        (self.a * population + self.b) * population + self.c(previous)
    }
}

/// Integrates the model using backward Euler.
///
/// The run stops at the first sample with `P[n] ≤ 0`, which is kept
/// unclamped as the final sample.
///
/// # Errors
///
/// Returns [`Error::Domain`] if a step has no finite real root. The
/// partially computed trajectory is discarded.
pub fn solve<Obs>(
    params: &ModelParameters,
    config: &SimulationConfig,
    observer: Obs,
) -> Result<Trajectory, Error>
where
    Obs: Observer<Event, Action>,
{
    let quadratic = Quadratic::new(params, config.step_size());

    drive(
        Method::Backward,
        config,
        |step, previous| {
            quadratic.root(previous).ok_or_else(|| Error::Domain {
                step,
                previous,
                discriminant: quadratic.discriminant(previous),
            })
        },
        observer,
    )
}

/// Integrates the model using backward Euler without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    params: &ModelParameters,
    config: &SimulationConfig,
) -> Result<Trajectory, Error> {
    solve(params, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use fishery_core::Status;

    fn params(m: f64) -> ModelParameters {
        ModelParameters::new(0.1, 1000.0, m).unwrap()
    }

    fn config(dt: f64, p0: f64) -> SimulationConfig {
        SimulationConfig::new(dt, 260.0, p0).unwrap()
    }

    #[test]
    fn coefficients() {
        let q = Quadratic::new(&params(10.0), 1.0);
        assert_relative_eq!(q.a(), 1e-4);
        assert_relative_eq!(q.b(), 0.9);
        assert_relative_eq!(q.c(500.0), -490.0);
    }

    #[test]
    fn root_satisfies_implicit_equation() {
        let params = params(10.0);
        let dt = 1.0;
        let q = Quadratic::new(&params, dt);

        let next = q.root(500.0).unwrap();
        assert!(next > 500.0);
        assert_relative_eq!(next, 500.0 + dt * params.growth(next), max_relative = 1e-12);
    }

    #[test]
    fn root_is_none_for_negative_discriminant() {
        let q = Quadratic::new(&params(3000.0), 1.0);
        assert!(q.discriminant(500.0) < 0.0);
        assert_eq!(q.root(500.0), None);
    }

    #[test]
    fn underflowing_coefficient_is_a_domain_error() {
        let params = ModelParameters::new(1e-300, 1e300, 0.0).unwrap();
        let config = SimulationConfig::new(1.0, 5.0, 10.0).unwrap();

        let q = Quadratic::new(&params, config.step_size());
        assert_eq!(q.a(), 0.0);
        assert_eq!(q.root(10.0), None);

        let Error::Domain { step, previous, .. } = solve_unobserved(&params, &config).unwrap_err();
        assert_eq!(step, 1);
        assert_relative_eq!(previous, 10.0);
    }

    #[test]
    fn every_sample_solves_its_step() {
        let params = params(10.0);
        let config = config(1.0, 500.0);
        let q = Quadratic::new(&params, config.step_size());

        let trajectory = solve_unobserved(&params, &config).unwrap();
        assert_eq!(trajectory.status(), Status::Complete);

        for pair in trajectory.samples().windows(2) {
            let (previous, next) = (pair[0].population, pair[1].population);
            let scale = previous.abs().max(1.0);
            assert!(q.residual(previous, next).abs() <= 1e-9 * scale);
        }
    }

    #[test]
    fn domain_error_names_the_step() {
        let err = solve_unobserved(&params(3000.0), &config(1.0, 500.0)).unwrap_err();

        let Error::Domain {
            step,
            previous,
            discriminant,
        } = err;
        assert_eq!(step, 1);
        assert_relative_eq!(previous, 500.0);
        assert!(discriminant < 0.0);
    }

    #[test]
    fn collapses_below_harvest_per_step() {
        let trajectory = solve_unobserved(&params(30.0), &config(1.0, 300.0)).unwrap();

        assert_eq!(trajectory.status(), Status::Collapsed);
        assert_eq!(trajectory.collapse_index(), Some(19));
        assert!(trajectory.final_population().unwrap() <= 0.0);
    }
}
