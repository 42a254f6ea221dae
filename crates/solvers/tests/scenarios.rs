//! End-to-end scenarios over the calibrated regime (k = 0.1, K = 1000).

use approx::assert_abs_diff_eq;
use fishery_core::{ModelParameters, SimulationConfig, Status, Trajectory};
use fishery_solvers::{
    compare,
    euler::{self, Method},
    sweep::{self, Scenario},
};

fn params(m: f64) -> ModelParameters {
    ModelParameters::new(0.1, 1000.0, m).unwrap()
}

fn weekly(p0: f64) -> SimulationConfig {
    SimulationConfig::new(1.0, 260.0, p0).unwrap()
}

fn daily(p0: f64) -> SimulationConfig {
    SimulationConfig::new(1.0 / 7.0, 260.0, p0).unwrap()
}

fn solve(method: Method, params: &ModelParameters, config: &SimulationConfig) -> Trajectory {
    euler::solve_unobserved(method, params, config).unwrap()
}

#[test]
fn repeated_runs_are_bit_identical() {
    for method in [Method::Forward, Method::Backward] {
        let a = solve(method, &params(10.0), &daily(500.0));
        let b = solve(method, &params(10.0), &daily(500.0));

        let bits = |t: &Trajectory| -> Vec<(u64, u64)> {
            t.iter().map(|(t, p)| (t.to_bits(), p.to_bits())).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn initial_condition_and_time_grid() {
    for method in [Method::Forward, Method::Backward] {
        for config in [daily(500.0), weekly(1234.5), daily(300.0)] {
            let trajectory = solve(method, &params(10.0), &config);

            assert_eq!(trajectory.initial_population(), Some(config.initial_population()));
            for (n, sample) in trajectory.samples().iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let expected = n as f64 * config.step_size();
                assert_eq!(sample.time, expected);
            }
        }
    }
}

#[test]
fn truncation_happens_exactly_at_first_collapse() {
    for method in [Method::Forward, Method::Backward] {
        for (m, p0) in [(10.0, 500.0), (26.0, 500.0), (30.0, 500.0), (10.0, 0.0)] {
            let config = daily(p0);
            let trajectory = solve(method, &params(m), &config);

            match trajectory.populations().position(|p| p <= 0.0) {
                Some(n) => {
                    assert_eq!(trajectory.len(), n + 1);
                    assert_eq!(trajectory.collapse_index(), Some(n));
                    assert_eq!(trajectory.status(), Status::Collapsed);
                }
                None => {
                    assert_eq!(trajectory.len(), config.step_count());
                    assert_eq!(trajectory.status(), Status::Complete);
                }
            }
        }
    }
}

#[test]
fn backward_samples_are_roots_of_their_step() {
    for (m, config) in [(10.0, weekly(500.0)), (10.0, daily(1500.0)), (30.0, daily(300.0))] {
        let params = params(m);
        let q = euler::backward::Quadratic::new(&params, config.step_size());
        let trajectory = euler::backward::solve_unobserved(&params, &config).unwrap();

        for pair in trajectory.samples().windows(2) {
            let (previous, next) = (pair[0].population, pair[1].population);
            let residual = q.residual(previous, next);
            assert!(
                residual.abs() <= 1e-9 * previous.abs().max(1.0),
                "residual {residual} too large stepping from {previous}"
            );
        }
    }
}

#[test]
fn negative_discriminant_is_a_domain_error() {
    let result = euler::solve_unobserved(Method::Backward, &params(3000.0), &weekly(500.0));
    assert!(matches!(result, Err(euler::Error::Domain { step: 1, .. })));

    // Forward Euler has no such guard; it simply collapses.
    let forward = solve(Method::Forward, &params(3000.0), &weekly(500.0));
    assert_eq!(forward.collapse_index(), Some(1));
}

#[test]
fn forward_settles_at_stable_equilibrium() {
    let params = params(10.0);
    let trajectory = solve(Method::Forward, &params, &daily(500.0));

    assert_eq!(trajectory.status(), Status::Complete);
    assert!(trajectory.populations().all(|p| p > 0.0));

    let expected = 1000.0 / 2.0 * (1.0 + (1.0 - 4.0 * 10.0 / (0.1 * 1000.0_f64)).sqrt());
    assert_abs_diff_eq!(params.equilibria().unwrap().stable, expected, epsilon = 1e-9);
    assert_abs_diff_eq!(trajectory.final_population().unwrap(), expected, epsilon = 1.0);
}

#[test]
fn overharvesting_collapses_before_horizon() {
    let config = daily(300.0);
    let trajectory = solve(Method::Forward, &params(30.0), &config);

    let collapse = trajectory.collapse_index().expect("population should collapse");
    assert!(collapse < config.step_count() - 1);
    assert!(trajectory.final_population().unwrap() <= 0.0);
}

#[test]
fn forward_and_backward_agree_at_weekly_steps() {
    let comparison = compare::run(&params(10.0), &weekly(500.0)).unwrap();

    assert!(comparison.common_len() >= 50);
    let worst = comparison.max_relative_difference(50).unwrap();
    assert!(worst < 0.05, "methods differ by {worst}");
}

#[test]
fn higher_harvest_collapses_no_later() {
    let rates: Vec<f64> = (10..=30).map(f64::from).collect();
    let config = daily(500.0);
    let scenarios = Scenario::over_harvest_rates(params(10.0), config, rates).unwrap();

    for method in [Method::Forward, Method::Backward] {
        let trajectories = sweep::run(method, scenarios.clone()).into_result().unwrap();
        assert_eq!(trajectories.len(), 21);

        let collapse: Vec<usize> = trajectories
            .iter()
            .map(|t| t.collapse_index().unwrap_or(config.step_count()))
            .collect();
        assert!(
            collapse.windows(2).all(|w| w[1] <= w[0]),
            "{method}: collapse indices increase somewhere: {collapse:?}"
        );

        // Harvesting beyond kK/4 = 25 leaves no equilibrium to settle at.
        assert!(collapse[16..].iter().all(|&n| n < config.step_count()));
        assert!(collapse[..16].iter().all(|&n| n == config.step_count()));
    }
}

#[test]
fn initial_population_sweep_reaches_same_equilibrium() {
    let params = params(10.0);
    let stable = params.equilibria().unwrap().stable;
    let scenarios = Scenario::over_initial_populations(
        params,
        daily(0.0),
        (1..=5).map(|i| 300.0 * f64::from(i)),
    )
    .unwrap();

    let sweep = sweep::run(Method::Forward, scenarios);
    assert_eq!(sweep.failures().count(), 0);

    for (_, trajectory) in sweep.trajectories() {
        assert_eq!(trajectory.status(), Status::Complete);
        assert_abs_diff_eq!(trajectory.final_population().unwrap(), stable, epsilon = 1.0);
    }
}
