//! Interactive plots of harvested population trajectories.
//!
//! Each mode integrates the harvested logistic model with k = 0.1 and
//! K = 1000 over five years and opens a plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- initial
//! cargo run --example plot --features plot -- harvest
//! cargo run --example plot --features plot -- compare
//! cargo run --example plot --features plot -- compare 0.5
//! ```
//!
//! Set `RUST_LOG=fishery_solvers=debug` to log collapses.
//!
//! # Modes
//!
//! - **initial** — Forward Euler with m = 10 and daily steps, starting from
//!   P0 = 300, 600, …, 1500. Every run settles at the stable equilibrium
//!   ≈ 887.3.
//!
//! - **harvest** — Forward Euler from P0 = 500 for m = 10, 11, …, 30. Above
//!   the critical rate kK/4 = 25 every run collapses, and sooner as m grows.
//!
//! - **compare [dt]** — Forward and backward Euler from P0 = 500 with m = 10.
//!   Try `1` (default), `5`, `8` to watch the two schemes separate.

use std::error::Error;

use fishery_core::{ModelParameters, SimulationConfig};
use fishery_observers::{PlotObserver, ShowConfig};
use fishery_solvers::{
    euler::{self, Method},
    sweep::{self, Scenario},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const INITIAL_POPULATIONS: usize = 5;
const HARVEST_RATES: usize = 21;
const HORIZON_WEEKS: f64 = 52.0 * 5.0;

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "initial".into());
    match mode.as_str() {
        "initial" => initial(),
        "harvest" => harvest(),
        "compare" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size, expected a number of weeks, e.g. 0.5");
                    std::process::exit(1);
                })
                .unwrap_or(1.0);
            compare(dt)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [initial|harvest|compare [dt]]");
            std::process::exit(1);
        }
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fishery_solvers=info,plot=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn axes(config: ShowConfig) -> ShowConfig {
    config.axes("Time (weeks)", "Population").legend()
}

// --- Initial populations -----------------------------------------------------

/// Sweep the initial population with a moderate harvest.
fn initial() -> Result<(), Box<dyn Error>> {
    let p0: [f64; INITIAL_POPULATIONS] = std::array::from_fn(|i| 300.0 * (i as f64 + 1.0));

    let params = ModelParameters::new(0.1, 1000.0, 10.0)?;
    let config = SimulationConfig::new(1.0 / 7.0, HORIZON_WEEKS, p0[0])?;
    let scenarios = Scenario::over_initial_populations(params, config, p0)?;

    let trajectories = sweep::run(Method::Forward, scenarios).into_result()?;

    let mut obs = PlotObserver::new(p0.map(|p| format!("P0 = {p}")));
    for (i, trajectory) in trajectories.iter().enumerate() {
        obs.record_trajectory(i, trajectory);
    }

    if let Some(eq) = params.equilibria() {
        info!(stable = eq.stable, unstable = eq.unstable, "equilibria");
    }

    obs.show(axes(ShowConfig::new().title("Forward Euler: initial population sweep (m = 10)")))?;
    Ok(())
}

// --- Harvest rates -----------------------------------------------------------

/// Sweep the harvest rate from a fixed starting population.
fn harvest() -> Result<(), Box<dyn Error>> {
    let rates: [f64; HARVEST_RATES] = std::array::from_fn(|i| 10.0 + i as f64);

    let params = ModelParameters::new(0.1, 1000.0, rates[0])?;
    let config = SimulationConfig::new(1.0 / 7.0, HORIZON_WEEKS, 500.0)?;
    let scenarios = Scenario::over_harvest_rates(params, config, rates)?;

    let sweep = sweep::run(Method::Forward, scenarios);
    for failure in sweep.failures() {
        eprintln!("{failure}");
    }

    let mut obs = PlotObserver::new(rates.map(|m| format!("m = {m}")));
    for (i, trajectory) in sweep.trajectories() {
        if let Some(n) = trajectory.collapse_index() {
            info!(harvest_rate = rates[i], week = n as f64 * config.step_size(), "collapsed");
        }
        obs.record_trajectory(i, trajectory);
    }

    obs.show(axes(ShowConfig::new().title(format!(
        "Forward Euler: harvest sweep (critical rate kK/4 = {})",
        params.critical_harvest_rate()
    ))))?;
    Ok(())
}

// --- Forward vs. backward ----------------------------------------------------

/// Run both schemes on the same inputs and overlay them.
///
/// The observer routes events to separate traces by method, so the plot fills
/// in as the runs proceed rather than after both finish.
fn compare(dt: f64) -> Result<(), Box<dyn Error>> {
    let params = ModelParameters::new(0.1, 1000.0, 10.0)?;
    let config = SimulationConfig::new(dt, HORIZON_WEEKS, 500.0)?;

    let mut obs = PlotObserver::new(["Forward Euler", "Backward Euler"]);
    for method in [Method::Forward, Method::Backward] {
        euler::solve(method, &params, &config, &mut obs)?;
    }

    obs.show(axes(
        ShowConfig::new().title(format!("Forward vs. backward Euler (m = 10, dt = {dt})")),
    ))?;
    Ok(())
}
