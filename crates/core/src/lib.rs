//! Core types for integrating a harvested logistic population model.
//!
//! The model is the logistic growth equation with a constant harvesting term:
//!
//! ```text
//! dP/dt = k·P·(1 − P/K) − m
//! ```
//!
//! This crate defines the shared data that solvers and observers build on:
//!
//! - [`ModelParameters`] — growth rate `k`, carrying capacity `K`, and harvest rate `m`
//! - [`SimulationConfig`] — step size, horizon, and initial population
//! - [`Trajectory`] — the truncating sequence of samples produced by one run
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Parameter types are validated on construction, so any value that exists is
//! safe to integrate. Enable the `serde` feature to (de)serialize them.

mod config;
mod error;
mod observer;
mod params;
mod trajectory;

pub use config::SimulationConfig;
pub use error::ParameterError;
pub use observer::Observer;
pub use params::{Equilibria, ModelParameters};
pub use trajectory::{Sample, Status, Trajectory, TrajectoryBuilder};
