//! Observers and plotting for fishery population trajectories.
//!
//! This crate is the presentation side of the workspace. It consumes solver
//! events and finished [`Trajectory`] values; it never drives integration.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for observers ([`HasSample`],
//!   [`CanStopEarly`]) and the reusable [`StopBelow`] observer
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for plotting trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Trajectory`]: fishery_core::Trajectory
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`StopBelow`]: traits::StopBelow

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
