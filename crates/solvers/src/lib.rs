//! Forward and backward Euler integrators for a harvested logistic model.
//!
//! # Modules
//!
//! - [`euler`] — the integrators, their observer events, and [`euler::Method`]
//!   dispatch
//! - [`sweep`] — independent runs over initial populations or harvest rates
//! - [`compare`] — forward and backward runs on identical inputs

pub mod compare;
pub mod euler;
pub mod sweep;
