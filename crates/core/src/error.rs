use thiserror::Error;

/// Errors raised when model parameters or simulation settings are invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("growth rate must be finite and positive, got {0}")]
    GrowthRate(f64),

    #[error("carrying capacity must be finite and positive, got {0}")]
    CarryingCapacity(f64),

    #[error("harvest rate must be finite and non-negative, got {0}")]
    HarvestRate(f64),

    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("horizon must be finite and positive, got {0}")]
    Horizon(f64),

    #[error("horizon of {horizon} weeks with step size {step_size} gives no usable step count")]
    StepCount { horizon: f64, step_size: f64 },

    #[error("initial population must be finite and non-negative, got {0}")]
    InitialPopulation(f64),
}
