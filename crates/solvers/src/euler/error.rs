use thiserror::Error;

/// Errors that can occur while integrating a trajectory.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The implicit step has no finite real solution.
    ///
    /// Raised by backward Euler when `b² − 4ac < 0`, which happens once the
    /// per-step harvest `m·dt` exceeds the previous population by enough that
    /// no real population satisfies the implicit equation. Also raised when
    /// the `+√` root is not finite, e.g. if `dt·k/K` underflows to zero.
    #[error(
        "no finite real root at step {step}: discriminant {discriminant} \
         (previous population {previous})"
    )]
    Domain {
        step: usize,
        previous: f64,
        discriminant: f64,
    },
}
