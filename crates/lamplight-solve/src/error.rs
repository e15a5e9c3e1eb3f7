//! Solver error types.
//!
//! A stalled fixed point is not an error: it is reported through
//! [`crate::propagate::SolveStatus::Stalled`] and the verification report.

use lamplight_core::error::CoreError;
use thiserror::Error;

/// Errors produced while propagating radii.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The graph failed a lookup the algorithm depends on.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The configured pass limit was reached before a fixed point.
    #[error("no fixed point within {limit} passes")]
    PassLimitExceeded { limit: usize },
}
