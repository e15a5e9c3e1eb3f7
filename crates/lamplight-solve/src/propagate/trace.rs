//! Forcing-move trace recording.
//!
//! When [`SolverConfig::trace_enabled`](super::SolverConfig::trace_enabled)
//! is set, the solver records one [`ForcingMove`] per deduction.

use lamplight_core::id::{LinkId, SourceId};
use serde::Serialize;

/// A single forcing move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForcingMove {
    /// 1-based pass in which the move happened.
    pub pass: usize,
    /// Source whose only open link triggered the move.
    pub scanned: SourceId,
    /// The link that was open.
    pub link: LinkId,
    /// Source at the far end of `link`, whose radius grew.
    pub fueled: SourceId,
    /// Lamps that were unfueled on `link` before the move.
    pub deficit: i64,
    /// Radius of `fueled` after the move.
    pub radius: i64,
    /// Total satisfied value of `link` after the move.
    pub link_total: i128,
}
