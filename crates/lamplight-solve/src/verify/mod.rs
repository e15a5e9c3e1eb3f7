//! Post-solve verification.
//!
//! Every link is classified by comparing its total satisfied value to its
//! lamp count. The [`FuelReport`] gathers final radii, classifications, the
//! total fuel and, for a stalled solve, the clusters of sources joined by
//! links that were left deficient.

pub mod report;

pub use report::{classify, FuelReport, LinkReport, LinkStatus, SourceReport};
