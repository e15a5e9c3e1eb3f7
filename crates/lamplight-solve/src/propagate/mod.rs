//! Fixed-point radius propagation.
//!
//! The [`Solver`] repeatedly scans every source in registry order. A source
//! with exactly one open link yields a *forcing move*: the source at the far
//! end of that link grows its radius by the link's deficit and then fuels all
//! of its own links. Sources with zero or several open links are skipped.
//! Scanning stops after a pass with no forcing move.
//!
//! Each forcing move grows a radius by a positive amount and the total demand
//! is finite, so the loop terminates. A fixed point may still leave links
//! open when every remaining source has two or more of them; that is reported
//! as [`SolveStatus::Stalled`], not as an error.
//!
//! # Usage
//!
//! ```ignore
//! let mut graph = FuelGraph::from_records([(1, 2, 3), (2, 3, 7)]);
//! let outcome = Solver::new(&mut graph, SolverConfig::default()).solve()?;
//! let report = FuelReport::from_graph(&graph);
//! ```

pub mod solver;
pub mod trace;

pub use solver::{
    single_open_link, solve, PassSummary, SolveOutcome, SolveStatus, Solver, SolverConfig,
};
pub use trace::ForcingMove;
