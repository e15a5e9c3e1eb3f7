pub mod error;
pub mod propagate;
pub mod verify;

pub use error::SolveError;
pub use propagate::{solve, ForcingMove, PassSummary, SolveOutcome, SolveStatus, Solver, SolverConfig};
pub use verify::{classify, FuelReport, LinkReport, LinkStatus, SourceReport};
