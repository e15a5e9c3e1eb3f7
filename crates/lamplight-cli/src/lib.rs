//! Library side of the `lamplight` binary: edge-list ingestion and summary
//! rendering around the core solver.

pub mod input;
pub mod output;

use lamplight_core::graph::FuelGraph;
use lamplight_solve::{FuelReport, SolveError, SolveOutcome, Solver, SolverConfig};

use crate::input::LinkRecord;

/// Builds a graph from `records`, solves it and reports the final state.
pub fn solve_records(
    records: &[LinkRecord],
    config: SolverConfig,
) -> Result<(SolveOutcome, FuelReport), SolveError> {
    let mut graph = FuelGraph::from_records(records.iter().map(LinkRecord::as_tuple));
    tracing::info!(
        sources = graph.source_count(),
        links = graph.link_count(),
        "graph built"
    );
    let outcome = Solver::new(&mut graph, config).solve()?;
    let report = FuelReport::from_graph(&graph);
    Ok((outcome, report))
}
