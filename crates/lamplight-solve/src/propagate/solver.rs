//! The propagation loop.

use lamplight_core::error::CoreError;
use lamplight_core::graph::FuelGraph;
use lamplight_core::id::{LinkId, SourceId};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::trace::ForcingMove;
use crate::error::SolveError;

/// Solver configuration.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Whether to record a [`ForcingMove`] for every deduction.
    pub trace_enabled: bool,
    /// Maximum number of scans, counting the final one that makes no
    /// progress. `None` means run to the fixed point.
    pub max_passes: Option<usize>,
}

/// Result of a single scan over all sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// 1-based pass number.
    pub pass: usize,
    pub forcing_moves: usize,
}

impl PassSummary {
    pub fn made_progress(&self) -> bool {
        self.forcing_moves > 0
    }
}

/// How the fixed point left the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SolveStatus {
    /// Every link is saturated.
    Converged,
    /// No source has exactly one open link, but `open_links` are still open.
    Stalled { open_links: Vec<LinkId> },
}

/// Final result of [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    /// Scans performed, including the last one without progress.
    pub passes: usize,
    pub forcing_moves: usize,
    pub status: SolveStatus,
    /// Recorded forcing moves, if tracing was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<ForcingMove>>,
}

impl SolveOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self.status, SolveStatus::Converged)
    }
}

/// Grows source radii until no forcing move remains.
///
/// Holds the graph mutably for the whole solve; it is the only writer.
pub struct Solver<'g> {
    graph: &'g mut FuelGraph,
    config: SolverConfig,
    /// Sources in the order they are scanned each pass.
    order: Vec<SourceId>,
    passes: usize,
    forcing_moves: usize,
    trace: Option<Vec<ForcingMove>>,
}

impl<'g> Solver<'g> {
    /// Creates a solver that scans sources in registry order.
    pub fn new(graph: &'g mut FuelGraph, config: SolverConfig) -> Self {
        let order = graph.source_ids().collect();
        Self::build(graph, config, order)
    }

    /// Creates a solver that scans sources in `order`. Sources missing from
    /// `order` are never scanned, though they may still be fueled.
    pub fn with_scan_order(
        graph: &'g mut FuelGraph,
        config: SolverConfig,
        order: Vec<SourceId>,
    ) -> Result<Self, SolveError> {
        if let Some(&id) = order.iter().find(|&&id| !graph.contains_source(id)) {
            return Err(CoreError::SourceNotFound { id }.into());
        }
        Ok(Self::build(graph, config, order))
    }

    fn build(graph: &'g mut FuelGraph, config: SolverConfig, order: Vec<SourceId>) -> Self {
        let trace = if config.trace_enabled {
            Some(Vec::new())
        } else {
            None
        };
        Solver {
            graph,
            config,
            order,
            passes: 0,
            forcing_moves: 0,
            trace,
        }
    }

    /// Read-only view of the graph being solved.
    pub fn graph(&self) -> &FuelGraph {
        &*self.graph
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn forcing_moves(&self) -> usize {
        self.forcing_moves
    }

    /// Forcing moves recorded so far, if tracing is enabled.
    pub fn trace(&self) -> Option<&[ForcingMove]> {
        self.trace.as_deref()
    }

    /// Performs one full scan over the sources.
    pub fn run_pass(&mut self) -> Result<PassSummary, SolveError> {
        if let Some(limit) = self.config.max_passes {
            if self.passes >= limit {
                return Err(SolveError::PassLimitExceeded { limit });
            }
        }
        self.passes += 1;
        let pass = self.passes;

        let mut moves = 0;
        for i in 0..self.order.len() {
            let scanned = self.order[i];
            let Some(link) = single_open_link(self.graph, scanned)? else {
                continue;
            };
            self.force(pass, scanned, link)?;
            moves += 1;
        }

        self.forcing_moves += moves;
        debug!(pass, forcing_moves = moves, "pass complete");
        Ok(PassSummary {
            pass,
            forcing_moves: moves,
        })
    }

    /// Fuels `link` from its far end so that it becomes exactly saturated.
    fn force(&mut self, pass: usize, scanned: SourceId, link: LinkId) -> Result<(), SolveError> {
        let (fueled, deficit) = {
            let l = self.graph.link(link)?;
            let fueled = l.other(scanned).ok_or(CoreError::NotAnEndpoint {
                link,
                source_id: scanned,
            })?;
            (fueled, l.deficit())
        };

        let radius = self.graph.raise_radius(fueled, deficit)?;
        self.graph.fuel_from(fueled)?;
        let link_total = self.graph.link(link)?.total_satisfied();

        debug!(
            pass,
            scanned = %scanned,
            link = %link,
            fueled = %fueled,
            deficit,
            radius,
            "forcing move"
        );

        if let Some(trace) = self.trace.as_mut() {
            trace.push(ForcingMove {
                pass,
                scanned,
                link,
                fueled,
                deficit,
                radius,
                link_total,
            });
        }
        Ok(())
    }

    /// Runs passes until one makes no progress.
    pub fn solve(mut self) -> Result<SolveOutcome, SolveError> {
        while self.run_pass()?.made_progress() {}

        let open_links: Vec<LinkId> = self
            .graph
            .links()
            .filter(|(_, l)| l.is_open())
            .map(|(id, _)| id)
            .collect();

        let status = if open_links.is_empty() {
            info!(
                passes = self.passes,
                forcing_moves = self.forcing_moves,
                total_fuel = %self.graph.total_radius(),
                "all lamps fueled"
            );
            SolveStatus::Converged
        } else {
            warn!(
                passes = self.passes,
                open = open_links.len(),
                "fixed point reached with unfueled links"
            );
            SolveStatus::Stalled { open_links }
        };

        Ok(SolveOutcome {
            passes: self.passes,
            forcing_moves: self.forcing_moves,
            status,
            trace: self.trace,
        })
    }
}

/// Solves `graph` with the default configuration.
pub fn solve(graph: &mut FuelGraph) -> Result<SolveOutcome, SolveError> {
    Solver::new(graph, SolverConfig::default()).solve()
}

/// Returns `id`'s only open link, or `None` if it has zero or several.
pub fn single_open_link(graph: &FuelGraph, id: SourceId) -> Result<Option<LinkId>, CoreError> {
    let mut found = None;
    for (link, l) in graph.incident_links(id)? {
        if l.is_open() {
            if found.is_some() {
                return Ok(None);
            }
            found = Some(link);
        }
    }
    Ok(found)
}
