//! Human-readable and JSON summaries of a solved graph.

use lamplight_solve::{FuelReport, SolveOutcome, SolveStatus};
use serde::Serialize;

use crate::input::LinkRecord;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// One line per record, as read.
pub fn render_echo(records: &[LinkRecord]) -> String {
    records.iter().map(|record| format!("{record}\n")).collect()
}

/// Radius table, total fuel and any unfueled links.
pub fn render_text(outcome: &SolveOutcome, report: &FuelReport) -> String {
    let mut lines = vec!["source radius".to_string()];
    lines.extend(
        report
            .sources
            .iter()
            .map(|source| format!("{} r={}", source.id, source.radius)),
    );
    lines.push(String::new());
    lines.push(format!("total fuel {}", report.total_fuel));
    lines.push(format!(
        "links: {} exact, {} overlapping, {} deficient",
        report.exact, report.overlapping, report.deficient
    ));

    if let Some(trace) = &outcome.trace {
        lines.push(String::new());
        lines.push("forcing moves".to_string());
        lines.extend(trace.iter().map(|mv| {
            format!(
                "pass {}: {} forces {} +{} on link {} (r={})",
                mv.pass, mv.scanned, mv.fueled, mv.deficit, mv.link, mv.radius
            )
        }));
    }

    if let SolveStatus::Stalled { .. } = outcome.status {
        lines.push(String::new());
        lines.extend(report.deficient_links().map(|link| {
            format!(
                "unfueled lamp link {} to {} ({} of {} lamps)",
                link.endpoints.0, link.endpoints.1, link.satisfied, link.required
            )
        }));
        for group in &report.stalled_groups {
            let ids: Vec<String> = group.iter().map(|id| id.to_string()).collect();
            lines.push(format!("stalled group: {}", ids.join(" ")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    solve: &'a SolveOutcome,
    report: &'a FuelReport,
}

/// Pretty-printed JSON of the outcome and report.
pub fn render_json(outcome: &SolveOutcome, report: &FuelReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonSummary {
        solve: outcome,
        report,
    })
}
