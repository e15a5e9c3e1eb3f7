//! Final-state classification and reporting.

use std::cmp::Ordering;
use std::collections::HashMap;

use lamplight_core::graph::FuelGraph;
use lamplight_core::id::{LinkId, SourceId};
use lamplight_core::link::Link;
use petgraph::unionfind::UnionFind;
use serde::Serialize;

/// How a link's satisfied value compares to its lamp count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Some lamps are unfueled.
    Deficient,
    /// Fueled exactly.
    Exact,
    /// Both endpoints together reach further than needed.
    Overlapping,
}

/// Classifies a link by its current satisfied value.
pub fn classify(link: &Link) -> LinkStatus {
    match link.total_satisfied().cmp(&i128::from(link.required)) {
        Ordering::Less => LinkStatus::Deficient,
        Ordering::Equal => LinkStatus::Exact,
        Ordering::Greater => LinkStatus::Overlapping,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub id: SourceId,
    pub radius: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub id: LinkId,
    pub endpoints: (SourceId, SourceId),
    pub required: i64,
    pub satisfied: i128,
    pub status: LinkStatus,
}

/// Snapshot of a solved graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelReport {
    /// Sources in registry order.
    pub sources: Vec<SourceReport>,
    /// Links in declaration order.
    pub links: Vec<LinkReport>,
    /// Sum of all radii.
    pub total_fuel: i128,
    pub deficient: usize,
    pub exact: usize,
    pub overlapping: usize,
    /// Sources connected through deficient links, one group per connected
    /// component, each in registry order.
    pub stalled_groups: Vec<Vec<SourceId>>,
}

impl FuelReport {
    /// Reads the final state of `graph`.
    pub fn from_graph(graph: &FuelGraph) -> Self {
        let sources: Vec<SourceReport> = graph
            .sources()
            .map(|s| SourceReport {
                id: s.id,
                radius: s.radius(),
            })
            .collect();

        let links: Vec<LinkReport> = graph
            .links()
            .map(|(id, l)| LinkReport {
                id,
                endpoints: (l.endpoint_a, l.endpoint_b),
                required: l.required,
                satisfied: l.total_satisfied(),
                status: classify(l),
            })
            .collect();

        let count = |status: LinkStatus| links.iter().filter(|l| l.status == status).count();
        let deficient = count(LinkStatus::Deficient);
        let exact = count(LinkStatus::Exact);
        let overlapping = count(LinkStatus::Overlapping);

        let stalled_groups = stalled_groups(&sources, &links);

        FuelReport {
            total_fuel: sources.iter().map(|s| i128::from(s.radius)).sum(),
            sources,
            links,
            deficient,
            exact,
            overlapping,
            stalled_groups,
        }
    }

    /// True when no link is deficient.
    pub fn is_fully_fueled(&self) -> bool {
        self.deficient == 0
    }

    pub fn deficient_links(&self) -> impl Iterator<Item = &LinkReport> + '_ {
        self.links
            .iter()
            .filter(|l| l.status == LinkStatus::Deficient)
    }

    /// Final radius of `id`, if it is in the report.
    pub fn radius_of(&self, id: SourceId) -> Option<i64> {
        self.sources.iter().find(|s| s.id == id).map(|s| s.radius)
    }
}

/// Groups the endpoints of deficient links into connected components.
fn stalled_groups(sources: &[SourceReport], links: &[LinkReport]) -> Vec<Vec<SourceId>> {
    let position: HashMap<SourceId, usize> = sources
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    let mut sets = UnionFind::<usize>::new(sources.len());
    let mut stalled = vec![false; sources.len()];
    for link in links.iter().filter(|l| l.status == LinkStatus::Deficient) {
        let (a, b) = link.endpoints;
        if let (Some(&pa), Some(&pb)) = (position.get(&a), position.get(&b)) {
            sets.union(pa, pb);
            stalled[pa] = true;
            stalled[pb] = true;
        }
    }

    // Groups appear in the registry order of their first member.
    let mut group_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<SourceId>> = Vec::new();
    for (i, source) in sources.iter().enumerate() {
        if !stalled[i] {
            continue;
        }
        let root = sets.find(i);
        let group = *group_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(source.id);
    }
    groups
}
