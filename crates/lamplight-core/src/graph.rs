//! FuelGraph: the container holding every source and link of one problem.
//!
//! Links are stored exactly once, as edge weights of an undirected petgraph
//! `StableGraph`. Sources are node weights and refer to their incident links
//! by [`LinkId`], so fueling a link through either endpoint updates the same
//! record.
//!
//! The registry maps each [`SourceId`] to its node and remembers the order
//! in which sources were first seen. That order is the scan order used by
//! the solver.
//!
//! All mutations go through `FuelGraph` methods. Radii and satisfied values
//! only ever grow.

use indexmap::IndexMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fuel::{self, FuelEffect};
use crate::id::{LinkId, SourceId};
use crate::link::Link;
use crate::source::Source;

/// Sources connected by lamp-carrying links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuelGraph {
    graph: StableGraph<Source, Link, Undirected, u32>,
    /// Source id -> node, in first-seen order.
    registry: IndexMap<SourceId, NodeIndex<u32>>,
}

impl FuelGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(endpoint_a, endpoint_b, lamps)` records, in the
    /// order given.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, i64)>,
    {
        let mut graph = FuelGraph::new();
        for (a, b, lamps) in records {
            graph.add_link(SourceId(a), SourceId(b), lamps);
        }
        graph
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Returns the source with `id`, creating it with radius 0 if this is the
    /// first time `id` is seen.
    pub fn get_or_create_source(&mut self, id: SourceId) -> &Source {
        let idx = self.node_for(id);
        &self.graph[idx]
    }

    /// Declares a link between `a` and `b`, creating either endpoint on
    /// first sight. The link is attached to both endpoints' incident lists
    /// (once, for a self-loop).
    pub fn add_link(&mut self, a: SourceId, b: SourceId, lamps: i64) -> LinkId {
        let na = self.node_for(a);
        let nb = self.node_for(b);
        let link = LinkId::from(self.graph.add_edge(na, nb, Link::new(a, b, lamps)));

        self.graph[na].attach(link);
        if nb != na {
            self.graph[nb].attach(link);
        }

        #[cfg(debug_assertions)]
        self.assert_consistency();

        link
    }

    fn node_for(&mut self, id: SourceId) -> NodeIndex<u32> {
        if let Some(&idx) = self.registry.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(Source::new(id));
        self.registry.insert(id, idx);
        idx
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    fn node_index(&self, id: SourceId) -> Result<NodeIndex<u32>, CoreError> {
        self.registry
            .get(&id)
            .copied()
            .ok_or(CoreError::SourceNotFound { id })
    }

    /// Looks up a source by id.
    pub fn source(&self, id: SourceId) -> Result<&Source, CoreError> {
        let idx = self.node_index(id)?;
        self.graph
            .node_weight(idx)
            .ok_or(CoreError::SourceNotFound { id })
    }

    pub fn contains_source(&self, id: SourceId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Looks up a link by id.
    pub fn link(&self, id: LinkId) -> Result<&Link, CoreError> {
        self.graph
            .edge_weight(EdgeIndex::from(id))
            .ok_or(CoreError::LinkNotFound { id })
    }

    /// All sources in registry (first-seen) order.
    pub fn sources(&self) -> impl Iterator<Item = &Source> + '_ {
        self.registry.values().map(|&idx| &self.graph[idx])
    }

    /// All source ids in registry order.
    pub fn source_ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.registry.keys().copied()
    }

    /// All links in declaration order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.graph
            .edge_indices()
            .map(|idx| (LinkId::from(idx), &self.graph[idx]))
    }

    /// Links incident to `id`, in declaration order.
    pub fn incident_links(
        &self,
        id: SourceId,
    ) -> Result<impl Iterator<Item = (LinkId, &Link)> + '_, CoreError> {
        let source = self.source(id)?;
        Ok(source
            .links()
            .iter()
            .map(|&link| (link, &self.graph[EdgeIndex::from(link)])))
    }

    /// Id of the source at the other end of `link` from `id`.
    pub fn other_endpoint(&self, link: LinkId, id: SourceId) -> Result<SourceId, CoreError> {
        self.link(link)?
            .other(id)
            .ok_or(CoreError::NotAnEndpoint { link, source_id: id })
    }

    pub fn source_count(&self) -> usize {
        self.registry.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Sum of all radii: the total fuel spent. Widened to `i128` since
    /// several radii near `i64::MAX` can coexist.
    pub fn total_radius(&self) -> i128 {
        self.sources().map(|s| i128::from(s.radius())).sum()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Grows `id`'s radius by `delta` and returns the new radius. Does not
    /// touch any link; call [`fuel_from`](Self::fuel_from) afterwards.
    pub fn raise_radius(&mut self, id: SourceId, delta: i64) -> Result<i64, CoreError> {
        if delta < 0 {
            return Err(CoreError::NegativeGrowth { id, delta });
        }
        let idx = self.node_index(id)?;
        self.graph[idx]
            .grow(delta)
            .ok_or(CoreError::RadiusOverflow { id })
    }

    /// Applies `id`'s current radius to every link incident to it. Returns the
    /// number of link sides that grew.
    pub fn fuel_from(&mut self, id: SourceId) -> Result<usize, CoreError> {
        let idx = self.node_index(id)?;
        let source = self.graph[idx].clone();

        let mut raised = 0;
        for &link in source.links() {
            let weight = self
                .graph
                .edge_weight_mut(EdgeIndex::from(link))
                .ok_or(CoreError::LinkNotFound { id: link })?;
            if let FuelEffect::Raised { .. } = fuel::apply(weight, &source) {
                raised += 1;
            }
        }

        #[cfg(debug_assertions)]
        self.assert_consistency();

        Ok(raised)
    }

    // -----------------------------------------------------------------------
    // Debug consistency assertion
    // -----------------------------------------------------------------------

    /// Verifies that every link resolves to registered endpoints that list
    /// it, and that no side exceeds its source's radius.
    #[cfg(debug_assertions)]
    fn assert_consistency(&self) {
        for (id, link) in self.links() {
            for end in [link.endpoint_a, link.endpoint_b] {
                let source = match self.source(end) {
                    Ok(s) => s,
                    Err(e) => panic!("link {} has dangling endpoint: {}", id, e),
                };
                assert!(
                    source.links().contains(&id),
                    "source {} does not list incident link {}",
                    end,
                    id
                );
                let side = link.satisfied_by(end).unwrap_or(0);
                assert!(
                    side <= source.radius(),
                    "link {} side {} = {} exceeds radius {}",
                    id,
                    end,
                    side,
                    source.radius()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn path_graph() -> FuelGraph {
        FuelGraph::from_records([(1, 2, 3), (2, 3, 7)])
    }

    #[test]
    fn sources_are_created_lazily_in_first_seen_order() {
        let graph = FuelGraph::from_records([(5, 2, 1), (2, 9, 1), (9, 5, 1)]);
        let ids: Vec<_> = graph.source_ids().collect();
        assert_eq!(ids, vec![SourceId(5), SourceId(2), SourceId(9)]);
        assert_eq!(graph.source_count(), 3);
        assert_eq!(graph.link_count(), 3);
    }

    #[test]
    fn registry_has_no_duplicates() {
        let mut graph = path_graph();
        graph.get_or_create_source(SourceId(2));
        graph.get_or_create_source(SourceId(4));
        assert_eq!(graph.source_count(), 4);
        assert_eq!(graph.source(SourceId(4)).unwrap().degree(), 0);
    }

    #[test]
    fn link_is_attached_to_both_endpoints() {
        let graph = path_graph();
        assert_eq!(graph.source(SourceId(1)).unwrap().links(), &[LinkId(0)]);
        assert_eq!(
            graph.source(SourceId(2)).unwrap().links(),
            &[LinkId(0), LinkId(1)]
        );
        assert_eq!(graph.source(SourceId(3)).unwrap().links(), &[LinkId(1)]);
    }

    #[test]
    fn self_loop_is_attached_once() {
        let graph = FuelGraph::from_records([(4, 4, 2)]);
        assert_eq!(graph.source(SourceId(4)).unwrap().links(), &[LinkId(0)]);
    }

    #[test]
    fn missing_source_is_a_typed_error() {
        let graph = path_graph();
        assert_eq!(
            graph.source(SourceId(42)).unwrap_err(),
            CoreError::SourceNotFound { id: SourceId(42) }
        );
        assert!(graph.incident_links(SourceId(42)).is_err());
        assert_eq!(
            graph.link(LinkId(9)).unwrap_err(),
            CoreError::LinkNotFound { id: LinkId(9) }
        );
    }

    #[test]
    fn other_endpoint_checks_membership() {
        let graph = path_graph();
        assert_eq!(graph.other_endpoint(LinkId(1), SourceId(3)).unwrap(), SourceId(2));
        assert_eq!(
            graph.other_endpoint(LinkId(1), SourceId(1)).unwrap_err(),
            CoreError::NotAnEndpoint {
                link: LinkId(1),
                source_id: SourceId(1)
            }
        );
    }

    #[test]
    fn fueling_through_one_endpoint_is_visible_from_the_other() {
        let mut graph = path_graph();
        graph.raise_radius(SourceId(2), 3).unwrap();
        assert_eq!(graph.fuel_from(SourceId(2)).unwrap(), 2);

        let seen_from_1: Vec<_> = graph
            .incident_links(SourceId(1))
            .unwrap()
            .map(|(_, l)| l.total_satisfied())
            .collect();
        let seen_from_3: Vec<_> = graph
            .incident_links(SourceId(3))
            .unwrap()
            .map(|(_, l)| l.total_satisfied())
            .collect();
        assert_eq!(seen_from_1, vec![3]);
        assert_eq!(seen_from_3, vec![3]);
    }

    #[test]
    fn fuel_from_is_idempotent() {
        let mut graph = path_graph();
        graph.raise_radius(SourceId(2), 5).unwrap();
        graph.fuel_from(SourceId(2)).unwrap();
        assert_eq!(graph.fuel_from(SourceId(2)).unwrap(), 0);
        assert_eq!(graph.link(LinkId(0)).unwrap().total_satisfied(), 5);
    }

    #[test]
    fn radius_cannot_shrink() {
        let mut graph = path_graph();
        graph.raise_radius(SourceId(1), 2).unwrap();
        assert_eq!(
            graph.raise_radius(SourceId(1), -1).unwrap_err(),
            CoreError::NegativeGrowth {
                id: SourceId(1),
                delta: -1
            }
        );
        assert_eq!(graph.source(SourceId(1)).unwrap().radius(), 2);
    }

    #[test]
    fn radius_overflow_is_a_typed_error() {
        let mut graph = path_graph();
        graph.raise_radius(SourceId(2), i64::MAX).unwrap();
        assert_eq!(
            graph.raise_radius(SourceId(2), 1).unwrap_err(),
            CoreError::RadiusOverflow { id: SourceId(2) }
        );
        assert_eq!(graph.source(SourceId(2)).unwrap().radius(), i64::MAX);
    }

    #[test]
    fn total_radius_of_huge_radii_does_not_wrap() {
        let mut graph = FuelGraph::from_records([(1, 2, 1), (3, 4, 1)]);
        graph.raise_radius(SourceId(1), i64::MAX).unwrap();
        graph.raise_radius(SourceId(3), i64::MAX).unwrap();
        assert_eq!(graph.total_radius(), 2 * i128::from(i64::MAX));
    }

    #[test]
    fn total_radius_sums_all_sources() {
        let mut graph = path_graph();
        graph.raise_radius(SourceId(1), 2).unwrap();
        graph.raise_radius(SourceId(3), 4).unwrap();
        assert_eq!(graph.total_radius(), 6);
    }

    #[test]
    fn serde_roundtrip_preserves_registry_order_and_state() {
        let mut graph = FuelGraph::from_records([(7, 1, 4), (1, 3, 2)]);
        graph.raise_radius(SourceId(1), 2).unwrap();
        graph.fuel_from(SourceId(1)).unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        let back: FuelGraph = serde_json::from_str(&json).unwrap();

        assert_eq!(
            back.source_ids().collect::<Vec<_>>(),
            graph.source_ids().collect::<Vec<_>>()
        );
        assert_eq!(back.link(LinkId(1)).unwrap(), graph.link(LinkId(1)).unwrap());
        assert_eq!(back.total_radius(), 2);
    }

    fn arb_records() -> impl Strategy<Value = Vec<(u32, u32, i64)>> {
        prop::collection::vec((0u32..6, 0u32..6, 0i64..20), 0..24)
    }

    proptest! {
        #[test]
        fn registry_holds_each_id_once(records in arb_records()) {
            let graph = FuelGraph::from_records(records.iter().copied());
            let distinct: HashSet<u32> =
                records.iter().flat_map(|&(a, b, _)| [a, b]).collect();
            let ids: Vec<SourceId> = graph.source_ids().collect();
            let unique: HashSet<SourceId> = ids.iter().copied().collect();

            prop_assert_eq!(graph.source_count(), distinct.len());
            prop_assert_eq!(ids.len(), unique.len());
            prop_assert_eq!(graph.link_count(), records.len());
        }

        #[test]
        fn every_link_is_listed_by_both_endpoints(records in arb_records()) {
            let graph = FuelGraph::from_records(records.iter().copied());
            for (id, link) in graph.links() {
                let a = graph.source(link.endpoint_a).unwrap();
                let b = graph.source(link.endpoint_b).unwrap();
                prop_assert!(a.links().contains(&id));
                prop_assert!(b.links().contains(&id));
            }
        }

        #[test]
        fn fueling_twice_raises_nothing_the_second_time(
            records in arb_records(),
            pick in any::<prop::sample::Index>(),
            delta in 0i64..50,
        ) {
            prop_assume!(!records.is_empty());
            let mut graph = FuelGraph::from_records(records.iter().copied());
            let ids: Vec<SourceId> = graph.source_ids().collect();
            let id = ids[pick.index(ids.len())];

            graph.raise_radius(id, delta).unwrap();
            graph.fuel_from(id).unwrap();
            let before: Vec<Link> = graph.links().map(|(_, l)| l.clone()).collect();

            prop_assert_eq!(graph.fuel_from(id).unwrap(), 0);
            let after: Vec<Link> = graph.links().map(|(_, l)| l.clone()).collect();
            prop_assert_eq!(before, after);
        }
    }
}
