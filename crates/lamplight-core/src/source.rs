//! Fuel sources: graph nodes with a growable radius.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::{LinkId, SourceId};

/// A fueling source.
///
/// `links` lists incident links in declaration order. The link data itself
/// lives once in the [`crate::graph::FuelGraph`]; sources only hold ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    radius: i64,
    links: SmallVec<[LinkId; 4]>,
}

impl Source {
    pub fn new(id: SourceId) -> Self {
        Source {
            id,
            radius: 0,
            links: SmallVec::new(),
        }
    }

    /// Radius of reachable lamps.
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Incident links in the order they were declared.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub fn degree(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn attach(&mut self, link: LinkId) {
        self.links.push(link);
    }

    /// Grows the radius by `delta`, which the caller has checked is
    /// non-negative. Returns `None`, leaving the radius untouched, on
    /// overflow.
    pub(crate) fn grow(&mut self, delta: i64) -> Option<i64> {
        debug_assert!(delta >= 0, "radius may not shrink");
        self.radius = self.radius.checked_add(delta)?;
        Some(self.radius)
    }
}
