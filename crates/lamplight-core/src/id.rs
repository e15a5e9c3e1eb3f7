//! Stable ID newtypes for graph entities.
//!
//! Sources are identified by the integer id they carry in the input edge
//! list. Links are identified by their declaration position, which is also
//! their petgraph edge index.

use std::fmt;

use petgraph::graph::EdgeIndex;
use serde::{Deserialize, Serialize};

/// Identity of a fuel source, as declared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u32);

/// Identity of a link. Maps to a petgraph `EdgeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u32);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EdgeIndex<u32>> for LinkId {
    fn from(idx: EdgeIndex<u32>) -> Self {
        LinkId(idx.index() as u32)
    }
}

impl From<LinkId> for EdgeIndex<u32> {
    fn from(id: LinkId) -> Self {
        EdgeIndex::new(id.0 as usize)
    }
}
