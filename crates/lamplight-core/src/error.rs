//! Core error types for lamplight-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Malformed but
//! structurally valid input (self-loops, negative lamp counts) is accepted by
//! the graph and never produces an error here.

use crate::id::{LinkId, SourceId};
use thiserror::Error;

/// Core errors produced by the lamplight-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A source id is not present in the registry.
    #[error("cannot find source {id}")]
    SourceNotFound { id: SourceId },

    /// A link id does not refer to a declared link.
    #[error("link not found: LinkId({id})")]
    LinkNotFound { id: LinkId },

    /// A radius change would shrink a source's radius.
    #[error("radius of source {id} cannot shrink (delta {delta})")]
    NegativeGrowth { id: SourceId, delta: i64 },

    /// Growing a radius would exceed `i64::MAX`.
    #[error("radius of source {id} overflows")]
    RadiusOverflow { id: SourceId },

    /// A source was asked about a link it is not an endpoint of.
    #[error("source {source_id} is not an endpoint of link {link}")]
    NotAnEndpoint { link: LinkId, source_id: SourceId },
}
