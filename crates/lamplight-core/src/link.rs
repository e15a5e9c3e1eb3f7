//! Links: lamp-carrying edges between two fuel sources.

use serde::{Deserialize, Serialize};

use crate::id::SourceId;

/// An edge between two sources carrying a fixed number of lamps.
///
/// Each endpoint contributes a separately tracked satisfied value: the
/// largest radius that endpoint's source has reached so far. The two values
/// only ever grow, and only through [`crate::fuel::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub endpoint_a: SourceId,
    pub endpoint_b: SourceId,
    /// Lamps on the link. Fixed at creation.
    pub required: i64,
    satisfied_a: i64,
    satisfied_b: i64,
}

impl Link {
    /// Creates an unfueled link.
    pub fn new(endpoint_a: SourceId, endpoint_b: SourceId, required: i64) -> Self {
        Link {
            endpoint_a,
            endpoint_b,
            required,
            satisfied_a: 0,
            satisfied_b: 0,
        }
    }

    /// Satisfied value attributed to `endpoint_a`.
    pub fn satisfied_a(&self) -> i64 {
        self.satisfied_a
    }

    /// Satisfied value attributed to `endpoint_b`.
    pub fn satisfied_b(&self) -> i64 {
        self.satisfied_b
    }

    /// Satisfied value attributed to `id`'s side, or `None` if `id` is not an
    /// endpoint. For a self-loop this is the `endpoint_a` side.
    pub fn satisfied_by(&self, id: SourceId) -> Option<i64> {
        if self.endpoint_a == id {
            Some(self.satisfied_a)
        } else if self.endpoint_b == id {
            Some(self.satisfied_b)
        } else {
            None
        }
    }

    /// Sum of both endpoint-attributed values. May exceed `required`, and
    /// is widened so that two sides near `i64::MAX` still add up.
    pub fn total_satisfied(&self) -> i128 {
        i128::from(self.satisfied_a) + i128::from(self.satisfied_b)
    }

    /// True while the link still has unfueled lamps.
    pub fn is_open(&self) -> bool {
        self.total_satisfied() < i128::from(self.required)
    }

    /// Lamps still unfueled; zero once the link is saturated. Never exceeds
    /// `required`.
    pub fn deficit(&self) -> i64 {
        let missing = (i128::from(self.required) - self.total_satisfied()).max(0);
        i64::try_from(missing).unwrap_or(i64::MAX)
    }

    pub fn has_endpoint(&self, id: SourceId) -> bool {
        self.endpoint_a == id || self.endpoint_b == id
    }

    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    /// Id of the source at the far end from `id`. A self-loop's far end is
    /// `id` itself.
    pub fn other(&self, id: SourceId) -> Option<SourceId> {
        if self.endpoint_a == id {
            Some(self.endpoint_b)
        } else if self.endpoint_b == id {
            Some(self.endpoint_a)
        } else {
            None
        }
    }

    /// Mutable access to `id`'s side. Crate-private so the satisfied values
    /// can only move through the fueling rule.
    pub(crate) fn side_mut(&mut self, id: SourceId) -> Option<&mut i64> {
        if self.endpoint_a == id {
            Some(&mut self.satisfied_a)
        } else if self.endpoint_b == id {
            Some(&mut self.satisfied_b)
        } else {
            None
        }
    }
}
