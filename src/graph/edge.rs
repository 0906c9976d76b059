//! Directed, weighted edge records.

use super::vertex::VertexId;

/// A directed edge `from -> to` carrying an integer weight.
///
/// Edges are immutable once built and refer to their endpoints by [`VertexId`]
/// handles. The weight is stored for callers; no traversal in this crate reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: i32,
}

impl Edge {
    pub(crate) fn new(from: VertexId, to: VertexId, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex handle.
    #[inline]
    pub fn from_node(&self) -> VertexId {
        self.from
    }

    /// Target vertex handle.
    #[inline]
    pub fn to_node(&self) -> VertexId {
        self.to
    }

    /// Weight given when the edge was added (0 by default).
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns `true` if this edge runs from `v1` to `v2`.
    ///
    /// Compares handles, so a vertex removed and re-added under the same value is
    /// a different vertex.
    #[inline]
    pub fn is_between(&self, v1: VertexId, v2: VertexId) -> bool {
        self.from == v1 && self.to == v2
    }
}
