//! Vertex records: the value, its outgoing edges and its parent back-references.

use indexmap::IndexSet;

use super::edge::Edge;
use crate::collections::SlotKey;

/// Stable handle to a vertex inside one [`DiGraph`](super::DiGraph).
///
/// Handles are generational: once a vertex is removed its handle never matches
/// another vertex, even if the arena slot is reused.
pub type VertexId = SlotKey;

/// A vertex of a [`DiGraph`](super::DiGraph).
///
/// Owns its outgoing edges. `parents` records every vertex that has an edge
/// ending here, kept alongside the edges so reverse walks do not have to scan
/// the whole graph. Parents are handles only and never keep a vertex alive.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
    outgoing: Vec<Edge>,
    parents: IndexSet<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            outgoing: Vec::new(),
            parents: IndexSet::new(),
        }
    }

    /// Handle of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The identifier this vertex was added under.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.outgoing
    }

    /// Number of outgoing edges, counting duplicates.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Vertices with at least one edge ending here, in first-linked order.
    pub fn parents(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.parents.iter().copied()
    }

    /// Returns `true` if no edge ends at this vertex.
    #[inline]
    pub fn no_parents(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns `true` if some outgoing edge ends at `target`.
    pub fn has_edge(&self, target: VertexId) -> bool {
        self.outgoing.iter().any(|e| e.is_between(self.id, target))
    }

    /// Appends an edge to `target`. Duplicates are kept.
    pub(crate) fn add_edge(&mut self, target: VertexId, weight: i32) -> bool {
        self.outgoing.push(Edge::new(self.id, target, weight));
        true
    }

    /// Removes the first edge to `target`, if any.
    pub(crate) fn remove_edge(&mut self, target: VertexId) -> bool {
        let id = self.id;
        match self.outgoing.iter().position(|e| e.is_between(id, target)) {
            Some(pos) => {
                self.outgoing.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every edge to `target`, returning how many were dropped.
    pub(crate) fn remove_edges_to(&mut self, target: VertexId) -> usize {
        let id = self.id;
        let before = self.outgoing.len();
        self.outgoing.retain(|e| !e.is_between(id, target));
        before - self.outgoing.len()
    }

    pub(crate) fn add_parent(&mut self, parent: VertexId) {
        self.parents.insert(parent);
    }

    pub(crate) fn remove_parent(&mut self, parent: VertexId) -> bool {
        self.parents.shift_remove(&parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::SlotMap;

    fn two_vertices() -> (Vertex<&'static str>, VertexId) {
        let mut ids = SlotMap::new();
        let a = ids.insert(());
        let b = ids.insert(());
        (Vertex::new(a, "A"), b)
    }

    #[test]
    fn add_edge_keeps_duplicates() {
        let (mut a, b) = two_vertices();
        assert!(a.add_edge(b, 1));
        assert!(a.add_edge(b, 2));
        assert_eq!(a.edge_count(), 2);
        assert!(a.has_edge(b));
        assert_eq!(a.edges()[1].weight(), 2);
    }

    #[test]
    fn remove_edge_takes_first_match_only() {
        let (mut a, b) = two_vertices();
        a.add_edge(b, 1);
        a.add_edge(b, 2);

        assert!(a.remove_edge(b));
        assert_eq!(a.edge_count(), 1);
        assert_eq!(a.edges()[0].weight(), 2);

        assert!(a.remove_edge(b));
        assert!(!a.remove_edge(b));
        assert!(!a.has_edge(b));
    }

    #[test]
    fn remove_edges_to_drops_all() {
        let (mut a, b) = two_vertices();
        let self_id = a.id();
        a.add_edge(b, 0);
        a.add_edge(self_id, 0);
        a.add_edge(b, 0);

        assert_eq!(a.remove_edges_to(b), 2);
        assert_eq!(a.edge_count(), 1);
        assert!(a.has_edge(self_id));
    }

    #[test]
    fn parents_are_a_set() {
        let (mut a, b) = two_vertices();
        assert!(a.no_parents());
        a.add_parent(b);
        a.add_parent(b);
        assert_eq!(a.parents().len(), 1);
        assert!(a.remove_parent(b));
        assert!(!a.remove_parent(b));
        assert!(a.no_parents());
        assert_eq!(*a.value(), "A");
    }
}
