//! Breadth-first traversals over `DiGraph`.
//!
//! Every algorithm here is an unweighted BFS (or a BFS followed by a queue-based
//! peel). Edge weights are never read. Scratch state comes from
//! [`access::visited`](crate::graph::access::visited) and is rebuilt per call, so
//! all queries take `&self`.

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexSet;
use tracing::trace;

use super::access::visited::{BfsTree, VisitedFlags};
use super::digraph::DiGraph;
use super::vertex::VertexId;
use crate::error::Result;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex values in BFS order, starting with the root. Vertices are marked
/// when discovered, so each is yielded once.
pub struct Bfs<'a, T> {
    graph: &'a DiGraph<T>,
    visited: VisitedFlags,
    queue: VecDeque<VertexId>,
}

impl<'a, T> Bfs<'a, T> {
    fn new(graph: &'a DiGraph<T>, start: Option<VertexId>) -> Self {
        let mut visited = VisitedFlags::new(graph.vertices.slot_count());
        let mut queue = VecDeque::new();

        if let Some(start) = start {
            visited.mark(start);
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, T> Iterator for Bfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let vertex = graph.vertices.get(self.queue.pop_front()?)?;

        for edge in vertex.edges() {
            let v = edge.to_node();
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(vertex.value())
    }
}

impl<T> DiGraph<T> {
    /// Builds the BFS tree rooted at `start`.
    fn run_bfs(&self, start: VertexId) -> BfsTree {
        let mut tree = BfsTree::new(self.vertices.slot_count());
        let mut queue = VecDeque::new();
        tree.mark_root(start);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            let Some(vertex) = self.vertices.get(u) else {
                continue;
            };
            for edge in vertex.edges() {
                let v = edge.to_node();
                if tree.discover(v, u) {
                    queue.push_back(v);
                }
            }
        }
        tree
    }

    /// Vertices reachable from `start` (inclusive) in BFS order.
    fn reachable_from(&self, start: VertexId) -> Vec<VertexId> {
        let mut visited = VisitedFlags::new(self.vertices.slot_count());
        let mut order = vec![start];
        visited.mark(start);

        let mut head = 0;
        while let Some(&u) = order.get(head) {
            head += 1;
            let Some(vertex) = self.vertices.get(u) else {
                continue;
            };
            for edge in vertex.edges() {
                let v = edge.to_node();
                if visited.try_visit(v) {
                    order.push(v);
                }
            }
        }
        order
    }

    /// Handles on a shortest path from `start` (exclusive) to `end` (inclusive).
    fn path_between(&self, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
        if start == end {
            return Some(Vec::new());
        }

        let tree = self.run_bfs(start);
        if !tree.is_visited(end) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = end;
        while current != start {
            path.push(current);
            current = tree.parent(current)?;
        }
        path.reverse();
        Some(path)
    }

    fn values_of(&self, ids: &[VertexId]) -> Option<Vec<T>>
    where
        T: Clone,
    {
        ids.iter()
            .map(|&id| self.vertices.get(id).map(|v| v.value().clone()))
            .collect()
    }

    fn mutually_reachable(&self, a: VertexId, b: VertexId) -> bool {
        self.path_between(a, b).is_some() && self.path_between(b, a).is_some()
    }
}

impl<T> DiGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Iterates over the vertices reachable from `start` in breadth-first order.
    ///
    /// Empty if `start` does not exist.
    pub fn bfs<Q>(&self, start: &Q) -> Bfs<'_, T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Bfs::new(self, self.vertex_id(start))
    }

    /// Returns a shortest path from `start` to `end`, ignoring edge weights.
    ///
    /// The path lists the vertices after `start` up to and including `end`, so
    /// `shortest_path(a, a)` is `Some(vec![])`. Returns `None` if either vertex
    /// is missing or `end` cannot be reached.
    pub fn shortest_path<Q>(&self, start: &Q, end: &Q) -> Option<Vec<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.vertex_id(start)?;
        let e = self.vertex_id(end)?;
        let path = self.path_between(s, e)?;
        trace!(from = ?s, to = ?e, hops = path.len(), "shortest path found");
        self.values_of(&path)
    }

    /// Returns `true` if a directed cycle is reachable from `start`.
    ///
    /// Runs a BFS to collect the reachable vertices, then repeatedly peels off
    /// those with no remaining incoming edge from the reachable set. Anything
    /// left over sits on or behind a cycle. Self-edges count as cycles.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `start` does not exist.
    pub fn has_loop<Q>(&self, start: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.require(start)?;
        let reachable = self.reachable_from(s);

        let mut in_degree = vec![0usize; self.vertices.slot_count()];
        for vertex in reachable.iter().filter_map(|&u| self.vertices.get(u)) {
            for edge in vertex.edges() {
                in_degree[edge.to_node().index()] += 1;
            }
        }

        let mut queue: VecDeque<VertexId> = reachable
            .iter()
            .copied()
            .filter(|u| in_degree[u.index()] == 0)
            .collect();
        let mut peeled = 0;
        while let Some(u) = queue.pop_front() {
            peeled += 1;
            let Some(vertex) = self.vertices.get(u) else {
                continue;
            };
            for edge in vertex.edges() {
                let slot = &mut in_degree[edge.to_node().index()];
                *slot -= 1;
                if *slot == 0 {
                    queue.push_back(edge.to_node());
                }
            }
        }

        trace!(start = ?s, reachable = reachable.len(), peeled, "loop check finished");
        Ok(peeled < reachable.len())
    }

    /// Returns `true` if some vertex cannot be reached from `start` when edges
    /// may be walked in either direction.
    ///
    /// The walk follows outgoing edges and parent back-references, ticking
    /// reached vertices off a working copy of the vertex list.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `start` does not exist.
    pub fn has_island<Q>(&self, start: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let s = self.require(start)?;
        let mut unreached: IndexSet<VertexId> = self.order.iter().copied().collect();
        let mut visited = VisitedFlags::new(self.vertices.slot_count());
        let mut queue = VecDeque::new();

        visited.mark(s);
        unreached.swap_remove(&s);
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            let Some(vertex) = self.vertices.get(u) else {
                continue;
            };
            let targets = vertex.edges().iter().map(|e| e.to_node());
            for v in vertex.parents().chain(targets) {
                if visited.try_visit(v) {
                    unreached.swap_remove(&v);
                    queue.push_back(v);
                }
            }
        }

        trace!(start = ?s, unreached = unreached.len(), "island check finished");
        Ok(!unreached.is_empty())
    }

    /// Returns `true` if two distinct vertices can each reach the other.
    ///
    /// Pairs are checked in insertion order with two shortest-path searches per
    /// pair, which is \(O(V^2)\) BFS runs. Meant for small graphs.
    pub fn is_loop(&self) -> bool {
        let ids = &self.order;
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                if self.mutually_reachable(a, b) {
                    trace!(first = ?a, second = ?b, "mutually reachable pair");
                    return true;
                }
            }
        }
        false
    }

    /// Parallel form of [`is_loop`](Self::is_loop); pairs are spread over the
    /// rayon pool. Same answer, no ordering guarantee on which pair is found.
    #[cfg(feature = "parallel")]
    pub fn par_is_loop(&self) -> bool
    where
        T: Sync,
    {
        use rayon::prelude::*;

        let ids = &self.order;
        (0..ids.len()).into_par_iter().any(|i| {
            let a = ids[i];
            ids[i + 1..].iter().any(|&b| self.mutually_reachable(a, b))
        })
    }
}
