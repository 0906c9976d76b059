//! `DiGraph` - a mutable directed graph keyed by vertex value.
//!
//! Vertices live in a generational [`SlotMap`] and are found through a hash index
//! from value to [`VertexId`]. Each vertex owns its outgoing edges and keeps the
//! handles of its parents, so removing a vertex only touches its neighbours.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Hash insert + arena slot |
//! | `remove_vertex` | \(O(n + \deg)\) | Neighbour updates plus insertion-order scan |
//! | `add_edge` | \(O(1)\) amortized | No duplicate check |
//! | `remove_edge` | \(O(\text{out-degree})\) | Linear scan of outgoing edges |
//! | `contains_edge` | \(O(\text{out-degree})\) | |
//! | `edge_count` | \(O(n)\) | Sums out-degrees |

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, warn};

use super::vertex::{Vertex, VertexId};
use crate::collections::SlotMap;
use crate::error::{GraphError, Result};

/// A mutable directed graph with weighted edges, keyed by vertex value.
///
/// Each value identifies exactly one vertex. Edges are directed and may repeat:
/// adding `a -> b` twice stores two edges. Self-edges are allowed.
///
/// Operations that add an edge or start a traversal from a missing vertex return
/// [`GraphError::VertexNotFound`]. Removals and membership queries treat a
/// missing vertex as "nothing there" and return `false` or `None` instead.
#[derive(Debug, Clone)]
pub struct DiGraph<T> {
    pub(crate) vertices: SlotMap<Vertex<T>>,
    index: HashMap<T, VertexId>,
    /// Live vertex handles in insertion order.
    pub(crate) order: Vec<VertexId>,
}

impl<T> DiGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::new(),
            index: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: SlotMap::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|(_, v)| v.edge_count()).sum()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.order.clear();
        debug!("graph cleared");
    }

    /// Looks up a vertex by handle.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id)
    }

    /// Iterates over vertex values in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.vertices.get(id))
            .map(Vertex::value)
    }

    /// Iterates over `(from, to, weight)` for every edge.
    ///
    /// Sources come in vertex insertion order; edges of one source in the order
    /// they were added.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T, i32)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.vertices.get(id))
            .flat_map(move |source| {
                source.edges().iter().filter_map(move |edge| {
                    let target = self.vertices.get(edge.to_node())?;
                    Some((source.value(), target.value(), edge.weight()))
                })
            })
    }

    fn out_values(&self, id: Option<VertexId>) -> impl Iterator<Item = &T> + '_ {
        id.and_then(|id| self.vertices.get(id))
            .map(|v| {
                v.edges()
                    .iter()
                    .filter_map(move |e| self.vertices.get(e.to_node()))
                    .map(Vertex::value)
            })
            .into_iter()
            .flatten()
    }

    fn parent_values(&self, id: Option<VertexId>) -> impl Iterator<Item = &T> + '_ {
        id.and_then(|id| self.vertices.get(id))
            .map(|v| {
                v.parents()
                    .filter_map(move |p| self.vertices.get(p))
                    .map(Vertex::value)
            })
            .into_iter()
            .flatten()
    }

    /// Computes out-degree statistics.
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let mut degrees: Vec<usize> = self.vertices.iter().map(|(_, v)| v.edge_count()).collect();
        degrees.sort_unstable();
        let edge_count: usize = degrees.iter().sum();

        let min_degree = degrees.first().copied().unwrap_or(0);
        let max_degree = degrees.last().copied().unwrap_or(0);
        let median_degree = match degrees.len() {
            0 => 0,
            n if n % 2 == 0 => (degrees[n / 2 - 1] + degrees[n / 2]) / 2,
            n => degrees[n / 2],
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                edge_count as f64 / vertex_count as f64
            },
        }
    }
}

impl<T> DiGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Adds a vertex. Returns `false` and changes nothing if it already exists.
    pub fn add_vertex(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        let key = value.clone();
        let id = self.vertices.insert_with_key(|id| Vertex::new(id, value));
        self.index.insert(key, id);
        self.order.push(id);
        debug!(vertex = ?id, "vertex added");
        true
    }

    /// Returns the handle of the vertex for `value`.
    pub fn vertex_id<Q>(&self, value: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Returns the vertex record for `value`.
    pub fn vertex<Q>(&self, value: &Q) -> Option<&Vertex<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_id(value).and_then(|id| self.vertices.get(id))
    }

    /// Resolves `value` to a handle, failing hard when it is missing.
    pub(crate) fn require<Q>(&self, value: &Q) -> Result<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_id(value).ok_or_else(|| {
            warn!("vertex does not exist");
            GraphError::VertexNotFound
        })
    }

    /// Adds an edge `from -> to` with weight 0.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing; the graph is
    /// left unchanged.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.add_weighted_edge(from, to, 0)
    }

    /// Adds an edge `from -> to` carrying `weight`.
    ///
    /// Always reports `Ok(true)` on success; an existing `from -> to` edge is not
    /// replaced, the new one is stored next to it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing; the graph is
    /// left unchanged.
    pub fn add_weighted_edge<Q>(&mut self, from: &Q, to: &Q, weight: i32) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let u = self.require(from)?;
        let v = self.require(to)?;

        self.vertices
            .get_mut(v)
            .ok_or(GraphError::VertexNotFound)?
            .add_parent(u);
        let inserted = self
            .vertices
            .get_mut(u)
            .ok_or(GraphError::VertexNotFound)?
            .add_edge(v, weight);

        debug!(from = ?u, to = ?v, weight, "edge added");
        Ok(inserted)
    }

    /// Removes a vertex and every edge that starts or ends at it.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(id) = self.index.remove(value) else {
            return false;
        };
        let Some(vertex) = self.vertices.remove(id) else {
            return false;
        };

        for edge in vertex.edges() {
            if let Some(target) = self.vertices.get_mut(edge.to_node()) {
                target.remove_parent(id);
            }
        }
        let mut incoming = 0;
        for parent in vertex.parents() {
            if let Some(source) = self.vertices.get_mut(parent) {
                incoming += source.remove_edges_to(id);
            }
        }
        self.order.retain(|&v| v != id);

        debug!(
            vertex = ?id,
            outgoing = vertex.edge_count(),
            incoming,
            "vertex removed"
        );
        true
    }

    /// Removes one edge `from -> to`.
    ///
    /// Returns `false` if either endpoint is missing or no such edge exists. When
    /// duplicates exist only the first one is removed.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(u), Some(v)) = (self.vertex_id(from), self.vertex_id(to)) else {
            return false;
        };
        let Some(source) = self.vertices.get_mut(u) else {
            return false;
        };
        if !source.remove_edge(v) {
            return false;
        }
        if !source.has_edge(v) {
            if let Some(target) = self.vertices.get_mut(v) {
                target.remove_parent(u);
            }
        }
        debug!(from = ?u, to = ?v, "edge removed");
        true
    }

    /// Returns `true` if the vertex exists.
    pub fn contains_vertex<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Returns `true` if an edge `from -> to` exists. Missing endpoints yield `false`.
    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.vertex(from), self.vertex_id(to)) {
            (Some(source), Some(v)) => source.has_edge(v),
            _ => false,
        }
    }

    /// Weight of the first `from -> to` edge.
    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<i32>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.vertex(from)?;
        let v = self.vertex_id(to)?;
        source
            .edges()
            .iter()
            .find(|e| e.is_between(source.id(), v))
            .map(|e| e.weight())
    }

    /// Out-neighbours of a vertex in edge order, one entry per edge.
    ///
    /// Empty if the vertex does not exist.
    pub fn neighbors<Q>(&self, value: &Q) -> impl Iterator<Item = &T> + '_
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.out_values(self.vertex_id(value))
    }

    /// Vertices with an edge ending at `value`, each listed once.
    ///
    /// Empty if the vertex does not exist.
    pub fn parents<Q>(&self, value: &Q) -> impl Iterator<Item = &T> + '_
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.parent_values(self.vertex_id(value))
    }

    /// Number of edges leaving the vertex.
    pub fn out_degree<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex(value).map(Vertex::edge_count)
    }

    /// Number of edges entering the vertex, counting duplicates.
    pub fn in_degree<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let target = self.vertex(value)?;
        let v = target.id();
        Some(
            target
                .parents()
                .filter_map(move |p| self.vertices.get(p))
                .map(|source| source.edges().iter().filter(|e| e.is_between(source.id(), v)).count())
                .sum(),
        )
    }
}

impl<T> Default for DiGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DiGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_vertex(value);
        }
    }
}

impl<T> FromIterator<T> for DiGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}
