//! # `dwgraph` - Directed Weighted Graph
//!
//! A mutable directed graph keyed by vertex value, with weighted edges,
//! breadth-first traversal, unweighted shortest paths and structural queries
//! (cycle and reachability checks).
//!
//! ## Architecture
//!
//! 1. **Vertex arena** ([`SlotMap`](collections::SlotMap)):
//!    - Vertices live in a generational arena and are addressed by [`VertexId`]
//!    - A handle never aliases a later vertex, even when its slot is reused
//!
//! 2. **Vertex records** ([`Vertex`]):
//!    - Own their outgoing [`Edge`]s
//!    - Keep parent handles for reverse walks (non-owning)
//!
//! 3. **Graph container** ([`DiGraph`]):
//!    - Hash index from value to handle, insertion-ordered vertex list
//!    - Mutation through `&mut self`; every traversal builds its own scratch state
//!      and takes `&self`
//!
//! ## Error policy
//!
//! Adding an edge or starting a traversal (`has_loop`, `has_island`) from a
//! missing vertex fails with [`GraphError::VertexNotFound`]. Removals, membership
//! checks and `shortest_path` report a missing vertex as `false` / `None`.
//!
//! Edge weights are stored and reported but never consulted: shortest paths count
//! hops.
//!
//! ## Example
//!
//! ```rust
//! use dwgraph::DiGraph;
//!
//! let mut graph: DiGraph<&str> = ["A", "B", "C"].into_iter().collect();
//! graph.add_edge("A", "B")?;
//! graph.add_weighted_edge("B", "C", 5)?;
//!
//! assert_eq!(graph.shortest_path("A", "C"), Some(vec!["B", "C"]));
//! assert!(!graph.has_loop("A")?);
//! assert!(!graph.has_island("A")?);
//! # Ok::<(), dwgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{Bfs, DiGraph, Edge, GraphStatistics, Vertex, VertexId};

const _: () = {
    use core::mem;

    // Handles are two packed `u32`s.
    assert!(mem::size_of::<VertexId>() == 8);
    // Edges are two handles plus the weight.
    assert!(mem::size_of::<Edge>() <= 20);
};
