//! Directed graph container and its traversals.
//!
//! - `vertex` / `edge`: the records a graph is made of
//! - `digraph`: the keyed container and its mutation/query API
//! - `algorithms`: BFS, shortest paths and structural queries

pub mod algorithms;
pub mod digraph;
pub mod edge;
pub mod vertex;
pub(crate) mod access;

pub use algorithms::Bfs;
pub use digraph::{DiGraph, GraphStatistics};
pub use edge::Edge;
pub use vertex::{Vertex, VertexId};
