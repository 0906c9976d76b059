//! Error type for operations that fail hard.
//!
//! Only a handful of graph operations report errors: adding an edge and starting a
//! traversal from a vertex that is not in the graph. Every other lookup miss degrades
//! to `false` or `None` at the call site.

use thiserror::Error;

/// Errors produced by [`DiGraph`](crate::DiGraph) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex named by the caller does not exist in the graph.
    #[error("vertex does not exist")]
    VertexNotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_not_found_message() {
        assert_eq!(GraphError::VertexNotFound.to_string(), "vertex does not exist");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<GraphError>();
    }
}
