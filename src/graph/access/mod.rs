//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so graph algorithms can share scratch state
//! without exposing it as part of the public API surface.

pub(crate) mod visited;
