//! Storage collections backing the graph.

pub mod slot_map;

pub use slot_map::{SlotKey, SlotMap};
