//! Propgraph
//!
//! An embeddable, in-memory property graph store: labeled, directed edges
//! between nodes, typed key/value properties on both, and breadth-first
//! traversal. No persistence, no networking, no internal locking.
//!
//! # Threading
//!
//! [`GraphStore`] is a plain single-owner value. Hosts that share one
//! across threads wrap it themselves (e.g. in a `Mutex`). A [`BfsIterator`]
//! borrows the store, so the store cannot change under a live traversal.
//!
//! ## Example Usage
//!
//! ```rust
//! use propgraph::{GraphStore, PropertyMap};
//!
//! let mut store = GraphStore::new();
//!
//! let mut props = PropertyMap::new();
//! props.insert("name".to_string(), "Alice".into());
//! props.insert("age".to_string(), 30i64.into());
//! let alice = store.add_node(props);
//! let bob = store.add_node(PropertyMap::new());
//!
//! let knows = store.add_edge(alice, bob, "KNOWS", PropertyMap::new()).unwrap();
//! assert_eq!(store.get_node(alice).unwrap().out_edges(), &[knows]);
//!
//! // Eager traversal
//! assert_eq!(store.bfs_order(alice).unwrap(), vec![alice, bob]);
//!
//! // Step-by-step traversal
//! let mut it = store.bfs_iter(alice);
//! while it.has_next() {
//!     let _visited = it.next_node().unwrap();
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use config::{ConfigError, GraphConfig};
pub use graph::{
    BfsIterator, BfsState, Edge, EdgeId, GraphError, GraphResult, GraphStore, Label, Node,
    NodeId, PropertyMap, PropertyValue,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
