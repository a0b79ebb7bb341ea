//! Core graph store implementation
//!
//! This module implements the property graph data model with:
//! - Nodes with properties and ordered in/out adjacency lists
//! - Directed, labeled edges with properties
//! - Multiple edges between the same nodes
//! - Breadth-first traversal, eager or step by step

pub mod display;
pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod traversal;
pub mod types;

// Re-export main types
pub use display::GraphDisplay;
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use traversal::{BfsIterator, BfsState};
pub use types::{EdgeId, Label, NodeId};
