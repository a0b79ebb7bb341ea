//! Node implementation for property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId};
use serde::Serialize;

/// A node in the property graph
///
/// Nodes have:
/// - A unique ID
/// - Properties (key-value pairs)
/// - Outgoing and incoming edge ids, in the order the edges were created
///
/// The adjacency lists are owned by the store. They change only when an
/// edge touching this node is created or deleted, which is why a `Node`
/// can be serialized for export but never deserialized back.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Properties associated with this node
    pub properties: PropertyMap,

    /// Edges leaving this node
    pub(crate) out_edges: Vec<EdgeId>,

    /// Edges arriving at this node
    pub(crate) in_edges: Vec<EdgeId>,
}

impl Node {
    /// Create a node with the given properties and no edges
    pub fn new(id: NodeId, properties: PropertyMap) -> Self {
        Node {
            id,
            properties,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    /// Outgoing edge ids in creation order
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    /// Incoming edge ids in creation order
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Remove one occurrence of `edge` from the outgoing list.
    ///
    /// Returns false if the edge was not listed.
    pub(crate) fn unlink_out(&mut self, edge: EdgeId) -> bool {
        match self.out_edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.out_edges.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove one occurrence of `edge` from the incoming list.
    pub(crate) fn unlink_in(&mut self, edge: EdgeId) -> bool {
        match self.in_edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.in_edges.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
