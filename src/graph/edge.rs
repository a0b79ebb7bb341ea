//! Edge implementation for property graph
//!
//! Edges are directed and labeled. Several edges may join the same pair of
//! nodes, each with its own id.

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, Label, NodeId};
use serde::Serialize;

/// A directed edge in the property graph
///
/// Endpoints and label are fixed at creation. Only the properties can be
/// replaced afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Label classifying the relation (e.g., "KNOWS", "LEADS_TO")
    pub label: Label,

    /// Properties associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new edge with properties
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        label: impl Into<Label>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            label: label.into(),
            properties,
        }
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
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
