//! In-memory graph storage implementation
//!
//! The store owns every node and edge. Nodes and edges refer to each other
//! only by id, and every mutation below keeps both sides of the adjacency
//! relation in step:
//! - each edge id listed by a node exists, with that node as its source
//!   (outgoing list) or target (incoming list)
//! - each edge's endpoints exist
//! - an edge id is listed at most once per list
//! - ids are never handed out twice, even after deletion

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::types::{EdgeId, Label, NodeId};
use crate::config::GraphConfig;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
///
/// Plain lookup misses are not errors: `get_*` return `None`, `update_*`
/// return `false` and `delete_*` return `None`.
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("BFS iterator exhausted: no more nodes to visit")]
    IteratorExhausted,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (each node carries its own adjacency lists)
/// - edges: EdgeId -> Edge
///
/// Ids only ever increase, so listing sorts by id to get creation order.
/// Lookups and removals stay O(1) regardless of table size.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Node storage
    nodes: FxHashMap<NodeId, Node>,

    /// Edge storage
    edges: FxHashMap<EdgeId, Edge>,

    /// Next node ID
    next_node_id: u64,

    /// Next edge ID
    next_edge_id: u64,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// Create an empty store with preallocated tables
    pub fn with_config(config: &GraphConfig) -> Self {
        GraphStore {
            nodes: FxHashMap::with_capacity_and_hasher(
                config.initial_node_capacity,
                Default::default(),
            ),
            edges: FxHashMap::with_capacity_and_hasher(
                config.initial_edge_capacity,
                Default::default(),
            ),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    // ============================================================
    // Nodes
    // ============================================================

    /// Create a node with the given properties and no edges
    pub fn add_node(&mut self, properties: PropertyMap) -> NodeId {
        let node_id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;

        self.nodes.insert(node_id, Node::new(node_id, properties));
        debug!("Created node {}", node_id);
        node_id
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Replace a node's properties wholesale
    ///
    /// Keys missing from `properties` are dropped. Adjacency is untouched.
    /// Returns false if the node does not exist.
    pub fn update_node(&mut self, id: NodeId, properties: PropertyMap) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.properties = properties;
                debug!("Updated properties of node {}", id);
                true
            }
            None => false,
        }
    }

    /// Delete a node and all its connected edges
    ///
    /// Every edge touching the node is removed from the edge table and from
    /// the adjacency list of its other endpoint. Returns the removed node,
    /// whose adjacency lists still name the edges that were cascaded, or
    /// `None` if the node does not exist.
    pub fn delete_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.remove(&id)?;

        // The node is already gone, so delete_edge only prunes the far
        // endpoints. A self-loop shows up in both lists; the second pass
        // finds nothing.
        let mut cascaded = 0usize;
        for &edge_id in node.out_edges.iter().chain(node.in_edges.iter()) {
            if self.delete_edge(edge_id).is_some() {
                cascaded += 1;
            }
        }

        debug!(
            "Deleted node {} (out-degree {}, in-degree {}, {} edges removed)",
            id,
            node.out_degree(),
            node.in_degree(),
            cascaded
        );
        Some(node)
    }

    // ============================================================
    // Edges
    // ============================================================

    /// Create an edge between two existing nodes
    ///
    /// Both endpoints are checked before anything is written, so a failed
    /// call leaves the store unchanged and consumes no edge id.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        label: impl Into<Label>,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        // Validate nodes exist
        if !self.has_node(source) {
            warn!("Rejected edge from missing source node {}", source);
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            warn!("Rejected edge to missing target node {}", target);
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let edge_id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        // Update adjacency lists
        if let Some(node) = self.nodes.get_mut(&source) {
            node.out_edges.push(edge_id);
        }
        if let Some(node) = self.nodes.get_mut(&target) {
            node.in_edges.push(edge_id);
        }

        let edge = Edge::new(edge_id, source, target, label, properties);
        debug!("Created edge {} ({} -[{}]-> {})", edge_id, source, edge.label, target);
        self.edges.insert(edge_id, edge);
        Ok(edge_id)
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Replace an edge's properties wholesale
    ///
    /// Endpoints and label never change. Returns false if the edge does not
    /// exist.
    pub fn update_edge(&mut self, id: EdgeId, properties: PropertyMap) -> bool {
        match self.edges.get_mut(&id) {
            Some(edge) => {
                edge.properties = properties;
                debug!("Updated properties of edge {}", id);
                true
            }
            None => false,
        }
    }

    /// Delete an edge
    ///
    /// Removes exactly one matching entry from the source's outgoing list and
    /// one from the target's incoming list. An endpoint that no longer exists
    /// has nothing to prune. Returns `None` if the edge does not exist.
    pub fn delete_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;

        // Remove from adjacency lists
        if let Some(node) = self.nodes.get_mut(&edge.source) {
            node.unlink_out(id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.target) {
            node.unlink_in(id);
        }

        debug!("Deleted edge {}", id);
        Some(edge)
    }

    /// Get all outgoing edges from a node
    pub fn outgoing_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        self.nodes
            .get(&node_id)
            .map(|node| {
                node.out_edges
                    .iter()
                    .filter_map(|&id| self.get_edge(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get all incoming edges to a node
    pub fn incoming_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        self.nodes
            .get(&node_id)
            .map(|node| {
                node.in_edges
                    .iter()
                    .filter_map(|&id| self.get_edge(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ============================================================
    // Listing
    // ============================================================

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        let mut nodes: Vec<&Node> = self.nodes.values().collect();
        nodes.sort_unstable_by_key(|node| node.id);
        nodes.into_iter()
    }

    /// All edges, in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        let mut edges: Vec<&Edge> = self.edges.values().collect();
        edges.sort_unstable_by_key(|edge| edge.id);
        edges.into_iter()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
