//! Breadth-first traversal over outgoing edges
//!
//! Two forms share the same expansion rule:
//! - [`GraphStore::bfs_traversal`] walks the whole reachable set eagerly and
//!   hands each node to a caller-supplied sink
//! - [`BfsIterator`] is an explicit state object the caller steps one node
//!   at a time
//!
//! A node is marked visited when it is enqueued, not when it is popped, so
//! it can never sit in the frontier twice.

use super::store::{GraphError, GraphResult, GraphStore};
use super::types::NodeId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::trace;

impl GraphStore {
    /// Targets of a node's outgoing edges, in edge-creation order
    ///
    /// A target reached by several edges is listed once per edge. A missing
    /// node has no neighbors.
    pub fn neighbors(&self, node_id: NodeId) -> Vec<NodeId> {
        self.get_node(node_id)
            .map(|node| {
                node.out_edges()
                    .iter()
                    .filter_map(|&edge_id| self.get_edge(edge_id))
                    .map(|edge| edge.target)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Eager BFS from `start`, calling `visit` once per reachable node
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `start` does not exist.
    pub fn bfs_traversal<F>(&self, start: NodeId, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(NodeId),
    {
        if !self.has_node(start) {
            return Err(GraphError::NodeNotFound(start));
        }

        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            trace!("BFS visit {}", current);
            visit(current);
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(())
    }

    /// Eager BFS from `start`, collecting the visit order
    pub fn bfs_order(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        let mut order = Vec::new();
        self.bfs_traversal(start, |id| order.push(id))?;
        Ok(order)
    }

    /// Start a resumable BFS at `start`
    ///
    /// Never fails: an unknown start node yields an iterator that is
    /// already exhausted.
    pub fn bfs_iter(&self, start: NodeId) -> BfsIterator<'_> {
        BfsIterator::new(self, start)
    }
}

/// Where a [`BfsIterator`] stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsState {
    /// At least one node is waiting in the frontier
    Ready,
    /// Frontier is empty
    Exhausted,
}

/// Resumable breadth-first traversal
///
/// Holds the frontier and visited set as plain data, so the caller decides
/// when to take the next step. The iterator borrows the store for its whole
/// lifetime; the store cannot be mutated while one is alive.
#[derive(Debug, Clone)]
pub struct BfsIterator<'a> {
    graph: &'a GraphStore,
    queue: VecDeque<NodeId>,
    visited: FxHashSet<NodeId>,
    current: Option<NodeId>,
}

impl<'a> BfsIterator<'a> {
    pub fn new(graph: &'a GraphStore, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();
        if graph.has_node(start) {
            queue.push_back(start);
            visited.insert(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
            current: None,
        }
    }

    /// True while the frontier is non-empty
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn state(&self) -> BfsState {
        if self.has_next() {
            BfsState::Ready
        } else {
            BfsState::Exhausted
        }
    }

    /// Node returned by the most recent step, if any
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Number of nodes discovered so far, including those still queued
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Pop the frontier head, enqueue its unvisited neighbors, return it
    ///
    /// Fails with [`GraphError::IteratorExhausted`] when nothing is left.
    pub fn next_node(&mut self) -> GraphResult<NodeId> {
        let current = self.queue.pop_front().ok_or(GraphError::IteratorExhausted)?;
        self.current = Some(current);

        for neighbor in self.graph.neighbors(current) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }

        trace!("BFS step {} ({} queued)", current, self.queue.len());
        Ok(current)
    }
}

impl Iterator for BfsIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.next_node().ok()
    }
}
