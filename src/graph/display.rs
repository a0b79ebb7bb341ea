//! Text rendering of a whole graph
//!
//! Reads only through the store's public accessors. Nodes and edges are
//! listed in creation order and property keys are sorted, so the output is
//! stable.

use super::property::PropertyMap;
use super::store::GraphStore;
use std::fmt;

/// `Display` adapter returned by [`GraphStore::display`]
pub struct GraphDisplay<'a> {
    graph: &'a GraphStore,
}

impl GraphStore {
    /// Render nodes (id, properties, edge lists) then edges
    /// (id, endpoints, label, properties)
    pub fn display(&self) -> GraphDisplay<'_> {
        GraphDisplay { graph: self }
    }
}

fn write_properties(f: &mut fmt::Formatter<'_>, properties: &PropertyMap) -> fmt::Result {
    writeln!(f, "  Properties:")?;
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();
    for key in keys {
        writeln!(f, "    {}: {}", key, properties[key])?;
    }
    Ok(())
}

fn join_ids<T: Copy>(ids: &[T], as_u64: impl Fn(T) -> u64) -> String {
    ids.iter()
        .map(|&id| as_u64(id).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes:")?;
        for node in self.graph.nodes() {
            writeln!(f, "Node {}:", node.id.as_u64())?;
            write_properties(f, &node.properties)?;
            writeln!(f, "  Outgoing edges: {}", join_ids(node.out_edges(), |e| e.as_u64()))?;
            writeln!(f, "  Incoming edges: {}", join_ids(node.in_edges(), |e| e.as_u64()))?;
        }

        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for edge in self.graph.edges() {
            writeln!(
                f,
                "Edge {} ({} -> {}) Label: {}",
                edge.id.as_u64(),
                edge.source.as_u64(),
                edge.target.as_u64(),
                edge.label
            )?;
            write_properties(f, &edge.properties)?;
        }
        Ok(())
    }
}
