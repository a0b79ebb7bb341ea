use anyhow::{Context, Result};
use propgraph::{EdgeId, GraphConfig, GraphStore, NodeId, PropertyMap, PropertyValue};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn node_props(name: &str, value: i64, weight: f64) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.insert("name".to_string(), PropertyValue::from(name));
    props.insert("value".to_string(), value.into());
    props.insert("weight".to_string(), weight.into());
    props
}

fn edge_props(weight: f64, kind: &str) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.insert("weight".to_string(), weight.into());
    props.insert("type".to_string(), kind.into());
    props
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "success"
    } else {
        "failure"
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => GraphConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => GraphConfig::default(),
    };
    info!("Starting propgraph demo v{} with {:?}", propgraph::version(), config);

    let mut graph = GraphStore::with_config(&config);

    println!("Adding nodes to the graph...");
    let node1 = graph.add_node(node_props("First Node", 42, 3.25));
    let node2 = graph.add_node(node_props("Second Node", 100, 2.5));
    let node3 = graph.add_node(node_props("Third Node", 200, 1.75));

    println!("\nTesting get_node...");
    if let Some(node) = graph.get_node(node1) {
        println!("Found node {}", node.id.as_u64());
    }
    if graph.get_node(NodeId::new(999)).is_none() {
        println!("Correctly couldn't find invalid node");
    }

    println!("\nTesting node update...");
    let updated = graph.update_node(node1, node_props("Updated First Node", 50, 3.5));
    println!("Node update result: {}", outcome(updated));

    println!("\nAdding edges to the graph...");
    let edge1 = graph
        .add_edge(node1, node2, "CONNECTS_TO", edge_props(1.5, "direct"))
        .context("graph operation failed")?;
    graph
        .add_edge(node2, node3, "LEADS_TO", edge_props(2.5, "indirect"))
        .context("graph operation failed")?;

    println!("\nTesting get_edge...");
    if let Some(edge) = graph.get_edge(edge1) {
        println!("Found edge {} with label {}", edge.id.as_u64(), edge.label);
    }

    println!("\nTesting edge update...");
    let updated = graph.update_edge(edge1, edge_props(3.0, "updated"));
    println!("Edge update result: {}", outcome(updated));

    println!("\nPrinting complete graph:");
    print!("{}", graph.display());

    println!("\nBFS from node {}:", node1.as_u64());
    graph.bfs_traversal(node1, |id| println!("{}", id.as_u64()))?;

    println!("\nTesting edge deletion...");
    println!("Edge deletion result: {}", outcome(graph.delete_edge(edge1).is_some()));

    println!("\nTesting invalid edge deletion...");
    let missing = EdgeId::new(999);
    println!("Invalid edge deletion result: {}", outcome(graph.delete_edge(missing).is_some()));

    println!("\nTesting node deletion...");
    println!("Node deletion result: {}", outcome(graph.delete_node(node1).is_some()));

    println!("\nFinal graph state:");
    print!("{}", graph.display());

    println!("\nStepping BFS from node {}:", node2.as_u64());
    let mut it = graph.bfs_iter(node2);
    while it.has_next() {
        println!("{}", it.next_node()?.as_u64());
    }

    Ok(())
}
