//! End-to-end tests for node/edge CRUD through the public API
//!
//! Every scenario finishes by checking the adjacency bookkeeping of the
//! whole store with `assert_consistent`.

use propgraph::*;
use std::collections::HashSet;

/// Check every structural guarantee the store makes, using only public
/// accessors.
fn assert_consistent(store: &GraphStore) {
    for node in store.nodes() {
        let out: HashSet<_> = node.out_edges().iter().collect();
        assert_eq!(out.len(), node.out_edges().len(), "duplicate out entry on {}", node.id);
        let inc: HashSet<_> = node.in_edges().iter().collect();
        assert_eq!(inc.len(), node.in_edges().len(), "duplicate in entry on {}", node.id);

        for &edge_id in node.out_edges() {
            let edge = store
                .get_edge(edge_id)
                .unwrap_or_else(|| panic!("{} lists deleted edge {}", node.id, edge_id));
            assert_eq!(edge.source, node.id);
        }
        for &edge_id in node.in_edges() {
            let edge = store
                .get_edge(edge_id)
                .unwrap_or_else(|| panic!("{} lists deleted edge {}", node.id, edge_id));
            assert_eq!(edge.target, node.id);
        }
    }

    for edge in store.edges() {
        let source = store.get_node(edge.source).expect("edge source exists");
        let target = store.get_node(edge.target).expect("edge target exists");
        assert!(source.out_edges().contains(&edge.id));
        assert!(target.in_edges().contains(&edge.id));
    }
}

fn props(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_node_round_trip() {
    let mut store = GraphStore::new();
    let p = props(&[
        ("name", "First Node".into()),
        ("value", 42i64.into()),
        ("weight", 3.25.into()),
    ]);

    let id = store.add_node(p.clone());
    let node = store.get_node(id).unwrap();
    assert_eq!(node.properties, p);
    assert!(node.out_edges().is_empty());
    assert!(node.in_edges().is_empty());
    assert_consistent(&store);
}

#[test]
fn test_edge_round_trip() {
    let mut store = GraphStore::new();
    let a = store.add_node(PropertyMap::new());
    let b = store.add_node(PropertyMap::new());
    let p = props(&[("since", 2020i64.into()), ("strength", 0.75.into())]);

    let e = store.add_edge(a, b, "KNOWS", p.clone()).unwrap();
    let edge = store.get_edge(e).unwrap();
    assert_eq!(edge.source, a);
    assert_eq!(edge.target, b);
    assert_eq!(edge.label, Label::new("KNOWS"));
    assert_eq!(edge.properties, p);

    assert!(store.get_node(a).unwrap().out_edges().contains(&e));
    assert!(store.get_node(b).unwrap().in_edges().contains(&e));
    assert_consistent(&store);
}

#[test]
fn test_dangling_edge_rejected_without_mutation() {
    let mut store = GraphStore::new();
    let a = store.add_node(PropertyMap::new());
    let b = store.add_node(PropertyMap::new());
    store.add_edge(a, b, "KNOWS", PropertyMap::new()).unwrap();
    let before = store.display().to_string();

    let ghost = NodeId::new(77);
    assert_eq!(
        store.add_edge(ghost, b, "X", PropertyMap::new()),
        Err(GraphError::InvalidEdgeSource(ghost))
    );
    assert_eq!(
        store.add_edge(a, ghost, "X", PropertyMap::new()),
        Err(GraphError::InvalidEdgeTarget(ghost))
    );
    // Both missing: the source is reported
    assert_eq!(
        store.add_edge(ghost, NodeId::new(78), "X", PropertyMap::new()),
        Err(GraphError::InvalidEdgeSource(ghost))
    );

    assert_eq!(store.node_count(), 2);
    assert_eq!(store.edge_count(), 1);
    assert_eq!(store.display().to_string(), before);
    assert_consistent(&store);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GraphError::InvalidEdgeSource(NodeId::new(3)).to_string(),
        "Invalid edge: source node #3 does not exist"
    );
    assert_eq!(
        GraphError::NodeNotFound(NodeId::new(1)).to_string(),
        "Node #1 not found"
    );
}

#[test]
fn test_delete_edge_restores_adjacency() {
    let mut store = GraphStore::new();
    let a = store.add_node(PropertyMap::new());
    let b = store.add_node(PropertyMap::new());
    let c = store.add_node(PropertyMap::new());
    let ab = store.add_edge(a, b, "X", PropertyMap::new()).unwrap();
    let ac = store.add_edge(a, c, "X", PropertyMap::new()).unwrap();
    let cb = store.add_edge(c, b, "X", PropertyMap::new()).unwrap();

    assert!(store.delete_edge(ab).is_some());
    assert!(store.get_edge(ab).is_none());
    assert_eq!(store.get_node(a).unwrap().out_edges(), &[ac]);
    assert_eq!(store.get_node(b).unwrap().in_edges(), &[cb]);
    assert_consistent(&store);
}

#[test]
fn test_delete_node_prunes_far_endpoints() {
    let mut store = GraphStore::new();
    let hub = store.add_node(PropertyMap::new());
    let spokes: Vec<NodeId> = (0..4).map(|_| store.add_node(PropertyMap::new())).collect();

    let mut touching = Vec::new();
    for &s in &spokes {
        touching.push(store.add_edge(hub, s, "OUT", PropertyMap::new()).unwrap());
        touching.push(store.add_edge(s, hub, "IN", PropertyMap::new()).unwrap());
    }
    let untouched = store.add_edge(spokes[0], spokes[1], "SIDE", PropertyMap::new()).unwrap();

    assert!(store.delete_node(hub).is_some());
    assert!(store.get_node(hub).is_none());
    for e in touching {
        assert!(store.get_edge(e).is_none());
    }
    assert!(store.get_edge(untouched).is_some());
    assert_eq!(store.edge_count(), 1);

    for &s in &spokes[2..] {
        let node = store.get_node(s).unwrap();
        assert!(node.out_edges().is_empty());
        assert!(node.in_edges().is_empty());
    }
    assert_consistent(&store);
}

#[test]
fn test_misses_do_not_mutate() {
    let mut store = GraphStore::new();
    let a = store.add_node(props(&[("k", 1i64.into())]));
    let b = store.add_node(PropertyMap::new());
    store.add_edge(a, b, "X", PropertyMap::new()).unwrap();
    let before = store.display().to_string();

    assert!(!store.update_node(NodeId::new(50), PropertyMap::new()));
    assert!(!store.update_edge(EdgeId::new(50), PropertyMap::new()));
    assert!(store.delete_node(NodeId::new(50)).is_none());
    assert!(store.delete_edge(EdgeId::new(50)).is_none());

    assert_eq!(store.display().to_string(), before);
    assert_consistent(&store);
}

#[test]
fn test_update_is_replacement_not_merge() {
    let mut store = GraphStore::new();
    let a = store.add_node(props(&[("name", "Alice".into()), ("age", 30i64.into())]));
    let b = store.add_node(PropertyMap::new());
    let e = store.add_edge(a, b, "KNOWS", props(&[("since", 2020i64.into())])).unwrap();

    assert!(store.update_node(a, props(&[("age", 31i64.into())])));
    assert!(store.update_edge(e, PropertyMap::new()));

    let node = store.get_node(a).unwrap();
    assert_eq!(node.properties, props(&[("age", 31i64.into())]));
    assert_eq!(node.out_edges(), &[e]);
    assert!(store.get_edge(e).unwrap().properties.is_empty());
    assert_consistent(&store);
}

#[test]
fn test_node_and_edge_ids_are_separate_namespaces() {
    let mut store = GraphStore::new();
    let a = store.add_node(PropertyMap::new());
    let e = store.add_edge(a, a, "SELF", PropertyMap::new()).unwrap();

    // Same numeric value, unrelated ids
    assert_eq!(a.as_u64(), e.as_u64());
    assert!(store.delete_edge(e).is_some());
    assert!(store.has_node(a));
    assert_consistent(&store);
}

#[test]
fn test_ids_monotonic_across_churn() {
    let mut store = GraphStore::new();
    let mut last_node = None;
    let mut last_edge = None;

    for round in 0..20 {
        let a = store.add_node(PropertyMap::new());
        let b = store.add_node(PropertyMap::new());
        let e = store.add_edge(a, b, "X", PropertyMap::new()).unwrap();

        if let Some(prev) = last_node {
            assert!(a > prev);
        }
        if let Some(prev) = last_edge {
            assert!(e > prev);
        }
        last_node = Some(b);
        last_edge = Some(e);

        if round % 2 == 0 {
            store.delete_node(a).unwrap();
        } else {
            store.delete_edge(e).unwrap();
        }
        assert_consistent(&store);
    }
}

#[test]
fn test_mixed_mutation_sequence_stays_consistent() {
    let mut store = GraphStore::new();
    let nodes: Vec<NodeId> = (0..8).map(|_| store.add_node(PropertyMap::new())).collect();

    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in 0..nodes.len() {
            if (i + j) % 3 == 0 {
                edges.push(store.add_edge(nodes[i], nodes[j], "R", PropertyMap::new()).unwrap());
            }
        }
    }
    assert_consistent(&store);

    for e in edges.iter().step_by(4) {
        store.delete_edge(*e);
    }
    assert_consistent(&store);

    store.delete_node(nodes[3]);
    store.delete_node(nodes[6]);
    assert_consistent(&store);

    // Deleting an edge that went away with its node is a plain miss
    for e in &edges {
        let _ = store.delete_edge(*e);
    }
    assert_eq!(store.edge_count(), 0);
    for node in store.nodes() {
        assert!(node.out_edges().is_empty());
        assert!(node.in_edges().is_empty());
    }
}

#[test]
fn test_config_driven_store() {
    let config = GraphConfig::from_json_str(r#"{ "initial_node_capacity": 4 }"#).unwrap();
    let mut store = GraphStore::with_config(&config);
    let a = store.add_node(PropertyMap::new());
    assert_eq!(a, NodeId::new(0));
    assert_consistent(&store);
}
