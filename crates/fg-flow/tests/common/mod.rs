#![allow(dead_code)]

use std::collections::HashMap;

use fg_graph::{DiGraph, SEdge};

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn sedge<V: Clone>(s: &V, t: &V) -> SEdge<V> {
    SEdge::new(s.clone(), t.clone())
}

/// Graph plus capacity table from `(source, target, capacity)` triples.
pub fn network<V>(edges: &[(V, V, f64)]) -> (DiGraph<V, SEdge<V>>, HashMap<SEdge<V>, f64>)
where
    V: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    let caps: HashMap<SEdge<V>, f64> = edges
        .iter()
        .map(|(s, t, c)| (SEdge::new(s.clone(), t.clone()), *c))
        .collect();
    let graph = DiGraph::from_edges(edges.iter().map(|(s, t, _)| SEdge::new(s.clone(), t.clone())));
    (graph, caps)
}
