//! Integration tests for fg-graph.

use fg_core::Services;
use fg_graph::prelude::*;
use fg_graph::{
    Always, BreadthFirstSearch, ColorMap, DiGraph, FilteredGraph, GraphBuilder, GraphError,
    PredecessorRecorder, SEdge, TaggedEdge, VertexColor, path_to,
};

#[test]
fn build_minimal_graph() {
    // Build: s -> t
    let mut builder = GraphBuilder::new();
    builder
        .add_vertex("s")
        .add_vertex("t")
        .add_edge(SEdge::new("s", "t"));
    let graph = builder.build().unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.out_degree(&"s").unwrap(), 1);
    assert_eq!(graph.in_degree(&"t").unwrap(), 1);
    assert!(graph.is_in_edges_empty(&"s").unwrap());
    assert!(graph.is_out_edges_empty(&"t").unwrap());
}

#[test]
fn every_edge_references_graph_vertices() {
    let graph = DiGraph::from_edges((0..20).map(|i| SEdge::new(i, (i * 7) % 20)));

    for e in graph.edges() {
        assert!(graph.contains_vertex(e.source()));
        assert!(graph.contains_vertex(e.target()));
    }
    let out_total: usize = graph
        .vertices()
        .map(|v| graph.out_degree(v).unwrap())
        .sum();
    let in_total: usize = graph.vertices().map(|v| graph.in_degree(v).unwrap()).sum();
    assert_eq!(out_total, graph.edge_count());
    assert_eq!(in_total, graph.edge_count());
}

#[test]
fn tagged_parallel_edges_coexist() {
    let mut graph: DiGraph<char, TaggedEdge<char, u32>> = DiGraph::new();
    graph.add_vertices(['a', 'b']);
    assert!(graph.add_edge(TaggedEdge::new('a', 'b', 1)).unwrap());
    assert!(graph.add_edge(TaggedEdge::new('a', 'b', 2)).unwrap());
    assert!(!graph.add_edge(TaggedEdge::new('a', 'b', 2)).unwrap());

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.out_degree(&'a').unwrap(), 2);
    assert_eq!(graph.try_get_edge(&'a', &'b').map(|e| *e.tag()), Some(1));
}

#[test]
fn view_never_mutates_base() {
    let graph = DiGraph::from_edges([SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 1)]);
    {
        let view = FilteredGraph::new(&graph, |v: &i32| *v != 2, Always);
        assert_eq!(view.vertex_count(), 2);
        assert_eq!(view.edge_count(), 1);
        assert!(matches!(
            view.in_edges(&2),
            Err(GraphError::VertexNotFound { .. })
        ));
    }
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn search_over_filtered_view() {
    // 0 -> 1 -> 3 is blocked at 1 -> 3, leaving 0 -> 2 -> 4 -> 3
    let graph = DiGraph::from_edges([
        SEdge::new(0, 1),
        SEdge::new(1, 3),
        SEdge::new(0, 2),
        SEdge::new(2, 4),
        SEdge::new(4, 3),
    ]);
    let view = FilteredGraph::new(&graph, Always, |e: &SEdge<i32>| {
        *e != SEdge::new(1, 3)
    });
    let bfs = BreadthFirstSearch::new(&view, Services::new());
    let mut colors = ColorMap::new();
    let mut recorder = PredecessorRecorder::new();

    bfs.compute(&0, &mut colors, &mut recorder).unwrap();

    assert_eq!(colors.color(&3), VertexColor::Black);
    let path = path_to(recorder.predecessors(), &0, &3).unwrap();
    assert_eq!(
        path,
        vec![SEdge::new(0, 2), SEdge::new(2, 4), SEdge::new(4, 3)]
    );
}

#[test]
fn large_chain() {
    let graph = DiGraph::from_edges((0..100).map(|i| SEdge::new(i, i + 1)));
    assert_eq!(graph.vertex_count(), 101);
    assert_eq!(graph.edge_count(), 100);

    let bfs = BreadthFirstSearch::new(&graph, Services::new());
    let mut colors = ColorMap::new();
    let mut recorder = PredecessorRecorder::new();
    bfs.compute(&0, &mut colors, &mut recorder).unwrap();

    let path = path_to(recorder.predecessors(), &0, &100).unwrap();
    assert_eq!(path.len(), 100);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_edges() -> impl Strategy<Value = Vec<SEdge<u8>>> {
        prop::collection::vec((0u8..12, 0u8..12), 1..40)
            .prop_map(|pairs| pairs.into_iter().map(|(s, t)| SEdge::new(s, t)).collect())
    }

    proptest! {
        #[test]
        fn view_edges_are_the_accepted_base_edges(edges in arb_edges(), cutoff in 0u8..12) {
            let graph = DiGraph::from_edges(edges);
            let keep = |e: &SEdge<u8>| e.source() < e.target() || *e.source() > cutoff;
            let view = FilteredGraph::new(&graph, Always, keep);

            let expected = graph.edges().filter(|e| keep(e)).count();
            prop_assert_eq!(view.edge_count(), expected);
            for v in graph.vertices() {
                for e in view.out_edges(v).unwrap() {
                    prop_assert!(keep(e));
                    prop_assert!(graph.contains_edge(e));
                }
            }
        }

        #[test]
        fn search_tree_paths_are_connected(edges in arb_edges()) {
            let graph = DiGraph::from_edges(edges);
            let root = *graph.vertices().next().unwrap();
            let bfs = BreadthFirstSearch::new(&graph, Services::new());
            let mut colors = ColorMap::new();
            let mut recorder = PredecessorRecorder::new();
            bfs.compute(&root, &mut colors, &mut recorder).unwrap();

            for v in colors.reached() {
                let path = path_to(recorder.predecessors(), &root, v).unwrap();
                let mut at = root;
                for e in &path {
                    prop_assert_eq!(*e.source(), at);
                    at = *e.target();
                }
                prop_assert_eq!(at, *v);
            }
        }
    }
}
