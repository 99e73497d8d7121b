//! fg-graph: generic directed-graph layer for flowgraph.
//!
//! Provides:
//! - Graph capability traits over opaque, user-supplied vertex and edge types
//! - A concrete bidirectional adjacency graph (`DiGraph`) and a validating builder
//! - Lazily filtered, read-only views over any graph
//! - Breadth-first search with per-call observers and a reusable color map
//!
//! # Example
//!
//! ```
//! use fg_graph::prelude::*;
//! use fg_graph::{DiGraph, SEdge};
//!
//! let graph = DiGraph::from_edges([SEdge::new("a", "b"), SEdge::new("b", "c")]);
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.out_degree(&"b").unwrap(), 1);
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod filtered;
pub mod graph;
pub mod search;
pub mod traits;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use edge::{DirectedEdge, SEdge, TaggedEdge};
pub use error::{GraphError, GraphResult};
pub use filtered::{Always, FilteredGraph, Predicate};
pub use graph::DiGraph;
pub use search::{
    BfsObserver, BreadthFirstSearch, ColorMap, PredecessorRecorder, VertexColor, path_to,
};
pub use traits::{
    BidirectionalGraph, EdgeListGraph, GraphBase, GraphEdge, GraphVertex, IncidenceGraph,
    MutableGraph, VertexListGraph,
};

/// Graph capability traits, for glob import.
pub mod prelude {
    pub use crate::edge::DirectedEdge;
    pub use crate::traits::{
        BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, MutableGraph,
        VertexListGraph,
    };
}
