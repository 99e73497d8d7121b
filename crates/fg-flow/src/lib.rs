//! Maximum-flow engine for flowgraph.
//!
//! This crate computes maximum flows with the Edmonds–Karp algorithm over any
//! graph implementing the fg-graph capability traits. Setup is two-phase:
//! a [`ReversedEdgeAugmentor`] first pairs every edge with a reverse edge,
//! then an [`EdmondsKarp`] driver pushes flow along shortest augmenting paths
//! found in a lazily filtered residual view of the graph.
//!
//! ```
//! use fg_core::Services;
//! use fg_flow::maximum_flow;
//! use fg_graph::{DiGraph, SEdge};
//! use fg_graph::prelude::*;
//!
//! let mut graph = DiGraph::from_edges([
//!     SEdge::new('s', 'a'),
//!     SEdge::new('a', 't'),
//!     SEdge::new('s', 't'),
//! ]);
//! let capacity = |e: &SEdge<char>| match (*e.source(), *e.target()) {
//!     ('s', 'a') => 4.0,
//!     ('a', 't') => 3.0,
//!     _ => 1.0,
//! };
//!
//! let flow = maximum_flow(
//!     &mut graph,
//!     capacity,
//!     |s: &char, t: &char| SEdge::new(*s, *t),
//!     'a',
//!     't',
//!     &Services::new(),
//! );
//! assert_eq!(flow.unwrap(), Some(3.0));
//! // synthetic reverse edges are removed again
//! assert_eq!(graph.edge_count(), 3);
//! ```

pub mod capacity;
pub mod edmonds_karp;
pub mod error;
pub mod multi_source_sink;
pub mod residual;
pub mod reversed;

pub use capacity::CapacityMap;
pub use edmonds_karp::{EdmondsKarp, EdmondsKarpConfig, FlowState, MinCut, maximum_flow};
pub use error::{Endpoint, FlowError, FlowResult};
pub use multi_source_sink::MultiSourceSinkAugmentor;
pub use residual::{
    ResidualEdgePredicate, ResidualGraph, ReversedResidualEdgePredicate, ReversedResidualGraph,
};
pub use reversed::ReversedEdgeAugmentor;
