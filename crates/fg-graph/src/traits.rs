//! Graph capability traits.
//!
//! Algorithms are written against the smallest capability they need, so the
//! same code runs over a concrete [`DiGraph`](crate::DiGraph) and over a
//! [`FilteredGraph`](crate::FilteredGraph) view of it.

use std::fmt::Debug;
use std::hash::Hash;

use fg_core::GraphId;

use crate::edge::DirectedEdge;
use crate::error::GraphResult;

/// Requirements on vertex values.
pub trait GraphVertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> GraphVertex for T {}

/// Requirements on edge values.
pub trait GraphEdge<V>: DirectedEdge<V> + Clone + Eq + Hash + Debug {}

impl<V, T: DirectedEdge<V> + Clone + Eq + Hash + Debug> GraphEdge<V> for T {}

pub trait GraphBase {
    type Vertex: GraphVertex;
    type Edge: GraphEdge<Self::Vertex>;

    /// Identity of the underlying graph instance. Views report their base's id.
    fn graph_id(&self) -> GraphId;
}

pub trait VertexListGraph: GraphBase {
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    fn is_vertices_empty(&self) -> bool {
        self.vertices().next().is_none()
    }
}

pub trait EdgeListGraph: GraphBase {
    fn edges(&self) -> Box<dyn Iterator<Item = &Self::Edge> + '_>;

    fn contains_edge(&self, e: &Self::Edge) -> bool;

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn is_edges_empty(&self) -> bool {
        self.edges().next().is_none()
    }
}

pub trait IncidenceGraph: GraphBase {
    /// Out-edges of `v`; fails with `VertexNotFound` if `v` is not in the graph.
    fn out_edges(&self, v: &Self::Vertex) -> GraphResult<Box<dyn Iterator<Item = &Self::Edge> + '_>>;

    fn out_degree(&self, v: &Self::Vertex) -> GraphResult<usize> {
        Ok(self.out_edges(v)?.count())
    }

    fn is_out_edges_empty(&self, v: &Self::Vertex) -> GraphResult<bool> {
        Ok(self.out_edges(v)?.next().is_none())
    }
}

pub trait BidirectionalGraph: IncidenceGraph {
    fn in_edges(&self, v: &Self::Vertex) -> GraphResult<Box<dyn Iterator<Item = &Self::Edge> + '_>>;

    fn in_degree(&self, v: &Self::Vertex) -> GraphResult<usize> {
        Ok(self.in_edges(v)?.count())
    }

    fn is_in_edges_empty(&self, v: &Self::Vertex) -> GraphResult<bool> {
        Ok(self.in_edges(v)?.next().is_none())
    }
}

pub trait MutableGraph: GraphBase {
    /// Add a vertex; returns false if it was already present.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Add an edge between existing vertices; returns false if an equal edge
    /// is already present.
    fn add_edge(&mut self, e: Self::Edge) -> GraphResult<bool>;

    /// Remove an edge; returns false if it was not present.
    fn remove_edge(&mut self, e: &Self::Edge) -> bool;
}
