//! Lazily filtered graph views.
//!
//! A [`FilteredGraph`] borrows a base graph and exposes only the vertices and
//! edges accepted by its predicates. Nothing is cached: every query re-runs
//! the predicates against the base, so state the predicates read (for
//! instance residual capacities) is observed as of the moment of the query.

use fg_core::GraphId;

use crate::edge::DirectedEdge;
use crate::error::{GraphError, GraphResult};
use crate::traits::{
    BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, VertexListGraph,
};

/// A test over vertices or edges.
///
/// Implemented for every `Fn(&T) -> bool`, and for named predicate types that
/// need to appear in type signatures.
pub trait Predicate<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Predicate accepting everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    fn test(&self, _item: &T) -> bool {
        true
    }
}

/// Read-only view over `G` restricted by a vertex and an edge predicate.
///
/// An edge is visible iff both endpoints pass the vertex predicate and the
/// edge itself passes the edge predicate.
#[derive(Debug, Clone)]
pub struct FilteredGraph<'g, G, VP, EP> {
    graph: &'g G,
    vertex_predicate: VP,
    edge_predicate: EP,
}

impl<'g, G, VP, EP> FilteredGraph<'g, G, VP, EP>
where
    G: GraphBase,
    VP: Predicate<G::Vertex>,
    EP: Predicate<G::Edge>,
{
    pub fn new(graph: &'g G, vertex_predicate: VP, edge_predicate: EP) -> Self {
        Self {
            graph,
            vertex_predicate,
            edge_predicate,
        }
    }

    /// The unfiltered graph.
    pub fn base(&self) -> &'g G {
        self.graph
    }

    pub fn test_vertex(&self, v: &G::Vertex) -> bool {
        self.vertex_predicate.test(v)
    }

    pub fn test_edge(&self, e: &G::Edge) -> bool {
        self.test_vertex(e.source())
            && self.test_vertex(e.target())
            && self.edge_predicate.test(e)
    }
}

impl<G: GraphBase, VP, EP> GraphBase for FilteredGraph<'_, G, VP, EP> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn graph_id(&self) -> GraphId {
        self.graph.graph_id()
    }
}

impl<G, VP, EP> VertexListGraph for FilteredGraph<'_, G, VP, EP>
where
    G: VertexListGraph,
    VP: Predicate<G::Vertex>,
    EP: Predicate<G::Edge>,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        Box::new(self.graph.vertices().filter(move |v| self.test_vertex(*v)))
    }

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.test_vertex(v) && self.graph.contains_vertex(v)
    }
}

impl<G, VP, EP> EdgeListGraph for FilteredGraph<'_, G, VP, EP>
where
    G: EdgeListGraph,
    VP: Predicate<G::Vertex>,
    EP: Predicate<G::Edge>,
{
    fn edges(&self) -> Box<dyn Iterator<Item = &Self::Edge> + '_> {
        Box::new(self.graph.edges().filter(move |e| self.test_edge(*e)))
    }

    fn contains_edge(&self, e: &Self::Edge) -> bool {
        self.test_edge(e) && self.graph.contains_edge(e)
    }
}

impl<G, VP, EP> IncidenceGraph for FilteredGraph<'_, G, VP, EP>
where
    G: IncidenceGraph,
    VP: Predicate<G::Vertex>,
    EP: Predicate<G::Edge>,
{
    fn out_edges(
        &self,
        v: &Self::Vertex,
    ) -> GraphResult<Box<dyn Iterator<Item = &Self::Edge> + '_>> {
        if !self.test_vertex(v) {
            return Err(GraphError::vertex_not_found(v));
        }
        let edges = self.graph.out_edges(v)?;
        Ok(Box::new(edges.filter(move |e| self.test_edge(*e))))
    }
}

impl<G, VP, EP> BidirectionalGraph for FilteredGraph<'_, G, VP, EP>
where
    G: BidirectionalGraph,
    VP: Predicate<G::Vertex>,
    EP: Predicate<G::Edge>,
{
    fn in_edges(
        &self,
        v: &Self::Vertex,
    ) -> GraphResult<Box<dyn Iterator<Item = &Self::Edge> + '_>> {
        if !self.test_vertex(v) {
            return Err(GraphError::vertex_not_found(v));
        }
        let edges = self.graph.in_edges(v)?;
        Ok(Box::new(edges.filter(move |e| self.test_edge(*e))))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::edge::SEdge;
    use crate::graph::DiGraph;

    fn square() -> DiGraph<u32, SEdge<u32>> {
        DiGraph::from_edges([
            SEdge::new(0, 1),
            SEdge::new(0, 2),
            SEdge::new(1, 3),
            SEdge::new(2, 3),
        ])
    }

    #[test]
    fn edge_predicate_hides_edges() {
        let g = square();
        let view = FilteredGraph::new(&g, Always, |e: &SEdge<u32>| *e.source() != 0);

        assert_eq!(view.vertex_count(), 4);
        assert_eq!(view.edge_count(), 2);
        assert!(view.is_out_edges_empty(&0).unwrap());
        assert_eq!(view.out_degree(&1).unwrap(), 1);
        assert_eq!(view.in_degree(&1).unwrap(), 0);
        assert!(!view.contains_edge(&SEdge::new(0, 1)));
        assert_eq!(view.graph_id(), g.graph_id());
    }

    #[test]
    fn hidden_vertex_hides_incident_edges() {
        let g = square();
        let view = FilteredGraph::new(&g, |v: &u32| *v != 3, Always);

        assert_eq!(view.vertex_count(), 3);
        assert!(!view.contains_vertex(&3));
        assert_eq!(view.edge_count(), 2);
        assert!(view.is_out_edges_empty(&1).unwrap());
        assert!(matches!(
            view.out_edges(&3),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn absent_vertex_is_not_found() {
        let g = square();
        let view = FilteredGraph::new(&g, Always, Always);
        assert!(matches!(
            view.out_edges(&42),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn predicates_are_evaluated_on_every_access() {
        let g = square();
        let blocked = Cell::new(0_u32);
        let view = FilteredGraph::new(&g, Always, |e: &SEdge<u32>| *e.target() != blocked.get());

        assert_eq!(view.edge_count(), 4);
        blocked.set(3);
        assert_eq!(view.edge_count(), 2);
        blocked.set(1);
        assert_eq!(view.out_degree(&0).unwrap(), 1);
    }
}
