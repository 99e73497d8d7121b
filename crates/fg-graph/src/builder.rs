//! Incremental graph builder.

use crate::error::GraphResult;
use crate::graph::DiGraph;
use crate::traits::{GraphEdge, GraphVertex, MutableGraph};
use crate::validate;

/// Builder for constructing a graph from explicitly declared vertices.
///
/// Unlike [`DiGraph::from_edges`], the builder does not invent vertices:
/// `build()` rejects any edge whose endpoints were not declared.
#[derive(Debug)]
pub struct GraphBuilder<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Default for GraphBuilder<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> GraphBuilder<V, E> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, v: V) -> &mut Self {
        self.vertices.push(v);
        self
    }

    pub fn add_edge(&mut self, e: E) -> &mut Self {
        self.edges.push(e);
        self
    }

    /// Validate and build the graph. Repeated vertices and edges are merged.
    pub fn build(self) -> GraphResult<DiGraph<V, E>> {
        validate::validate_endpoints(&self.vertices, &self.edges)?;

        let mut graph = DiGraph::new();
        graph.add_vertices(self.vertices);
        for e in self.edges {
            graph.add_edge(e)?;
        }
        Ok(graph)
    }
}
