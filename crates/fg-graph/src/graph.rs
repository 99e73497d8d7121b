//! Core graph data structure.

use std::collections::HashMap;

use fg_core::GraphId;

use crate::error::{GraphError, GraphResult};
use crate::traits::{
    BidirectionalGraph, EdgeListGraph, GraphBase, GraphEdge, GraphVertex, IncidenceGraph,
    MutableGraph, VertexListGraph,
};

/// Directed graph with out- and in-adjacency per vertex.
///
/// The graph stores:
/// - All vertices in insertion order, with a hash index for O(1) lookup.
/// - For each vertex slot, its out-edges and in-edges in insertion order.
///
/// Iteration order is fully determined by insertion order, which keeps
/// traversals (and therefore the augmenting paths they find) reproducible.
/// Equal edges are stored once.
#[derive(Debug)]
pub struct DiGraph<V, E> {
    id: GraphId,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    out_edges: Vec<Vec<E>>,
    in_edges: Vec<Vec<E>>,
    edge_count: usize,
}

impl<V, E> DiGraph<V, E> {
    /// Create an empty graph with a fresh id.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            vertices: Vec::new(),
            index: HashMap::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V, E> Default for DiGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a distinct graph instance and receives its own id.
impl<V: Clone, E: Clone> Clone for DiGraph<V, E> {
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            out_edges: self.out_edges.clone(),
            in_edges: self.in_edges.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> DiGraph<V, E> {
    /// Build a graph from edges, adding their endpoints as vertices.
    pub fn from_edges(edges: impl IntoIterator<Item = E>) -> Self {
        let mut graph = Self::new();
        for e in edges {
            graph.add_vertices_and_edge(e);
        }
        graph
    }

    /// Add every vertex of `vertices`; returns how many were new.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> usize {
        vertices
            .into_iter()
            .filter(|v| self.add_vertex(v.clone()))
            .count()
    }

    /// Add an edge, adding missing endpoints first.
    pub fn add_vertices_and_edge(&mut self, e: E) -> bool {
        self.add_vertex(e.source().clone());
        self.add_vertex(e.target().clone());
        let source = self.index[e.source()];
        self.insert_edge(source, e)
    }

    /// First edge from `source` to `target`, if any.
    pub fn try_get_edge(&self, source: &V, target: &V) -> Option<&E> {
        let slot = *self.index.get(source)?;
        self.out_edges[slot].iter().find(|e| e.target() == target)
    }

    fn slot(&self, v: &V) -> GraphResult<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    fn insert_edge(&mut self, source: usize, e: E) -> bool {
        if self.out_edges[source].contains(&e) {
            return false;
        }
        let target = self.index[e.target()];
        self.in_edges[target].push(e.clone());
        self.out_edges[source].push(e);
        self.edge_count += 1;
        true
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> GraphBase for DiGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn graph_id(&self) -> GraphId {
        self.id
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> VertexListGraph for DiGraph<V, E> {
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> EdgeListGraph for DiGraph<V, E> {
    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.out_edges.iter().flatten())
    }

    fn contains_edge(&self, e: &E) -> bool {
        self.index
            .get(e.source())
            .is_some_and(|&slot| self.out_edges[slot].contains(e))
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> IncidenceGraph for DiGraph<V, E> {
    fn out_edges(&self, v: &V) -> GraphResult<Box<dyn Iterator<Item = &E> + '_>> {
        let slot = self.slot(v)?;
        Ok(Box::new(self.out_edges[slot].iter()))
    }

    fn out_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.out_edges[self.slot(v)?].len())
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> BidirectionalGraph for DiGraph<V, E> {
    fn in_edges(&self, v: &V) -> GraphResult<Box<dyn Iterator<Item = &E> + '_>> {
        let slot = self.slot(v)?;
        Ok(Box::new(self.in_edges[slot].iter()))
    }

    fn in_degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.in_edges[self.slot(v)?].len())
    }
}

impl<V: GraphVertex, E: GraphEdge<V>> MutableGraph for DiGraph<V, E> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        self.index.insert(v.clone(), self.vertices.len());
        self.vertices.push(v);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        true
    }

    fn add_edge(&mut self, e: E) -> GraphResult<bool> {
        let source = self.slot(e.source())?;
        if !self.index.contains_key(e.target()) {
            return Err(GraphError::vertex_not_found(e.target()));
        }
        Ok(self.insert_edge(source, e))
    }

    fn remove_edge(&mut self, e: &E) -> bool {
        let (Some(&source), Some(&target)) = (self.index.get(e.source()), self.index.get(e.target()))
        else {
            return false;
        };
        let Some(pos) = self.out_edges[source].iter().position(|x| x == e) else {
            return false;
        };
        self.out_edges[source].remove(pos);
        if let Some(pos) = self.in_edges[target].iter().position(|x| x == e) {
            self.in_edges[target].remove(pos);
        }
        self.edge_count -= 1;
        true
    }
}
