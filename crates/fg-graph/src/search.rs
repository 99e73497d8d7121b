//! Breadth-first search.
//!
//! The search reports vertex and edge events to an observer that is handed in
//! for the duration of a single [`BreadthFirstSearch::compute`] call. The
//! color map is owned by the caller so it can be inspected (and its
//! allocation reused) after the search returns.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use fg_core::{Completion, Services};
use tracing::trace;

use crate::edge::DirectedEdge;
use crate::error::{GraphError, GraphResult};
use crate::traits::{IncidenceGraph, VertexListGraph};

/// Traversal state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexColor {
    /// Not reached yet.
    #[default]
    White,
    /// Discovered and queued.
    Gray,
    /// All out-edges examined.
    Black,
}

/// Per-vertex colors. Vertices without an entry read as `White`.
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, VertexColor>,
}

impl<V> Default for ColorMap<V> {
    fn default() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> ColorMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self, v: &V) -> VertexColor {
        self.colors.get(v).copied().unwrap_or_default()
    }

    pub fn set(&mut self, v: V, color: VertexColor) {
        self.colors.insert(v, color);
    }

    pub fn is_reached(&self, v: &V) -> bool {
        self.color(v) != VertexColor::White
    }

    /// Vertices whose color is not `White`.
    pub fn reached(&self) -> impl Iterator<Item = &V> + '_ {
        self.colors
            .iter()
            .filter(|(_, c)| **c != VertexColor::White)
            .map(|(v, _)| v)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Receives events from a breadth-first search. All methods default to no-ops.
pub trait BfsObserver<V, E> {
    fn initialize_vertex(&mut self, _v: &V) {}
    fn discover_vertex(&mut self, _v: &V) {}
    fn examine_vertex(&mut self, _v: &V) {}
    fn examine_edge(&mut self, _e: &E) {}
    /// Edge through which its target was discovered.
    fn tree_edge(&mut self, _e: &E) {}
    fn non_tree_edge(&mut self, _e: &E) {}
    fn finish_vertex(&mut self, _v: &V) {}
}

impl<V, E> BfsObserver<V, E> for () {}

/// Records, for each discovered vertex, the edge that discovered it.
#[derive(Debug, Clone)]
pub struct PredecessorRecorder<V, E> {
    predecessors: HashMap<V, E>,
}

impl<V, E> Default for PredecessorRecorder<V, E> {
    fn default() -> Self {
        Self {
            predecessors: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash, E> PredecessorRecorder<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predecessors(&self) -> &HashMap<V, E> {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> HashMap<V, E> {
        self.predecessors
    }
}

impl<V, E> BfsObserver<V, E> for PredecessorRecorder<V, E>
where
    V: Eq + Hash + Clone,
    E: DirectedEdge<V> + Clone,
{
    fn tree_edge(&mut self, e: &E) {
        self.predecessors.insert(e.target().clone(), e.clone());
    }
}

/// Walk predecessor edges back from `target` to `root`.
///
/// Returns the edges in `root -> target` order, an empty path when
/// `target == root`, and `None` when `target` was not reached from `root`.
pub fn path_to<V, E>(predecessors: &HashMap<V, E>, root: &V, target: &V) -> Option<Vec<E>>
where
    V: Eq + Hash,
    E: DirectedEdge<V> + Clone,
{
    let mut path = Vec::new();
    let mut current = target;
    while current != root {
        let e = predecessors.get(current)?;
        // a predecessor tree has at most one edge per vertex
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(e.clone());
        current = e.source();
    }
    path.reverse();
    Some(path)
}

/// Breadth-first search over any vertex-list + incidence graph.
#[derive(Debug)]
pub struct BreadthFirstSearch<'g, G> {
    graph: &'g G,
    services: Services,
}

impl<'g, G> BreadthFirstSearch<'g, G>
where
    G: VertexListGraph + IncidenceGraph,
{
    pub fn new(graph: &'g G, services: Services) -> Self {
        Self { graph, services }
    }

    /// Run the search from `root`.
    ///
    /// Every vertex of the graph is reset to `White` in `colors` first.
    /// Cancellation is polled before each vertex is examined; an aborted
    /// search leaves `colors` describing the partial traversal.
    pub fn compute<O>(
        &self,
        root: &G::Vertex,
        colors: &mut ColorMap<G::Vertex>,
        observer: &mut O,
    ) -> GraphResult<Completion>
    where
        O: BfsObserver<G::Vertex, G::Edge> + ?Sized,
    {
        if !self.graph.contains_vertex(root) {
            return Err(GraphError::vertex_not_found(root));
        }

        for v in self.graph.vertices() {
            colors.set(v.clone(), VertexColor::White);
            observer.initialize_vertex(v);
        }

        let mut queue = VecDeque::new();
        colors.set(root.clone(), VertexColor::Gray);
        observer.discover_vertex(root);
        queue.push_back(root.clone());

        let mut examined = 0_usize;
        while let Some(u) = queue.pop_front() {
            if self.services.is_cancelling() {
                trace!(examined, "breadth-first search cancelled");
                return Ok(Completion::Aborted);
            }
            observer.examine_vertex(&u);
            examined += 1;

            for e in self.graph.out_edges(&u)? {
                observer.examine_edge(e);
                let v = e.target();
                if colors.color(v) == VertexColor::White {
                    observer.tree_edge(e);
                    colors.set(v.clone(), VertexColor::Gray);
                    observer.discover_vertex(v);
                    queue.push_back(v.clone());
                } else {
                    observer.non_tree_edge(e);
                }
            }

            colors.set(u.clone(), VertexColor::Black);
            observer.finish_vertex(&u);
        }

        trace!(examined, "breadth-first search finished");
        Ok(Completion::Finished)
    }
}
