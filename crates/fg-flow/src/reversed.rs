//! Reverse-edge augmentation.
//!
//! Edmonds–Karp cancels flow by pushing along reverse edges, so every edge of
//! the network must be paired with an edge in the opposite direction before
//! a flow computation starts. Every reverse is created through an edge
//! factory and seeded with zero capacity, even when the graph already has an
//! edge in the opposite direction: that edge carries flow of its own and is
//! paired with its own reverse.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use fg_core::GraphId;
use fg_graph::prelude::*;
use tracing::{debug, trace};

use crate::error::{FlowError, FlowResult};

/// Pairs every edge of one graph instance with a reverse edge.
#[derive(Debug, Clone)]
pub struct ReversedEdgeAugmentor<E> {
    graph_id: GraphId,
    augmented: bool,
    reversed_edges: HashMap<E, E>,
    augmented_edges: Vec<E>,
    synthetic: HashSet<E>,
}

impl<E: Eq + Hash + Clone + Debug> ReversedEdgeAugmentor<E> {
    /// Bind a new, not yet augmented, augmentor to `graph`.
    pub fn new<G: GraphBase<Edge = E>>(graph: &G) -> Self {
        Self {
            graph_id: graph.graph_id(),
            augmented: false,
            reversed_edges: HashMap::new(),
            augmented_edges: Vec::new(),
            synthetic: HashSet::new(),
        }
    }

    /// The graph instance this augmentor works on.
    pub fn graph_id(&self) -> GraphId {
        self.graph_id
    }

    pub fn is_augmented(&self) -> bool {
        self.augmented
    }

    /// Edge -> reverse edge, in both directions of every pair.
    pub fn reversed_edges(&self) -> &HashMap<E, E> {
        &self.reversed_edges
    }

    pub fn reversed(&self, e: &E) -> Option<&E> {
        self.reversed_edges.get(e)
    }

    /// Edges created by the augmentation, in creation order.
    pub fn augmented_edges(&self) -> &[E] {
        &self.augmented_edges
    }

    /// Whether `e` was created by the augmentation.
    pub fn is_augmented_edge(&self, e: &E) -> bool {
        self.synthetic.contains(e)
    }

    /// Pair every edge of `graph` with a reverse edge. Runs once; a second
    /// call fails with `AlreadyAugmented`. On failure the graph is restored.
    ///
    /// `edge_factory(u, v)` must return a new edge from `u` to `v`. An edge
    /// already in the graph fails with `FactoryEdgeExists`, so a factory
    /// that cannot tell antiparallel edges apart (such as one building
    /// `SEdge`s) only works on graphs without them.
    pub fn augment<G, F>(&mut self, graph: &mut G, mut edge_factory: F) -> FlowResult<()>
    where
        G: GraphBase<Edge = E> + EdgeListGraph + MutableGraph,
        E: DirectedEdge<G::Vertex>,
        F: FnMut(&G::Vertex, &G::Vertex) -> E,
    {
        self.check_graph(graph)?;
        if self.augmented {
            return Err(FlowError::AlreadyAugmented);
        }

        if let Err(err) = self.pair_edges(graph, &mut edge_factory) {
            self.discard(graph);
            return Err(err);
        }
        self.augmented = true;

        debug!(
            graph = %self.graph_id,
            added = self.augmented_edges.len(),
            paired = self.reversed_edges.len(),
            "reversed-edge augmentation complete"
        );
        Ok(())
    }

    /// Remove every edge added by [`augment`](Self::augment) and forget all
    /// pairings.
    pub fn remove_reversed_edges<G>(&mut self, graph: &mut G) -> FlowResult<()>
    where
        G: GraphBase<Edge = E> + MutableGraph,
    {
        self.check_graph(graph)?;
        if !self.augmented {
            return Err(FlowError::GraphNotAugmented);
        }
        let removed = self.augmented_edges.len();
        self.discard(graph);
        debug!(graph = %self.graph_id, removed, "reversed edges removed");
        Ok(())
    }

    fn pair_edges<G, F>(&mut self, graph: &mut G, edge_factory: &mut F) -> FlowResult<()>
    where
        G: GraphBase<Edge = E> + EdgeListGraph + MutableGraph,
        E: DirectedEdge<G::Vertex>,
        F: FnMut(&G::Vertex, &G::Vertex) -> E,
    {
        let edges: Vec<E> = graph.edges().cloned().collect();

        for e in &edges {
            let r = edge_factory(e.target(), e.source());
            if r.source() != e.target() || r.target() != e.source() {
                return Err(FlowError::FactoryEdgeMisdirected {
                    from: format!("{:?}", e.target()),
                    to: format!("{:?}", e.source()),
                    edge: format!("{r:?}"),
                });
            }
            if !graph.add_edge(r.clone())? {
                return Err(FlowError::FactoryEdgeExists {
                    edge: format!("{r:?}"),
                });
            }
            trace!(edge = ?r, "added reversed edge");
            self.synthetic.insert(r.clone());
            self.augmented_edges.push(r.clone());
            self.reversed_edges.insert(e.clone(), r.clone());
            self.reversed_edges.insert(r, e.clone());
        }

        Ok(())
    }

    fn discard<G: GraphBase<Edge = E> + MutableGraph>(&mut self, graph: &mut G) {
        for e in self.augmented_edges.drain(..) {
            graph.remove_edge(&e);
        }
        self.reversed_edges.clear();
        self.synthetic.clear();
        self.augmented = false;
    }

    fn check_graph<G: GraphBase>(&self, graph: &G) -> FlowResult<()> {
        if graph.graph_id() != self.graph_id {
            return Err(FlowError::GraphMismatch {
                expected: self.graph_id,
                actual: graph.graph_id(),
            });
        }
        Ok(())
    }
}
