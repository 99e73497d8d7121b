//! Reduction of a multi-source, multi-sink network to a single-terminal one.
//!
//! Every vertex without in-edges becomes fed by a super source and every
//! vertex without out-edges drains into a super sink. A vertex with neither
//! (an isolated vertex) is connected to both.

use std::fmt::Debug;

use fg_core::{Completion, FgError, Services};
use fg_graph::prelude::*;
use tracing::debug;

use crate::error::{FlowError, FlowResult};

/// Adds a super source and a super sink to a graph.
///
/// The terminals are created lazily, at most once per run, through the
/// vertex factory. Running again on the same graph starts from scratch and
/// adds a second pair of terminals.
#[derive(Debug, Clone)]
pub struct MultiSourceSinkAugmentor<V, E> {
    super_source: Option<V>,
    super_sink: Option<V>,
    augmented_edges: Vec<E>,
}

impl<V, E> Default for MultiSourceSinkAugmentor<V, E> {
    fn default() -> Self {
        Self {
            super_source: None,
            super_sink: None,
            augmented_edges: Vec::new(),
        }
    }
}

impl<V: Clone + Debug, E: Clone + Debug> MultiSourceSinkAugmentor<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Super source created by the last run, if any vertex needed one.
    pub fn super_source(&self) -> Option<&V> {
        self.super_source.as_ref()
    }

    /// Super sink created by the last run, if any vertex needed one.
    pub fn super_sink(&self) -> Option<&V> {
        self.super_sink.as_ref()
    }

    /// Edges added by the last run, in insertion order.
    pub fn augmented_edges(&self) -> &[E] {
        &self.augmented_edges
    }

    /// Connect every source-like vertex to a super source and every
    /// sink-like vertex to a super sink.
    ///
    /// Only vertices present when the run starts are considered. Cancellation
    /// is polled once per vertex while scanning. Terminals and edges are
    /// produced and checked before anything is inserted, so an aborted or
    /// failed run leaves the graph unchanged.
    pub fn augment<G, VF, EF>(
        &mut self,
        graph: &mut G,
        mut vertex_factory: VF,
        mut edge_factory: EF,
        services: &Services,
    ) -> FlowResult<Completion>
    where
        G: GraphBase<Vertex = V, Edge = E> + VertexListGraph + BidirectionalGraph + MutableGraph,
        V: PartialEq,
        E: DirectedEdge<V>,
        VF: FnMut() -> V,
        EF: FnMut(&V, &V) -> E,
    {
        self.super_source = None;
        self.super_sink = None;
        self.augmented_edges.clear();

        let mut feeds = Vec::new();
        let mut drains = Vec::new();
        for v in graph.vertices() {
            if services.is_cancelling() {
                debug!("multi source/sink augmentation cancelled");
                return Ok(Completion::Aborted);
            }
            if graph.is_in_edges_empty(v)? {
                feeds.push(v.clone());
            }
            if graph.is_out_edges_empty(v)? {
                drains.push(v.clone());
            }
        }

        let source = if feeds.is_empty() {
            None
        } else {
            Some(new_terminal(graph, &mut vertex_factory, None)?)
        };
        let sink = if drains.is_empty() {
            None
        } else {
            Some(new_terminal(graph, &mut vertex_factory, source.as_ref())?)
        };

        let mut planned = Vec::with_capacity(feeds.len() + drains.len());
        if let Some(source) = &source {
            for v in &feeds {
                planned.push(checked_edge(&mut edge_factory, source, v)?);
            }
        }
        if let Some(sink) = &sink {
            for v in &drains {
                planned.push(checked_edge(&mut edge_factory, v, sink)?);
            }
        }

        for terminal in source.iter().chain(sink.iter()) {
            graph.add_vertex(terminal.clone());
        }
        for e in &planned {
            // both endpoints exist and every planned edge touches a new terminal
            if !graph.add_edge(e.clone())? {
                return Err(FgError::Invariant {
                    what: format!("planned edge {e:?} was already in the graph"),
                }
                .into());
            }
        }

        self.super_source = source;
        self.super_sink = sink;
        self.augmented_edges = planned;
        debug!(
            super_source = ?self.super_source,
            super_sink = ?self.super_sink,
            added = self.augmented_edges.len(),
            "multi source/sink augmentation complete"
        );
        Ok(Completion::Finished)
    }
}

/// Ask the factory for a terminal that is neither in the graph nor `taken`.
fn new_terminal<G, VF>(graph: &G, vertex_factory: &mut VF, taken: Option<&G::Vertex>) -> FlowResult<G::Vertex>
where
    G: VertexListGraph,
    VF: FnMut() -> G::Vertex,
{
    let v = vertex_factory();
    if graph.contains_vertex(&v) || taken == Some(&v) {
        return Err(FlowError::FactoryVertexExists {
            vertex: format!("{v:?}"),
        });
    }
    Ok(v)
}

fn checked_edge<V, E, EF>(edge_factory: &mut EF, from: &V, to: &V) -> FlowResult<E>
where
    V: PartialEq + Debug,
    E: DirectedEdge<V> + Debug,
    EF: FnMut(&V, &V) -> E,
{
    let e = edge_factory(from, to);
    if e.source() != from || e.target() != to {
        return Err(FlowError::FactoryEdgeMisdirected {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            edge: format!("{e:?}"),
        });
    }
    Ok(e)
}
