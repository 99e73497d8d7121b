//! Edmonds–Karp maximum flow.
//!
//! Each round runs a breadth-first search from the source over the residual
//! view of the graph, then pushes the bottleneck residual capacity along the
//! shortest source-to-sink path found. Pushing on an edge returns the same
//! amount to its paired reverse edge, which is what lets later rounds undo
//! flow committed by earlier ones.

use std::collections::{HashMap, HashSet};

use fg_core::{Completion, FgError, LifecycleEvent, Real, Services, Tolerances};
use fg_graph::prelude::*;
use fg_graph::{Always, BreadthFirstSearch, ColorMap, FilteredGraph, PredecessorRecorder, path_to};
use tracing::{debug, trace, warn};

use crate::capacity::CapacityMap;
use crate::error::{Endpoint, FlowError, FlowResult};
use crate::residual::{
    ResidualEdgePredicate, ResidualGraph, ReversedResidualEdgePredicate, ReversedResidualGraph,
};
use crate::reversed::ReversedEdgeAugmentor;

/// Driver state, reported through [`LifecycleEvent::StateChanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowState {
    Idle,
    Initializing,
    Searching,
    Augmenting,
    Done,
    Aborted,
    Failed,
}

/// Edmonds–Karp configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdmondsKarpConfig {
    /// Fail with `RoundLimitExceeded` instead of starting augmenting round
    /// `max_rounds + 1`. Unlimited when `None`.
    pub max_rounds: Option<usize>,
    /// Residuals left within these tolerances by a push are set to zero.
    pub tolerances: Tolerances,
}

/// A minimum s-t cut, read off the final residual graph.
#[derive(Debug, Clone)]
pub struct MinCut<V, E> {
    /// Vertices reachable from the source in the residual graph.
    pub source_side: HashSet<V>,
    /// Original edges leaving the source side
    pub edges: Vec<E>,
    /// Sum of the original capacities of `edges`
    pub capacity: Real,
}

type EventSink<'a> = dyn FnMut(&LifecycleEvent<FlowState>) + 'a;

/// Edmonds–Karp max-flow driver over a graph augmented with reversed edges.
///
/// The graph is borrowed for the driver's lifetime, so it cannot change
/// between augmentation and computation. Results (max flow, residual
/// capacities, the last search tree) stay readable after `compute` returns.
pub struct EdmondsKarp<'g, G, C>
where
    G: GraphBase,
{
    graph: &'g G,
    augmentor: &'g ReversedEdgeAugmentor<G::Edge>,
    capacity: C,
    config: EdmondsKarpConfig,
    services: Services,
    source: Option<G::Vertex>,
    sink: Option<G::Vertex>,
    state: FlowState,
    residuals: CapacityMap<G::Edge>,
    colors: ColorMap<G::Vertex>,
    predecessors: HashMap<G::Vertex, G::Edge>,
    rounds: usize,
    max_flow: Option<Real>,
}

impl<'g, G, C> EdmondsKarp<'g, G, C>
where
    G: VertexListGraph + EdgeListGraph + IncidenceGraph,
    C: Fn(&G::Edge) -> Real,
{
    /// Create a driver for `graph`. `augmentor` must be bound to the same
    /// graph instance; whether it has run is only checked by `compute`.
    pub fn new(
        graph: &'g G,
        capacity: C,
        augmentor: &'g ReversedEdgeAugmentor<G::Edge>,
    ) -> FlowResult<Self> {
        if augmentor.graph_id() != graph.graph_id() {
            return Err(FlowError::GraphMismatch {
                expected: augmentor.graph_id(),
                actual: graph.graph_id(),
            });
        }

        Ok(Self {
            graph,
            augmentor,
            capacity,
            config: EdmondsKarpConfig::default(),
            services: Services::new(),
            source: None,
            sink: None,
            state: FlowState::Idle,
            residuals: CapacityMap::new(),
            colors: ColorMap::new(),
            predecessors: HashMap::new(),
            rounds: 0,
            max_flow: None,
        })
    }

    pub fn with_config(mut self, config: EdmondsKarpConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `services` for cancellation, and hand them down to each search.
    pub fn with_services(mut self, services: Services) -> Self {
        self.services = services;
        self
    }

    pub fn set_source(&mut self, source: G::Vertex) {
        self.source = Some(source);
    }

    pub fn set_sink(&mut self, sink: G::Vertex) {
        self.sink = Some(sink);
    }

    pub fn source(&self) -> Option<&G::Vertex> {
        self.source.as_ref()
    }

    pub fn sink(&self) -> Option<&G::Vertex> {
        self.sink.as_ref()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Value of the last completed computation; `None` before one finished
    /// and after an aborted or failed run.
    pub fn max_flow(&self) -> Option<Real> {
        self.max_flow
    }

    /// Augmenting rounds performed by the last run.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn residual_capacities(&self) -> &CapacityMap<G::Edge> {
        &self.residuals
    }

    /// Net flow on `e`: capacity minus residual.
    pub fn flow(&self, e: &G::Edge) -> Option<Real> {
        self.residuals.flow(e)
    }

    /// Search tree of the last breadth-first search: vertex -> tree edge.
    pub fn predecessors(&self) -> &HashMap<G::Vertex, G::Edge> {
        &self.predecessors
    }

    /// Colors left by the last breadth-first search.
    pub fn vertex_colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// The graph restricted to edges with positive residual capacity.
    pub fn residual_graph(&self) -> ResidualGraph<'_, G> {
        FilteredGraph::new(self.graph, Always, ResidualEdgePredicate::new(&self.residuals))
    }

    /// The graph restricted to edges whose reverse has positive residual
    /// capacity.
    pub fn reversed_residual_graph(&self) -> ReversedResidualGraph<'_, G> {
        FilteredGraph::new(
            self.graph,
            Always,
            ReversedResidualEdgePredicate::new(&self.residuals, self.augmentor.reversed_edges()),
        )
    }

    /// Run the computation to completion, cancellation, or failure.
    pub fn compute(&mut self) -> FlowResult<Completion> {
        self.compute_with_events(&mut |_| {})
    }

    /// Like [`compute`](Self::compute), reporting lifecycle events to
    /// `on_event` as they happen.
    pub fn compute_with_events(&mut self, on_event: &mut EventSink<'_>) -> FlowResult<Completion> {
        self.max_flow = None;
        self.rounds = 0;
        on_event(&LifecycleEvent::Started);

        match self.run(on_event) {
            Ok(Completion::Finished) => {
                self.transition(FlowState::Done, on_event);
                debug!(max_flow = ?self.max_flow, rounds = self.rounds, "max flow computed");
                on_event(&LifecycleEvent::Finished);
                Ok(Completion::Finished)
            }
            Ok(Completion::Aborted) => {
                self.max_flow = None;
                self.transition(FlowState::Aborted, on_event);
                debug!(rounds = self.rounds, "max flow computation cancelled");
                on_event(&LifecycleEvent::Aborted);
                Ok(Completion::Aborted)
            }
            Err(err) => {
                self.max_flow = None;
                self.transition(FlowState::Failed, on_event);
                warn!(error = %err, rounds = self.rounds, "max flow computation failed");
                Err(err)
            }
        }
    }

    /// Minimum cut of the last completed computation.
    pub fn min_cut(&self) -> FlowResult<MinCut<G::Vertex, G::Edge>> {
        self.ensure_done()?;

        let source_side: HashSet<G::Vertex> = self.colors.reached().cloned().collect();
        let mut edges = Vec::new();
        let mut capacity = 0.0;
        for e in self.graph.edges() {
            if self.augmentor.is_augmented_edge(e) {
                continue;
            }
            if source_side.contains(e.source()) && !source_side.contains(e.target()) {
                capacity += self.residuals.capacity(e).unwrap_or(0.0);
                edges.push(e.clone());
            }
        }

        Ok(MinCut {
            source_side,
            edges,
            capacity,
        })
    }

    /// Vertices that can still reach the sink in the residual graph.
    pub fn sink_side(&self) -> FlowResult<HashSet<G::Vertex>> {
        self.ensure_done()?;
        let sink = self.sink.as_ref().ok_or(FlowError::MissingEndpoint {
            which: Endpoint::Sink,
        })?;

        // walk the residual graph backwards: u -> v is usable in reverse when
        // its paired edge v -> u still has residual capacity
        let view = self.reversed_residual_graph();
        let bfs = BreadthFirstSearch::new(&view, Services::new());
        let mut colors = ColorMap::new();
        bfs.compute(sink, &mut colors, &mut ())?;
        Ok(colors.reached().cloned().collect())
    }

    fn ensure_done(&self) -> FlowResult<()> {
        if self.state != FlowState::Done {
            return Err(FgError::InvalidArg {
                what: "no completed max flow computation",
            }
            .into());
        }
        Ok(())
    }

    fn run(&mut self, on_event: &mut EventSink<'_>) -> FlowResult<Completion> {
        self.transition(FlowState::Initializing, on_event);
        if self.services.is_cancelling() {
            return Ok(Completion::Aborted);
        }
        let (source, sink) = self.initialize()?;

        loop {
            if self.services.is_cancelling() {
                return Ok(Completion::Aborted);
            }

            self.transition(FlowState::Searching, on_event);
            if self.search(&source)? == Completion::Aborted {
                return Ok(Completion::Aborted);
            }
            if !self.colors.is_reached(&sink) {
                break;
            }

            if self.services.is_cancelling() {
                return Ok(Completion::Aborted);
            }
            if self.config.max_rounds.is_some_and(|limit| self.rounds >= limit) {
                return Err(FlowError::RoundLimitExceeded {
                    rounds: self.rounds,
                });
            }

            self.transition(FlowState::Augmenting, on_event);
            let delta = self.augment(&source, &sink)?;
            self.rounds += 1;
            trace!(round = self.rounds, delta, "augmented along shortest path");
        }

        self.max_flow = Some(self.outflow(&source)?);
        Ok(Completion::Finished)
    }

    /// Validate the setup and seed residual capacities. Nothing is written
    /// unless every check passes and every capacity is valid.
    fn initialize(&mut self) -> FlowResult<(G::Vertex, G::Vertex)> {
        if !self.augmentor.is_augmented() {
            return Err(FlowError::GraphNotAugmented);
        }

        let source = self.source.clone().ok_or(FlowError::MissingEndpoint {
            which: Endpoint::Source,
        })?;
        let sink = self.sink.clone().ok_or(FlowError::MissingEndpoint {
            which: Endpoint::Sink,
        })?;
        for (which, v) in [(Endpoint::Source, &source), (Endpoint::Sink, &sink)] {
            if !self.graph.contains_vertex(v) {
                return Err(FlowError::EndpointNotInGraph {
                    which,
                    vertex: format!("{v:?}"),
                });
            }
        }
        if source == sink {
            return Err(FlowError::SourceIsSink {
                vertex: format!("{source:?}"),
            });
        }

        let augmentor = self.augmentor;
        let capacity = &self.capacity;
        self.residuals = CapacityMap::seed(self.graph.edges(), |e| {
            if augmentor.is_augmented_edge(e) {
                0.0
            } else {
                capacity(e)
            }
        })?;
        self.predecessors.clear();

        debug!(
            source = ?source,
            sink = ?sink,
            edges = self.residuals.len(),
            "residual capacities seeded"
        );
        Ok((source, sink))
    }

    fn search(&mut self, source: &G::Vertex) -> FlowResult<Completion> {
        let residual =
            FilteredGraph::new(self.graph, Always, ResidualEdgePredicate::new(&self.residuals));
        let bfs = BreadthFirstSearch::new(&residual, self.services.clone());
        let mut recorder = PredecessorRecorder::new();
        let completion = bfs.compute(source, &mut self.colors, &mut recorder)?;
        self.predecessors = recorder.into_predecessors();
        Ok(completion)
    }

    /// Push the bottleneck capacity along the recorded source -> sink path.
    fn augment(&mut self, source: &G::Vertex, sink: &G::Vertex) -> FlowResult<Real> {
        let path = path_to(&self.predecessors, source, sink).ok_or_else(|| FgError::Invariant {
            what: format!("sink {sink:?} was reached but has no recorded path"),
        })?;

        let delta = path
            .iter()
            .filter_map(|e| self.residuals.residual(e))
            .fold(f64::INFINITY, f64::min);
        if !(delta > 0.0 && delta.is_finite()) {
            return Err(FgError::Invariant {
                what: format!("augmenting path has bottleneck {delta}"),
            }
            .into());
        }

        for e in &path {
            self.residuals.push(e, delta, &self.config.tolerances);
            if let Some(reversed) = self.augmentor.reversed(e) {
                self.residuals.cancel(reversed, delta);
            }
        }
        Ok(delta)
    }

    fn outflow(&self, source: &G::Vertex) -> FlowResult<Real> {
        let mut total = 0.0;
        for e in self.graph.out_edges(source)? {
            total += self.residuals.flow(e).unwrap_or(0.0);
        }
        Ok(total)
    }

    fn transition(&mut self, to: FlowState, on_event: &mut EventSink<'_>) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        trace!(?from, ?to, "flow state changed");
        on_event(&LifecycleEvent::StateChanged { from, to });
    }
}

/// Compute the maximum flow from `source` to `sink` in one call.
///
/// Reverse edges are added through `edge_factory` for the duration of the
/// computation and removed again before returning, whatever the outcome.
/// Returns `None` when cancelled through `services`.
pub fn maximum_flow<G, C, F>(
    graph: &mut G,
    capacity: C,
    edge_factory: F,
    source: G::Vertex,
    sink: G::Vertex,
    services: &Services,
) -> FlowResult<Option<Real>>
where
    G: VertexListGraph + EdgeListGraph + IncidenceGraph + MutableGraph,
    C: Fn(&G::Edge) -> Real,
    F: FnMut(&G::Vertex, &G::Vertex) -> G::Edge,
{
    let mut augmentor = ReversedEdgeAugmentor::new(graph);
    augmentor.augment(graph, edge_factory)?;

    let outcome = solve_augmented(graph, capacity, &augmentor, source, sink, services);
    augmentor.remove_reversed_edges(graph)?;
    outcome
}

fn solve_augmented<G, C>(
    graph: &G,
    capacity: C,
    augmentor: &ReversedEdgeAugmentor<G::Edge>,
    source: G::Vertex,
    sink: G::Vertex,
    services: &Services,
) -> FlowResult<Option<Real>>
where
    G: VertexListGraph + EdgeListGraph + IncidenceGraph,
    C: Fn(&G::Edge) -> Real,
{
    let mut flow = EdmondsKarp::new(graph, capacity, augmentor)?.with_services(services.clone());
    flow.set_source(source);
    flow.set_sink(sink);
    match flow.compute()? {
        Completion::Finished => Ok(flow.max_flow()),
        Completion::Aborted => Ok(None),
    }
}
