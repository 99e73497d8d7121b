//! Error types for flow computations.

use std::fmt;

use fg_core::{FgError, GraphId};
use fg_graph::GraphError;
use thiserror::Error;

/// Which terminal of the flow network an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Sink,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Sink => write!(f, "sink"),
        }
    }
}

/// Errors raised while preparing or running a flow computation.
///
/// Every variant is detected before any residual capacity is written, except
/// `Graph`/`Core` invariant failures which indicate a programming error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Negative capacity {capacity} on edge {edge}")]
    NegativeCapacity { edge: String, capacity: f64 },

    #[error("Graph has not been augmented with reversed edges")]
    GraphNotAugmented,

    #[error("Graph is already augmented with reversed edges")]
    AlreadyAugmented,

    #[error("No {which} vertex was set")]
    MissingEndpoint { which: Endpoint },

    #[error("The {which} vertex {vertex} is not in the graph")]
    EndpointNotInGraph { which: Endpoint, vertex: String },

    #[error("Source and sink are the same vertex {vertex}")]
    SourceIsSink { vertex: String },

    #[error("Augmentor is bound to graph {expected} but was used with graph {actual}")]
    GraphMismatch { expected: GraphId, actual: GraphId },

    #[error("Edge factory returned {edge}, which is already in the graph")]
    FactoryEdgeExists { edge: String },

    #[error("Edge factory asked for {from} -> {to} returned {edge}")]
    FactoryEdgeMisdirected { from: String, to: String, edge: String },

    #[error("Vertex factory returned {vertex}, which is already in the graph")]
    FactoryVertexExists { vertex: String },

    #[error("No termination after {rounds} augmenting rounds")]
    RoundLimitExceeded { rounds: usize },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Core error: {0}")]
    Core(#[from] FgError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for FgError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::Core(inner) => inner,
            other => FgError::Invariant {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_names_appear_in_messages() {
        let err = FlowError::EndpointNotInGraph {
            which: Endpoint::Sink,
            vertex: "'t'".into(),
        };
        assert_eq!(err.to_string(), "The sink vertex 't' is not in the graph");
    }

    #[test]
    fn factory_errors_name_the_edge() {
        let err = FlowError::FactoryEdgeMisdirected {
            from: "'b'".into(),
            to: "'a'".into(),
            edge: "SEdge('a', 'b')".into(),
        };
        assert_eq!(
            err.to_string(),
            "Edge factory asked for 'b' -> 'a' returned SEdge('a', 'b')"
        );
    }

    #[test]
    fn core_errors_unwrap_on_conversion() {
        let inner = FgError::InvalidArg { what: "x" };
        assert_eq!(FgError::from(FlowError::Core(inner.clone())), inner);
        assert!(matches!(
            FgError::from(FlowError::GraphNotAugmented),
            FgError::Invariant { .. }
        ));
    }
}
