//! Graph-specific error types.

use std::fmt::Debug;

use fg_core::FgError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and query errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was queried that is not part of the graph (or is hidden by a view).
    #[error("Vertex {vertex} not found in graph")]
    VertexNotFound { vertex: String },

    /// An edge references an endpoint that was never added as a vertex.
    #[error("Edge {edge} references a vertex that is not in the graph")]
    DanglingEdge { edge: String },
}

impl GraphError {
    pub fn vertex_not_found(vertex: &impl Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn dangling_edge(edge: &impl Debug) -> Self {
        GraphError::DanglingEdge {
            edge: format!("{edge:?}"),
        }
    }
}

impl From<GraphError> for FgError {
    fn from(err: GraphError) -> Self {
        FgError::Invariant {
            what: err.to_string(),
        }
    }
}
