//! Graph validation logic.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::traits::{GraphEdge, GraphVertex};

/// Check that every edge references declared vertices.
pub(crate) fn validate_endpoints<V: GraphVertex, E: GraphEdge<V>>(
    vertices: &[V],
    edges: &[E],
) -> GraphResult<()> {
    let declared: HashSet<&V> = vertices.iter().collect();

    for e in edges {
        if !declared.contains(e.source()) || !declared.contains(e.target()) {
            return Err(GraphError::dangling_edge(e));
        }
    }

    Ok(())
}
