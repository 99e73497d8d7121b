//! Edge types.
//!
//! Edges are values: two edges are the same edge iff they compare equal.
//! Use [`TaggedEdge`] when parallel edges between the same endpoints must
//! coexist.

use std::fmt;

/// A directed edge with a source and a target vertex.
pub trait DirectedEdge<V> {
    fn source(&self) -> &V;
    fn target(&self) -> &V;

    fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }
}

/// Plain edge identified by its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SEdge<V> {
    source: V,
    target: V,
}

impl<V> SEdge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }
}

impl<V> DirectedEdge<V> for SEdge<V> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: fmt::Display> fmt::Display for SEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// Edge carrying a tag that takes part in its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedEdge<V, T> {
    source: V,
    target: V,
    tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    pub fn tag(&self) -> &T {
        &self.tag
    }
}

impl<V, T> DirectedEdge<V> for TaggedEdge<V, T> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: fmt::Display, T: fmt::Display> fmt::Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}[{}]", self.source, self.target, self.tag)
    }
}
