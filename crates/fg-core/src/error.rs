//! Errors shared by every flowgraph crate.

use thiserror::Error;

pub type FgResult<T> = Result<T, FgError>;

/// Failures that are not specific to graphs or flows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FgError {
    #[error("{what} is not finite: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// An internal consistency check failed. Points at a bug, or at a
    /// factory callback returning values already in the graph.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
