//! fg-core: shared building blocks for the flowgraph crates.
//!
//! - `ids`: process-unique graph identities
//! - `numeric`: `Real`, tolerances, finiteness checks
//! - `cancel`: cooperative cancellation and the services handle
//! - `lifecycle`: completion status and lifecycle events of algorithm drivers
//! - `error`: errors shared across crates

pub mod cancel;
pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod numeric;

pub use cancel::{CancelToken, Services};
pub use error::{FgError, FgResult};
pub use ids::GraphId;
pub use lifecycle::{Completion, LifecycleEvent};
pub use numeric::*;
