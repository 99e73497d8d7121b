use core::fmt;
use core::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

static GRAPHS_CREATED: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a graph instance.
///
/// Algorithms that are bound to one graph (augmentors, flow drivers) compare
/// ids to reject being paired with a different instance. Clones of a graph
/// get their own id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(NonZeroU64);

impl GraphId {
    /// Allocate a new id, distinct from every id handed out before.
    ///
    /// The counter never wraps: once the id space is used up this panics
    /// instead of handing out an id twice.
    pub fn fresh() -> Self {
        GRAPHS_CREATED
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
            .and_then(Self::nth)
            .expect("graph id space exhausted")
    }

    /// Id of the graph created as number `ordinal` (0-based); `None` past the
    /// end of the id space.
    fn nth(ordinal: u64) -> Option<Self> {
        ordinal.checked_add(1).and_then(NonZeroU64::new).map(Self)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.get())
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.get())
    }
}
