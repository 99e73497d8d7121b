//! Outcome and notification types shared by algorithm drivers.

/// How a computation ended when it did not fail.
///
/// Cancellation is an expected termination path, not an error, so it is
/// reported here rather than through an error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completion {
    Finished,
    Aborted,
}

impl Completion {
    pub fn is_finished(self) -> bool {
        matches!(self, Completion::Finished)
    }
}

/// Notification emitted by a driver while it runs, parameterized by the
/// driver's own state enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent<S> {
    Started,
    StateChanged { from: S, to: S },
    Finished,
    Aborted,
}
