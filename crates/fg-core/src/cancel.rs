//! Cooperative cancellation.
//!
//! Long-running algorithms poll a [`CancelToken`] at well-defined points and
//! stop cleanly when it is set. Nothing is interrupted preemptively.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every computation polling this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the token can be reused.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelling(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Services handed down from a caller to an algorithm and to the
/// sub-algorithms it drives.
#[derive(Debug, Clone, Default)]
pub struct Services {
    cancel: CancelToken,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel_token(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn is_cancelling(&self) -> bool {
        self.cancel.is_cancelling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let services = Services::with_cancel_token(token.clone());
        let handed_down = services.clone();

        assert!(!handed_down.is_cancelling());
        token.cancel();
        assert!(handed_down.is_cancelling());
        token.reset();
        assert!(!services.is_cancelling());
    }
}
