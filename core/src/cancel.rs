//! Cancellation for in-flight requests.
//!
//! A screen that is torn down aborts its controller; transports poll the
//! signal and the client refuses to parse a response once it has fired.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owning side of a cancellation pair.
#[derive(Debug, Clone, Default)]
pub struct AbortController {
    flag: Arc<AtomicBool>,
}

impl AbortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            flag: Arc::clone(&self.flag),
        }
    }

    /// Idempotent.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

/// Observing side of a cancellation pair. Cheap to clone and `Send`.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    flag: Arc<AtomicBool>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_is_visible_through_every_signal() {
        let controller = AbortController::new();
        let a = controller.signal();
        let b = a.clone();
        assert!(!a.is_aborted());

        controller.abort();
        controller.abort();
        assert!(a.is_aborted());
        assert!(b.is_aborted());
    }

    #[test]
    fn independent_controllers_do_not_interfere() {
        let first = AbortController::new();
        let second = AbortController::new();
        first.abort();
        assert!(!second.signal().is_aborted());
    }
}
