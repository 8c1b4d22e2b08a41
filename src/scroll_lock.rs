//! Background scroll suppression for modal overlays.
//!
//! A page body owns one `BodyScroll`. Every visible overlay holds a
//! `ScrollLockGuard`; the body is scroll-locked while at least one guard is
//! alive. Dropping the guard releases the lock on every exit path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Inline style applied to the body while scrolling is suppressed.
pub const LOCKED_BODY_STYLE: &str = "overflow:hidden";

#[derive(Debug, Clone, Default)]
pub struct BodyScroll {
    locks: Arc<AtomicUsize>,
}

impl BodyScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a lock for the lifetime of the returned guard.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLockGuard {
        self.locks.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            locks: Arc::clone(&self.locks),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locks.load(Ordering::SeqCst) > 0
    }

    /// Body `style` attribute for the current lock state.
    pub fn style(&self) -> Option<&'static str> {
        self.is_locked().then_some(LOCKED_BODY_STYLE)
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    locks: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locks.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_is_unlocked() {
        let body = BodyScroll::new();
        assert!(!body.is_locked());
        assert_eq!(body.style(), None);
    }

    #[test]
    fn test_lock_released_on_drop() {
        let body = BodyScroll::new();
        {
            let _guard = body.lock();
            assert!(body.is_locked());
            assert_eq!(body.style(), Some("overflow:hidden"));
        }
        assert!(!body.is_locked());
    }

    #[test]
    fn test_nested_locks() {
        let body = BodyScroll::new();
        let first = body.lock();
        let second = body.lock();
        drop(first);
        assert!(body.is_locked());
        drop(second);
        assert!(!body.is_locked());
    }

    #[test]
    fn test_clones_share_state() {
        let body = BodyScroll::new();
        let view = body.clone();
        let _guard = body.lock();
        assert!(view.is_locked());
    }

    #[test]
    fn test_lock_released_on_panic() {
        let body = BodyScroll::new();
        let inner = body.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.lock();
            panic!("render failed");
        });
        assert!(result.is_err());
        assert!(!body.is_locked());
    }
}
