//! Request generation stamps.
//!
//! Every probe or refresh takes a stamp before it suspends on the network.
//! When it resumes, it applies its result only if no newer stamp has been
//! issued in the meantime.
//!
//! ```text
//!   logout ─► clear (gen 3)
//!   login  ─► refresh (gen 4) ──────────────► apply ✓
//!        refresh (gen 2) ─────────────────────────────► discard (2 < 4)
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic stamp counter owned by one manager.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new stamp, invalidating every earlier one.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The latest stamp issued.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns true if `stamp` is still the latest.
    pub fn is_current(&self, stamp: u64) -> bool {
        self.current() == stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_stamp_invalidates_older() {
        let generation = Generation::new();
        assert_eq!(generation.current(), 0);

        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
