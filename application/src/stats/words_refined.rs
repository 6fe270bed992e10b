//! Running total of words returned to clients.
//!
//! The counter lives for the lifetime of the process and starts from a
//! configured seed; a restart resets it to the seed. Durable per-user totals
//! belong to the external store.

use std::sync::atomic::{AtomicU64, Ordering};

/// Seed used when none is configured.
pub const DEFAULT_WORDS_REFINED_SEED: u64 = 14204;

/// Shared, lock-free word counter.
#[derive(Debug)]
pub struct WordsRefinedCounter {
    total: AtomicU64,
}

impl WordsRefinedCounter {
    pub fn new(seed: u64) -> Self {
        Self {
            total: AtomicU64::new(seed),
        }
    }

    pub fn get(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Add `count` and return the new total. Zero is ignored.
    pub fn add(&self, count: u64) -> u64 {
        if count == 0 {
            return self.get();
        }
        self.total.fetch_add(count, Ordering::Relaxed) + count
    }

    pub fn set(&self, count: u64) {
        self.total.store(count, Ordering::Relaxed);
    }
}

impl Default for WordsRefinedCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_REFINED_SEED)
    }
}
