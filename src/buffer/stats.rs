//! Frame pool statistics tracking.

use std::fmt;

/// Counters kept by a [`FramePool`](super::FramePool).
///
/// The pool is mutated through `&mut self`, so these are plain counters; a
/// copy can be taken at any time and printed, compared, etc.
///
/// # Example
/// ```
/// use framepool::{EvictionPolicy, FramePool, PageId};
///
/// let mut pool = FramePool::new(1, EvictionPolicy::Fifo).unwrap();
/// pool.process(PageId::new(1));
/// pool.process(PageId::new(1));
///
/// let stats = pool.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Requests whose page was already resident.
    pub hits: u64,

    /// Requests that loaded their page.
    pub faults: u64,

    /// Faults that overwrote a resident page.
    pub evictions: u64,

    /// Second-chance promotions during victim scans.
    pub promotions: u64,
}

impl PoolStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requests seen.
    pub fn requests(&self) -> u64 {
        self.hits + self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, promotions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.promotions,
            self.hit_rate() * 100.0
        )
    }
}
