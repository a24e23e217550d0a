//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`EvictionPolicy::Fifo`] - evict the page loaded longest ago
//! - [`EvictionPolicy::Lru`] - evict the page touched longest ago
//! - [`EvictionPolicy::SecondChance`] - oldest-first with one reference bit
//!
//! Policies keep no state of their own. Everything they read or write lives
//! in the [`Frame`]s, so the policy of a pool can be swapped between requests.
//!
//! All three pick the frame with the smallest `load_order`, scanning in index
//! order and keeping the first minimum: ties go to the lowest frame index.

mod fifo;
mod lru;
mod second_chance;

use std::fmt;
use std::str::FromStr;

use crate::buffer::clock::LogicalClock;
use crate::buffer::Frame;
use crate::common::{Error, FrameId};

/// Which frame to evict, selected from a full pool.
///
/// # Example
/// ```
/// use framepool::EvictionPolicy;
///
/// let policy: EvictionPolicy = "lru".parse().unwrap();
/// assert_eq!(policy, EvictionPolicy::Lru);
/// assert_eq!(policy.to_string(), "lru");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// First in, first out. Hits change nothing.
    Fifo,
    /// Least recently used. Hits refresh `load_order`.
    Lru,
    /// Clock-style second chance. Hits set the reference bit.
    #[default]
    SecondChance,
}

/// Result of a victim scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Victim {
    pub frame_id: FrameId,
    /// Referenced frames promoted to newest before the victim was found.
    pub promotions: usize,
}

impl Victim {
    fn without_promotions(frame_id: FrameId) -> Self {
        Self {
            frame_id,
            promotions: 0,
        }
    }
}

impl EvictionPolicy {
    /// Every policy, in a fixed order.
    pub const ALL: [EvictionPolicy; 3] = [
        EvictionPolicy::Fifo,
        EvictionPolicy::Lru,
        EvictionPolicy::SecondChance,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::SecondChance => "second-chance",
        }
    }

    /// Bookkeeping for a hit on `frame` during the request stamped `now`.
    pub(crate) fn record_hit(&self, frame: &mut Frame, now: u64) {
        match self {
            EvictionPolicy::Fifo => fifo::record_hit(frame),
            EvictionPolicy::Lru => lru::record_hit(frame, now),
            EvictionPolicy::SecondChance => second_chance::record_hit(frame),
        }
    }

    /// Pick the frame to overwrite. `frames` must be full and non-empty.
    ///
    /// Second chance may promote frames while scanning, which advances `clock`.
    pub(crate) fn select_victim(&self, frames: &mut [Frame], clock: &mut LogicalClock) -> Victim {
        match self {
            EvictionPolicy::Fifo => Victim::without_promotions(fifo::select_victim(frames)),
            EvictionPolicy::Lru => Victim::without_promotions(lru::select_victim(frames)),
            EvictionPolicy::SecondChance => second_chance::select_victim(frames, clock),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvictionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lru" => Ok(EvictionPolicy::Lru),
            "second-chance" | "second_chance" | "secondchance" | "clock" | "sc" => {
                Ok(EvictionPolicy::SecondChance)
            }
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Frame with the smallest `load_order`; the lowest index wins ties.
///
/// Returns `FrameId(0)` for an empty slice; callers never pass one.
pub(crate) fn oldest_frame(frames: &[Frame]) -> FrameId {
    let mut oldest = 0;
    for (index, frame) in frames.iter().enumerate().skip(1) {
        if frame.load_order() < frames[oldest].load_order() {
            oldest = index;
        }
    }
    FrameId::new(oldest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    /// Frames holding pages 0.. with the given load orders.
    pub(super) fn frames_with_orders(orders: &[u64]) -> Vec<Frame> {
        orders
            .iter()
            .enumerate()
            .map(|(i, &order)| {
                let mut frame = Frame::new(FrameId::new(i), 0);
                frame.load(PageId::new(i as u32), order);
                frame
            })
            .collect()
    }

    #[test]
    fn test_oldest_frame() {
        let frames = frames_with_orders(&[5, 3, 9]);
        assert_eq!(oldest_frame(&frames), FrameId::new(1));
    }

    #[test]
    fn test_oldest_frame_tie_goes_to_lowest_index() {
        let frames = frames_with_orders(&[4, 2, 2, 2]);
        assert_eq!(oldest_frame(&frames), FrameId::new(1));
    }

    #[test]
    fn test_oldest_frame_single() {
        let frames = frames_with_orders(&[10]);
        assert_eq!(oldest_frame(&frames), FrameId::new(0));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("fifo".parse::<EvictionPolicy>().unwrap(), EvictionPolicy::Fifo);
        assert_eq!("LRU".parse::<EvictionPolicy>().unwrap(), EvictionPolicy::Lru);
        assert_eq!(
            "second-chance".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::SecondChance
        );
        assert_eq!(
            " clock ".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::SecondChance
        );
    }

    #[test]
    fn test_policy_parse_unknown() {
        match "mru".parse::<EvictionPolicy>() {
            Err(Error::UnknownPolicy(name)) => assert_eq!(name, "mru"),
            other => panic!("Expected UnknownPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in EvictionPolicy::ALL {
            assert_eq!(policy.to_string().parse::<EvictionPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_fifo_and_lru_never_promote() {
        let mut clock = LogicalClock::new();
        for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
            let mut frames = frames_with_orders(&[3, 1, 2]);
            frames[1].set_referenced(true);

            let victim = policy.select_victim(&mut frames, &mut clock);
            assert_eq!(victim.frame_id, FrameId::new(1));
            assert_eq!(victim.promotions, 0);
        }
        assert_eq!(clock.now(), 0);
    }
}
