//! Frame Pool - the page residency engine.
//!
//! The [`FramePool`] provides:
//! - A fixed set of frames, each holding at most one page
//! - Hit/fault resolution for a stream of page requests
//! - Pluggable eviction policies, swappable between requests

use log::{debug, info, trace};

use crate::buffer::clock::LogicalClock;
use crate::buffer::replacer::EvictionPolicy;
use crate::buffer::{Access, Frame, FrameSnapshot, Outcome, PoolStats};
use crate::common::{FrameId, PageId, PoolConfig, Result};

/// A fixed-size pool of page frames.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                         FramePool                           │
/// │  ┌───────────────────────────────────────────────────────┐  │
/// │  │                 frames: Vec<Frame>                    │  │
/// │  │   [A: page, t, ref] [B: page, t, ref] [C: ...] ...    │  │
/// │  └───────────────────────────────────────────────────────┘  │
/// │  ┌──────────────┐  ┌────────────────┐  ┌──────────────┐     │
/// │  │    clock     │  │     policy     │  │    stats     │     │
/// │  │ LogicalClock │  │ EvictionPolicy │  │  PoolStats   │     │
/// │  └──────────────┘  └────────────────┘  └──────────────┘     │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Clock
/// Construction stamps frames `1..=N` in index order, leaving the clock at
/// `N`. Every request then ticks the clock once before the lookup; an LRU hit
/// stores that tick. Loads and second-chance promotions tick again. Stamps
/// are therefore unique across frames.
///
/// # Thread Safety
/// Single-threaded: every mutation goes through `&mut self`. Wrap the pool in
/// a [`SharedFramePool`](super::SharedFramePool) to share it.
///
/// # Usage
/// ```
/// use framepool::{EvictionPolicy, FramePool, Outcome, FrameId, PageId};
///
/// let mut pool = FramePool::new(2, EvictionPolicy::Fifo).unwrap();
/// assert_eq!(pool.process(PageId::new(1)), Outcome::Fault(FrameId::new(0)));
/// assert_eq!(pool.process(PageId::new(2)), Outcome::Fault(FrameId::new(1)));
/// assert_eq!(pool.process(PageId::new(1)), Outcome::Hit(FrameId::new(0)));
///
/// // Pool is full: FIFO evicts page 1, the first to arrive.
/// assert_eq!(pool.process(PageId::new(3)), Outcome::Fault(FrameId::new(0)));
/// ```
#[derive(Debug, Clone)]
pub struct FramePool {
    /// Fixed pool of frames allocated at startup.
    frames: Vec<Frame>,

    /// Eviction policy used once no frame is free.
    policy: EvictionPolicy,

    /// Source of every `load_order` stamp.
    clock: LogicalClock,

    stats: PoolStats,
}

impl FramePool {
    /// Create a new frame pool with every frame free.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: EvictionPolicy) -> Result<Self> {
        Self::with_config(PoolConfig::new(frame_count, policy))
    }

    /// Create a new frame pool from a [`PoolConfig`].
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `config.frame_count` is 0
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;

        let mut clock = LogicalClock::new();
        let frames: Vec<Frame> = (0..config.frame_count)
            .map(|i| Frame::new(FrameId::new(i), clock.tick()))
            .collect();

        info!(
            "created frame pool with {} frames, {} eviction",
            config.frame_count, config.policy
        );

        Ok(Self {
            frames,
            policy: config.policy,
            clock,
            stats: PoolStats::new(),
        })
    }

    // ========================================================================
    // Public API: Requests
    // ========================================================================

    /// Service one page request.
    ///
    /// Never fails: a valid pool resolves every request to a hit or a fault.
    pub fn process(&mut self, page: PageId) -> Outcome {
        self.access(page).outcome
    }

    /// Service every request in order and collect the outcomes.
    pub fn process_all<I>(&mut self, pages: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = PageId>,
    {
        pages.into_iter().map(|page| self.process(page)).collect()
    }

    /// Service one page request and report what it did.
    ///
    /// 1. Resident page: the policy records the hit.
    /// 2. Free frame available: the page is loaded there.
    /// 3. Otherwise: the policy picks a victim and the page overwrites it.
    pub fn access(&mut self, page: PageId) -> Access {
        let now = self.clock.tick();

        if let Some(frame_id) = self.find_resident(page) {
            return self.handle_hit(page, frame_id, now);
        }

        self.stats.faults += 1;

        if let Some(frame_id) = self.find_free() {
            self.load(frame_id, page);
            trace!("page {} loaded into free frame {}", page, frame_id.label());
            return Access {
                page,
                outcome: Outcome::Fault(frame_id),
                evicted: None,
                promotions: 0,
            };
        }

        self.handle_eviction(page)
    }

    // ========================================================================
    // Public API: Lookups
    // ========================================================================

    /// Frame holding `page`, if it is resident. No side effects.
    pub fn find_resident(&self, page: PageId) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|frame| frame.holds(page))
            .map(FrameId::new)
    }

    /// First free frame in index order. No side effects.
    pub fn find_free(&self) -> Option<FrameId> {
        self.frames
            .iter()
            .position(Frame::is_free)
            .map(FrameId::new)
    }

    // ========================================================================
    // Public API: Policy, stats and inspection
    // ========================================================================

    /// Current eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Swap the eviction policy between requests.
    ///
    /// Frame state is kept as is. Reference bits left behind by second
    /// chance are ignored by FIFO and LRU.
    pub fn set_policy(&mut self, policy: EvictionPolicy) {
        if policy != self.policy {
            info!("eviction policy changed from {} to {}", self.policy, policy);
            self.policy = policy;
        }
    }

    /// Read-only view of every frame, in index order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Copy of every frame's `(label, resident_page, load_order, referenced)`.
    pub fn snapshot(&self) -> Vec<FrameSnapshot> {
        self.frames.iter().map(Frame::snapshot).collect()
    }

    /// Get the pool size.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames holding a page.
    pub fn resident_count(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_free()).count()
    }

    /// Current clock value.
    pub fn clock(&self) -> u64 {
        self.clock.now()
    }

    /// Get pool statistics.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Put `page` in `frame_id` with a fresh clock stamp.
    ///
    /// Callers guarantee `page` is not resident elsewhere.
    pub(crate) fn load(&mut self, frame_id: FrameId, page: PageId) {
        let stamp = self.clock.tick();
        self.frames[frame_id.0].load(page, stamp);
    }

    fn handle_hit(&mut self, page: PageId, frame_id: FrameId, now: u64) -> Access {
        self.policy.record_hit(&mut self.frames[frame_id.0], now);
        self.stats.hits += 1;
        trace!("page {} hit in frame {}", page, frame_id.label());

        Access {
            page,
            outcome: Outcome::Hit(frame_id),
            evicted: None,
            promotions: 0,
        }
    }

    fn handle_eviction(&mut self, page: PageId) -> Access {
        let victim = self.policy.select_victim(&mut self.frames, &mut self.clock);
        let frame_id = victim.frame_id;
        let evicted = self.frames[frame_id.0].resident_page();

        self.load(frame_id, page);

        self.stats.evictions += 1;
        self.stats.promotions += victim.promotions as u64;

        if let Some(old) = evicted {
            debug!(
                "{}: evicted page {} from frame {} for page {} ({} promotions)",
                self.policy,
                old,
                frame_id.label(),
                page,
                victim.promotions
            );
        }

        Access {
            page,
            outcome: Outcome::Fault(frame_id),
            evicted,
            promotions: victim.promotions,
        }
    }
}
