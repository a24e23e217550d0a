//! framepool - a fixed-capacity page frame pool with swappable eviction.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Caller (paging-trace, tests, ...)               │
//! │            supplies page requests, renders outcomes             │
//! └─────────────────────────────────────────────────────────────────┘
//!                    │ PageId                  ▲ Outcome / Access
//!                    ▼                         │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │       Frame Pool (buffer/)  [Runtime Swappable]         │    │
//! │  │   ┌─────────────────────────────────────────────────┐   │    │
//! │  │   │  Eviction Policies: FIFO | LRU | SECOND CHANCE  │   │    │
//! │  │   └─────────────────────────────────────────────────┘   │    │
//! │  │      FramePool + Frame + LogicalClock + PoolStats        │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │        Reporting (trace)  ← read-only snapshots          │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`buffer`] - Frame pool and eviction policies
//! - [`trace`] - Text rendering of per-request outcomes and frame tables
//!
//! # Quick Start
//! ```
//! use framepool::{EvictionPolicy, FramePool, PageId};
//!
//! let mut pool = FramePool::new(4, EvictionPolicy::SecondChance).unwrap();
//! let outcomes = pool.process_all([4, 1, 7, 10, 8, 4].map(PageId::new));
//!
//! assert!(outcomes.iter().all(|o| o.is_fault()));
//! assert_eq!(pool.resident_count(), 4);
//! ```

pub mod buffer;
pub mod common;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{PoolConfig, DEFAULT_FRAME_COUNT};
pub use common::{Error, FrameId, PageId, Result};

pub use buffer::{
    Access, EvictionPolicy, Frame, FramePool, FrameSnapshot, Outcome, PoolStats, SharedFramePool,
};
