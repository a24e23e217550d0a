//! Frame pool management.
//!
//! The frame pool is a fixed set of page slots serving a stream of page
//! requests. Each request is a hit or a fault; when the pool is full, the
//! eviction policy picks which resident page a fault overwrites.
//!
//! # Components
//! - [`FramePool`] - The residency engine
//! - [`Frame`] - A slot in the pool holding a page + policy metadata
//! - [`Outcome`] / [`Access`] - Per-request results
//! - [`SharedFramePool`] - Mutex-guarded front end for multiple threads
//! - [`PoolStats`] - Hit/fault statistics
//! - [`replacer`] - Eviction policy implementations

mod clock;
mod frame;
mod frame_pool;
mod outcome;
pub mod replacer;
mod shared;
mod stats;

pub use clock::LogicalClock;
pub use frame::{Frame, FrameSnapshot};
pub use frame_pool::FramePool;
pub use outcome::{Access, Outcome};
pub use replacer::EvictionPolicy;
pub use shared::SharedFramePool;
pub use stats::PoolStats;
