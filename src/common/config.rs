//! Configuration for the frame pool.

use crate::buffer::replacer::EvictionPolicy;
use crate::common::{Error, Result};

/// Number of frames used when the caller does not pick one.
pub const DEFAULT_FRAME_COUNT: usize = 4;

/// Number of frames that get a single-letter label (`A`..`Z`).
pub const LABELED_FRAMES: usize = 26;

/// Construction parameters for a [`FramePool`](crate::buffer::FramePool).
///
/// # Example
/// ```
/// use framepool::{EvictionPolicy, PoolConfig};
///
/// let config = PoolConfig::new(3, EvictionPolicy::Lru);
/// assert!(config.validate().is_ok());
/// assert!(PoolConfig::new(0, EvictionPolicy::Lru).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of frames in the pool. Must be at least 1.
    pub frame_count: usize,

    /// Eviction policy used once the pool is full.
    pub policy: EvictionPolicy,
}

impl PoolConfig {
    /// Create a new config.
    pub fn new(frame_count: usize, policy: EvictionPolicy) -> Self {
        Self {
            frame_count,
            policy,
        }
    }

    /// Check that a pool can be built from this config.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT, EvictionPolicy::default())
    }
}
