//! Thread-safe front end for a [`FramePool`].

use parking_lot::Mutex;

use crate::buffer::replacer::EvictionPolicy;
use crate::buffer::{FramePool, FrameSnapshot, Outcome, PoolStats};
use crate::common::{PageId, PoolConfig, Result};

/// A [`FramePool`] behind a `parking_lot::Mutex`.
///
/// The pool is one critical section: a single request, or a whole batch
/// via [`process_batch`](Self::process_batch), runs with exclusive access.
/// Requests from different threads are serialized in lock order.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use framepool::{EvictionPolicy, PageId, SharedFramePool};
///
/// let pool = Arc::new(SharedFramePool::new(4, EvictionPolicy::Lru).unwrap());
///
/// let handles: Vec<_> = (0..4u32)
///     .map(|t| {
///         let pool = Arc::clone(&pool);
///         thread::spawn(move || pool.process_batch((0..10).map(|i| PageId::new(t * 10 + i))))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(pool.stats().requests(), 40);
/// ```
#[derive(Debug)]
pub struct SharedFramePool {
    inner: Mutex<FramePool>,
}

impl SharedFramePool {
    /// Create a new shared pool.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: EvictionPolicy) -> Result<Self> {
        Ok(Self::from_pool(FramePool::new(frame_count, policy)?))
    }

    pub fn with_config(config: PoolConfig) -> Result<Self> {
        Ok(Self::from_pool(FramePool::with_config(config)?))
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: FramePool) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// Service one request under the lock.
    pub fn process(&self, page: PageId) -> Outcome {
        self.inner.lock().process(page)
    }

    /// Service a batch of requests while holding the lock for all of them.
    ///
    /// No other thread's request interleaves with the batch.
    pub fn process_batch<I>(&self, pages: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = PageId>,
    {
        let mut pool = self.inner.lock();
        pool.process_all(pages)
    }

    pub fn set_policy(&self, policy: EvictionPolicy) {
        self.inner.lock().set_policy(policy);
    }

    pub fn snapshot(&self) -> Vec<FrameSnapshot> {
        self.inner.lock().snapshot()
    }

    pub fn stats(&self) -> PoolStats {
        self.inner.lock().stats()
    }

    /// Unwrap the pool.
    pub fn into_inner(self) -> FramePool {
        self.inner.into_inner()
    }
}
