//! Per-request results.

use std::fmt;

use crate::common::{FrameId, PageId};

/// What happened to one page request.
///
/// Every request on a valid pool yields exactly one of these; there is no
/// failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The page was already resident in this frame.
    Hit(FrameId),
    /// The page was loaded into this frame.
    Fault(FrameId),
}

impl Outcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault(_))
    }

    /// Frame that now holds the requested page.
    #[inline]
    pub fn frame_id(&self) -> FrameId {
        match self {
            Outcome::Hit(frame_id) | Outcome::Fault(frame_id) => *frame_id,
        }
    }

    /// `'H'` for a hit, `'F'` for a fault.
    pub fn code(&self) -> char {
        match self {
            Outcome::Hit(_) => 'H',
            Outcome::Fault(_) => 'F',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.frame_id().label())
    }
}

/// Detailed record of one request, as returned by
/// [`FramePool::access`](super::FramePool::access).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// The requested page.
    pub page: PageId,
    pub outcome: Outcome,
    /// Page overwritten by this request, if the pool was full.
    pub evicted: Option<PageId>,
    /// Second-chance promotions performed while choosing the victim.
    pub promotions: usize,
}

impl Access {
    /// A fault that landed in a frame that was free.
    pub fn loaded_free_frame(&self) -> bool {
        self.outcome.is_fault() && self.evicted.is_none()
    }
}
