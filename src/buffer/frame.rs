//! Frame - a slot in the frame pool.
//!
//! A [`Frame`] holds at most one page plus the bookkeeping every eviction
//! policy reads:
//! - Which page is resident (if any)
//! - `load_order`, a value taken from the pool's clock
//! - The second-chance reference bit

use crate::common::{FrameId, PageId};

/// A frame in the pool.
///
/// Frames are the "slots" in the pool. The pool has a fixed number of frames
/// allocated at startup and owns them exclusively; callers only ever see
/// `&Frame` or a [`FrameSnapshot`].
///
/// All policy state lives here. The policies themselves hold nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Position in the pool.
    id: FrameId,

    /// Which page is currently loaded, or None if the frame is free.
    resident_page: Option<PageId>,

    /// Clock value of the last load, LRU touch or second-chance promotion.
    load_order: u64,

    /// Set on a second-chance hit, cleared by promotion.
    referenced: bool,
}

impl Frame {
    /// Create a new free frame with the given initial load order.
    pub fn new(id: FrameId, load_order: u64) -> Self {
        Self {
            id,
            resident_page: None,
            load_order,
            referenced: false,
        }
    }

    #[inline]
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Diagnostic label (`A`, `B`, ...).
    pub fn label(&self) -> String {
        self.id.label()
    }

    /// Get the page ID of the loaded page.
    #[inline]
    pub fn resident_page(&self) -> Option<PageId> {
        self.resident_page
    }

    #[inline]
    pub fn load_order(&self) -> u64 {
        self.load_order
    }

    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    /// Check if the frame is free (no page loaded).
    #[inline]
    pub fn is_free(&self) -> bool {
        self.resident_page.is_none()
    }

    /// Check if `page` is the page loaded in this frame.
    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        self.resident_page == Some(page)
    }

    // ========================================================================
    // Mutation (pool and policies only)
    // ========================================================================

    /// Put `page` in this frame, stamped with `clock`.
    ///
    /// A freshly loaded page never carries a reference bit.
    pub(crate) fn load(&mut self, page: PageId, clock: u64) {
        self.resident_page = Some(page);
        self.load_order = clock;
        self.referenced = false;
    }

    pub(crate) fn touch(&mut self, clock: u64) {
        self.load_order = clock;
    }

    pub(crate) fn set_referenced(&mut self, referenced: bool) {
        self.referenced = referenced;
    }

    /// Copy the frame's state out for reporting.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            label: self.label(),
            resident_page: self.resident_page,
            load_order: self.load_order,
            referenced: self.referenced,
        }
    }
}

/// A point-in-time copy of one frame.
///
/// Unlike `Frame`, this carries no tie to the pool and can be kept across
/// requests, printed, compared, etc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub label: String,
    pub resident_page: Option<PageId>,
    pub load_order: u64,
    pub referenced: bool,
}
