//! LRU (Least-Recently-Used) replacement policy.
//!
//! Same oldest-first scan as FIFO, but a hit restamps the frame with the
//! current request's clock value, so `load_order` tracks the last touch.

use super::oldest_frame;
use crate::buffer::Frame;
use crate::common::FrameId;

/// Refresh the frame to the request stamp `now`.
///
/// The pool ticks the clock once per request before the lookup, so `now`
/// is newer than every stamp already in the pool and no load reuses it.
pub(super) fn record_hit(frame: &mut Frame, now: u64) {
    frame.touch(now);
}

/// Frame touched longest ago.
pub(super) fn select_victim(frames: &[Frame]) -> FrameId {
    oldest_frame(frames)
}
