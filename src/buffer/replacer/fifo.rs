//! FIFO (First-In-First-Out) replacement policy.
//!
//! `load_order` is only written by loads, so the oldest frame is the one
//! whose page arrived first.

use super::oldest_frame;
use crate::buffer::Frame;
use crate::common::FrameId;

/// FIFO ignores hits: arrival order, not access order, drives eviction.
pub(super) fn record_hit(_frame: &mut Frame) {}

/// Frame whose page was loaded longest ago.
pub(super) fn select_victim(frames: &[Frame]) -> FrameId {
    oldest_frame(frames)
}
