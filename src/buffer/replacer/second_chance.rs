//! Second chance replacement policy.
//!
//! A hit sets the frame's reference bit. On eviction the oldest frame is
//! examined: if its bit is set, the bit is cleared and the frame is promoted
//! to newest, then the scan restarts from the global minimum. The first
//! unreferenced oldest frame is the victim.
//!
//! There is no rotating hand; the rescan-for-minimum order is what callers'
//! traces depend on.
//!
//! Each promotion clears one bit and nothing sets bits during the scan, so at
//! most `frames.len()` promotions happen before a victim turns up.

use log::debug;

use super::{oldest_frame, Victim};
use crate::buffer::clock::LogicalClock;
use crate::buffer::Frame;

pub(super) fn record_hit(frame: &mut Frame) {
    frame.set_referenced(true);
}

pub(super) fn select_victim(frames: &mut [Frame], clock: &mut LogicalClock) -> Victim {
    let mut promotions = 0;
    loop {
        let frame_id = oldest_frame(frames);
        let frame = &mut frames[frame_id.0];

        if !frame.is_referenced() {
            return Victim {
                frame_id,
                promotions,
            };
        }

        frame.set_referenced(false);
        frame.touch(clock.tick());
        promotions += 1;
        debug!(
            "second chance: promoted frame {} to load order {}",
            frame.label(),
            frame.load_order()
        );
    }
}
