//! Logical clock that stamps frame bookkeeping.

/// A strictly increasing counter owned by one [`FramePool`](super::FramePool).
///
/// Starts at 0, advances by one on every [`tick`](Self::tick), never resets.
/// Each tick hands out a value no frame has seen before, so `load_order`
/// values among frames stay distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalClock {
    now: u64,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self { now: 0 }
    }

    /// Current value, without advancing.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advance the clock and return the new value.
    #[inline]
    pub fn tick(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        assert_eq!(LogicalClock::new().now(), 0);
        assert_eq!(LogicalClock::default(), LogicalClock::new());
    }

    #[test]
    fn test_clock_tick_is_strictly_increasing() {
        let mut clock = LogicalClock::new();
        let mut last = clock.now();
        for _ in 0..100 {
            let next = clock.tick();
            assert!(next > last);
            assert_eq!(next, clock.now());
            last = next;
        }
        assert_eq!(clock.now(), 100);
    }
}
