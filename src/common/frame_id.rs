//! Frame identifier type.

use std::fmt;

use crate::common::config::LABELED_FRAMES;

/// Identifies a frame in the pool.
///
/// Using `usize` because:
/// 1. Frames are stored in `Vec<Frame>`
/// 2. Direct indexing without casting: `frames[frame_id.0]`
///
/// # Example
/// ```
/// use framepool::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.label(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// Diagnostic label for this frame.
    ///
    /// The first [`LABELED_FRAMES`] frames are lettered `A`, `B`, `C`, ...;
    /// larger pools fall back to `F<index>`.
    pub fn label(&self) -> String {
        if self.0 < LABELED_FRAMES {
            char::from(b'A' + self.0 as u8).to_string()
        } else {
            format!("F{}", self.0)
        }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
    }

    #[test]
    fn test_frame_id_equality() {
        assert_eq!(FrameId::new(5), FrameId::new(5));
        assert_ne!(FrameId::new(5), FrameId::new(6));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }

    #[test]
    fn test_frame_id_label() {
        assert_eq!(FrameId::new(0).label(), "A");
        assert_eq!(FrameId::new(3).label(), "D");
        assert_eq!(FrameId::new(25).label(), "Z");
        assert_eq!(FrameId::new(26).label(), "F26");
        assert_eq!(FrameId::new(100).label(), "F100");
    }
}
