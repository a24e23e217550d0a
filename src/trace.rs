//! Human-readable request traces.
//!
//! The pool itself never prints. This module turns [`Access`] records and
//! [`FrameSnapshot`]s into text lines:
//!
//! ```text
//!  8   F   A  EVICTED 4
//! ========== REQUEST: 8
//! A   p= 8   t=13    chance:0
//! B   p= 1   t=8    chance:0
//! ```

use std::io::Write;

use crate::buffer::{Access, FramePool, FrameSnapshot, Outcome};
use crate::common::{PageId, Result};

/// One line per request: page, `H`/`F`, frame label, and for faults where
/// the page landed.
pub fn format_outcome(access: &Access) -> String {
    let mut line = format!(
        "{:>2}   {}   {}",
        access.page,
        access.outcome.code(),
        access.outcome.frame_id().label()
    );

    if access.outcome.is_fault() {
        match access.evicted {
            Some(old) => line.push_str(&format!("  EVICTED {}", old)),
            None => line.push_str("  LOADED TO FREE FRAME"),
        }
    }

    line
}

/// Frame table after `request`: a header line, then one line per frame.
pub fn format_frames(request: PageId, frames: &[FrameSnapshot]) -> String {
    let mut out = format!("========== REQUEST: {}\n", request);
    for frame in frames {
        let page = match frame.resident_page {
            Some(page) => format!("{:>2}", page),
            None => "--".to_string(),
        };
        out.push_str(&format!(
            "{}   p={}   t={}    chance:{}\n",
            frame.label,
            page,
            frame.load_order,
            u8::from(frame.referenced)
        ));
    }
    out
}

/// One traced request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub access: Access,
    /// Pool state right after the request.
    pub frames: Vec<FrameSnapshot>,
}

/// Runs requests through a pool and keeps what each one did.
///
/// # Example
/// ```
/// use framepool::trace::TraceRecorder;
/// use framepool::{EvictionPolicy, FramePool, PageId};
///
/// let mut pool = FramePool::new(2, EvictionPolicy::Fifo).unwrap();
/// let mut recorder = TraceRecorder::new();
/// recorder.run(&mut pool, [1, 2, 1].map(PageId::new));
///
/// let mut out = Vec::new();
/// recorder.render(&mut out, false).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().nth(2), Some(" 1   H   A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service one request and record it.
    pub fn record(&mut self, pool: &mut FramePool, page: PageId) -> Outcome {
        let access = pool.access(page);
        self.entries.push(TraceEntry {
            access,
            frames: pool.snapshot(),
        });
        access.outcome
    }

    /// Service every request in order, recording each.
    pub fn run<I>(&mut self, pool: &mut FramePool, pages: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = PageId>,
    {
        pages
            .into_iter()
            .map(|page| self.record(pool, page))
            .collect()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.entries.iter().map(|e| e.access.outcome).collect()
    }

    /// Write the trace, optionally followed by each request's frame table.
    ///
    /// # Errors
    /// - `Error::Io` if writing fails
    pub fn render<W: Write>(&self, out: &mut W, show_frames: bool) -> Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}", format_outcome(&entry.access))?;
            if show_frames {
                write!(out, "{}", format_frames(entry.access.page, &entry.frames))?;
            }
        }
        Ok(())
    }
}
