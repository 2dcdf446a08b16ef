/// Render sinks.
///
/// A RenderSink receives one FrameSnapshot per frame after the updater
/// has run. How it draws (GL display lists, a GPU buffer, text) is up to
/// the implementation.

use crate::error::Result;
use super::snapshot::FrameSnapshot;

/// Consumer of per-frame scene state.
pub trait RenderSink {
    /// Present one frame.
    fn submit(&mut self, frame: &FrameSnapshot) -> Result<()>;
}

/// Sink that keeps every submitted frame in memory.
///
/// Useful for tests and for offline tools that post-process a run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<FrameSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, frame: &FrameSnapshot) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
