//! Scroll position for the results and conversation views.
//!
//! The handler layer moves the offset; the TUI layer records the content and
//! viewport heights during render so the offset never runs past the content.

/// Vertical scroll offset bounded by the last rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled away from the view's anchor (top for results, newest
    /// turn for the conversation)
    pub offset: u16,
    /// Total number of rows (set during render)
    pub total_lines: usize,
    /// Visible rows (set during render; 0 until the first render)
    pub visible_lines: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest useful offset, or `None` before the view has been rendered
    pub fn max_offset(&self) -> Option<u16> {
        if self.visible_lines == 0 {
            return None;
        }
        let max = self.total_lines.saturating_sub(self.visible_lines);
        Some(u16::try_from(max).unwrap_or(u16::MAX))
    }

    /// Move away from the anchor by `n` rows
    pub fn scroll_away(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n);
        self.clamp();
    }

    /// Move back towards the anchor by `n` rows
    pub fn scroll_back(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Return to the anchor
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Record the rendered content size and pull the offset back into range
    pub fn set_bounds(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.clamp();
    }

    fn clamp(&mut self) {
        if let Some(max) = self.max_offset() {
            self.offset = self.offset.min(max);
        }
    }
}
