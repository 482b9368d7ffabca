//! # Scroll sources
//!
//! A collapsing layout usually sits above more than one scrollable view (one
//! per tab, say), and each reports absolute offsets. `ScrollTracker` turns
//! those into deltas by remembering the last offset it saw per source.
//!
//! `ScrollState` is a plain single-axis scroll model with viewport/content
//! clamping; hosts without their own scroll views (tests, the demo) drive the
//! layout through it.

use std::collections::HashMap;

/// Identity of a scroll source, chosen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrollSourceId(pub u64);

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last: HashMap<ScrollSourceId, f32>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `offset` for `source` and return `last - offset`.
    ///
    /// Positive deltas mean the source moved back toward its top. A source
    /// seen for the first time is measured from 0, the offset of a freshly
    /// laid out scroll view. Non-finite offsets are dropped and yield 0.
    pub fn track(&mut self, source: ScrollSourceId, offset: f32) -> f32 {
        if !offset.is_finite() {
            log::warn!("scroll source {source:?}: ignoring non-finite offset {offset}");
            return 0.0;
        }
        let last = self.last.insert(source, offset).unwrap_or(0.0);
        last - offset
    }

    /// Set the baseline for `source` without producing a delta.
    pub fn reset(&mut self, source: ScrollSourceId, offset: f32) {
        if offset.is_finite() {
            self.last.insert(source, offset);
        }
    }

    pub fn forget(&mut self, source: ScrollSourceId) {
        self.last.remove(&source);
    }

    pub fn last_offset(&self, source: ScrollSourceId) -> Option<f32> {
        self.last.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Single-axis (Y) scroll model.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    scroll_offset: f32,
    viewport_height: f32,
    content_height: f32,
}

impl ScrollState {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_height: viewport_height.max(0.0),
            content_height: content_height.max(0.0),
        }
    }

    pub fn set_viewport_height(&mut self, h: f32) {
        self.viewport_height = h.max(0.0);
        self.clamp_offset();
    }
    pub fn set_content_height(&mut self, h: f32) {
        self.content_height = h.max(0.0);
        self.clamp_offset();
    }
    pub fn set_offset(&mut self, off: f32) {
        self.scroll_offset = off.clamp(0.0, self.max_offset());
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset
    }

    /// Consume dy (pixels), clamp to bounds, return leftover.
    pub fn scroll_immediate(&mut self, dy: f32) -> f32 {
        let before = self.scroll_offset;
        let new_off = (before + dy).clamp(0.0, self.max_offset());
        self.scroll_offset = new_off;
        dy - (new_off - before)
    }
}
