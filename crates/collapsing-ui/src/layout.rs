//! Layout coordinator.
//!
//! Everything here is a pure function of the slot table, the viewport and the
//! current stack position. The "stack" is the section (when present) followed
//! by the content; the header always hangs directly above it.

use collapsing_core::{EdgeInsets, Rect, Size};

use crate::error::{CollapseError, Result};
use crate::slots::{SlotKey, SlotTable};

/// Container bounds and safe-area insets as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub insets: EdgeInsets,
}

impl Viewport {
    pub fn new(size: Size, insets: EdgeInsets) -> Self {
        Self { size, insets }
    }

    pub fn safe_top(&self) -> f32 {
        self.insets.top
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }
}

/// The band the stack top may move in: `top` is the fully collapsed position
/// (safe-area top), `threshold` the fully expanded one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapseRange {
    pub top: f32,
    pub threshold: f32,
}

impl CollapseRange {
    pub fn new(top: f32, interval: f32) -> Self {
        Self {
            top,
            threshold: top + interval.max(0.0),
        }
    }

    /// The interval space: how far the header can travel.
    pub fn span(&self) -> f32 {
        self.threshold - self.top
    }

    pub fn clamp(&self, y: f32) -> f32 {
        y.clamp(self.top, self.threshold)
    }
}

/// Frames assigned to each configured slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutFrames {
    pub header: Option<Rect>,
    pub section: Option<Rect>,
    pub content: Rect,
}

impl LayoutFrames {
    /// Top of the stack: the section if there is one, otherwise the content.
    pub fn stack_top(&self) -> f32 {
        self.section.map(|r| r.y).unwrap_or(self.content.y)
    }
}

/// Space available for the header to collapse into, or `None` when there is
/// no header to collapse.
pub fn interval_space(slots: &SlotTable) -> Option<f32> {
    slots
        .has_header()
        .then(|| slots.height(SlotKey::Header))
}

pub fn collapse_range(slots: &SlotTable, viewport: &Viewport) -> Option<CollapseRange> {
    interval_space(slots).map(|space| CollapseRange::new(viewport.safe_top(), space))
}

/// Stack position of a fully expanded layout.
pub fn expanded_stack_top(slots: &SlotTable, viewport: &Viewport) -> f32 {
    viewport.safe_top() + slots.height(SlotKey::Header)
}

/// Place every configured slot with the stack starting at `stack_top`.
pub fn place(slots: &SlotTable, viewport: &Viewport, stack_top: f32) -> Result<LayoutFrames> {
    if !slots.is_configured(SlotKey::Content) {
        return Err(CollapseError::MissingContent);
    }

    let width = viewport.size.width;
    let header = slots.get(SlotKey::Header).map(|s| {
        let h = s.height_or_zero();
        Rect::new(0.0, stack_top - h, width, h)
    });

    let mut offset = stack_top;
    let section = slots.get(SlotKey::Section).map(|s| {
        let h = s.height_or_zero();
        let r = Rect::new(0.0, offset, width, h);
        offset += h;
        r
    });

    let content = Rect::new(0.0, offset, width, (viewport.size.height - offset).max(0.0));

    Ok(LayoutFrames {
        header,
        section,
        content,
    })
}
