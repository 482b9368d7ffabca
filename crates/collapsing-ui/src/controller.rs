//! # CollapsingLayout
//!
//! The container a screen builds on. It owns the slot table, the scroll
//! tracker, the collapse engine and the overlay bar, and closes the loop
//! between them:
//!
//! ```text
//! on_scroll(source, offset)
//!   -> tracker delta -> engine moves the stack
//!   -> frames re-placed -> overlay opacity / actions updated
//! ```
//!
//! Hosts call `set_viewport` whenever bounds or safe-area insets change and
//! `layout` on their layout pass, then read `frames()` / `bar_state()` or
//! `paint()` a `Scene`.
//!
//! ```rust
//! use collapsing_core::{EdgeInsets, Size};
//! use collapsing_ui::*;
//!
//! let mut screen = CollapsingLayout::new(CollapsingConfig::default());
//! screen.configure_header(Some(1), 180.0);
//! screen.configure_content(Some(2));
//! screen.set_viewport(Size::new(375.0, 812.0), EdgeInsets::top(88.0));
//! screen.layout();
//!
//! let source = ScrollSourceId(2);
//! screen.on_scroll(source, 200.0);
//! assert!(screen.is_collapsed());
//! assert_eq!(screen.bar_state().opacity, 1.0);
//! ```

use bitflags::bitflags;
use collapsing_core::{EdgeInsets, Signal, Size, ViewId};

use crate::config::{BarStyle, CollapsingConfig};
use crate::engine::{CollapseEngine, Movement};
use crate::error::{CollapseError, Result};
use crate::layout::{self, LayoutFrames, Viewport};
use crate::overlay::{BarAction, OverlayBar, OverlayBarState};
use crate::scroll::{ScrollSourceId, ScrollTracker};
use crate::slots::{Slot, SlotKey, SlotTable};

bitflags! {
    /// What a call changed, so hosts can skip redundant work.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changes: u8 {
        const FRAMES = 1 << 0;
        const OPACITY = 1 << 1;
        const ACTIONS = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollResponse {
    pub delta: f32,
    pub movement: Movement,
    pub changes: Changes,
}

pub struct CollapsingLayout {
    slots: SlotTable,
    viewport: Option<Viewport>,
    config: CollapsingConfig,
    engine: CollapseEngine,
    tracker: ScrollTracker,
    bar: OverlayBar,
    frames: Option<LayoutFrames>,
}

impl Default for CollapsingLayout {
    fn default() -> Self {
        Self::new(CollapsingConfig::default())
    }
}

impl CollapsingLayout {
    pub fn new(config: CollapsingConfig) -> Self {
        let config = config.sanitized();
        Self {
            slots: SlotTable::new(),
            viewport: None,
            engine: CollapseEngine::new(config.expand_policy),
            tracker: ScrollTracker::new(),
            bar: OverlayBar::new(config.fade_distance),
            frames: None,
            config,
        }
    }

    pub fn config(&self) -> &CollapsingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CollapsingConfig) -> Changes {
        self.config = config.sanitized();
        self.engine.set_policy(self.config.expand_policy);
        self.bar.set_fade_distance(self.config.fade_distance);
        self.refresh_bar()
    }

    // ---- slot configuration -------------------------------------------------

    /// Install (or with `None`, remove) the header. Returns the previous
    /// header slot so the host can detach its view.
    pub fn configure_header(&mut self, view: Option<ViewId>, height: f32) -> Option<Slot> {
        self.configure(SlotKey::Header, view, Some(height))
    }

    pub fn configure_section(&mut self, view: Option<ViewId>, height: f32) -> Option<Slot> {
        self.configure(SlotKey::Section, view, Some(height))
    }

    pub fn configure_content(&mut self, view: Option<ViewId>) -> Option<Slot> {
        self.configure(SlotKey::Content, view, None)
    }

    fn configure(&mut self, key: SlotKey, view: Option<ViewId>, height: Option<f32>) -> Option<Slot> {
        let previous = self.slots.configure(key, view, height);
        self.relayout_if_ready();
        previous
    }

    pub fn slot(&self, key: SlotKey) -> Option<&Slot> {
        self.slots.get(key)
    }

    pub fn has_header(&self) -> bool {
        self.slots.has_header()
    }

    pub fn header_height(&self) -> f32 {
        self.slots.height(SlotKey::Header)
    }

    /// Resize the header. Ignored without a header or when unchanged.
    pub fn set_header_height(&mut self, height: f32) -> Changes {
        if !self.slots.set_height(SlotKey::Header, height) {
            return Changes::empty();
        }
        self.relayout_if_ready()
    }

    /// Distance the header can collapse by, `None` without a header.
    pub fn interval_space(&self) -> Option<f32> {
        layout::interval_space(&self.slots)
    }

    // ---- overlay bar --------------------------------------------------------

    pub fn configure_bar_title(&mut self, title: impl Into<String>) {
        self.bar.set_title(title);
    }

    pub fn configure_bar_style(&mut self, style: BarStyle) {
        self.bar.set_style(style);
    }

    /// Actions swapped into the navigation bar while collapsed.
    pub fn configure_collapsed_actions(&mut self, actions: impl IntoIterator<Item = BarAction>) {
        self.bar.set_actions(actions);
    }

    pub fn bar(&self) -> &OverlayBar {
        &self.bar
    }

    pub fn bar_state(&self) -> OverlayBarState {
        self.bar.state()
    }

    pub fn opacity_signal(&self) -> Signal<f32> {
        self.bar.opacity_signal()
    }

    pub fn actions_shown_signal(&self) -> Signal<bool> {
        self.bar.actions_shown_signal()
    }

    // ---- layout -------------------------------------------------------------

    pub fn set_viewport(&mut self, size: Size, insets: EdgeInsets) -> Changes {
        let size = Size::new(
            collapsing_core::sanitize_length(size.width, "viewport width"),
            collapsing_core::sanitize_length(size.height, "viewport height"),
        );
        let insets = EdgeInsets {
            top: collapsing_core::sanitize_length(insets.top, "safe-area top"),
            ..insets
        };
        let viewport = Viewport::new(size, insets);
        if self.viewport == Some(viewport) {
            return Changes::empty();
        }
        self.viewport = Some(viewport);
        self.relayout_if_ready()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Layout pass.
    ///
    /// # Panics
    ///
    /// Panics when no content view has been configured. That is a programming
    /// error in the screen, not a runtime condition.
    pub fn layout(&mut self) -> Changes {
        match self.try_layout() {
            Ok(changes) => changes,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible layout pass. Fails without a content view; without a viewport
    /// there is nothing to place yet and this returns no changes.
    pub fn try_layout(&mut self) -> Result<Changes> {
        if !self.slots.is_configured(SlotKey::Content) {
            self.frames = None;
            return Err(CollapseError::MissingContent);
        }
        let Some(viewport) = self.viewport else {
            return Ok(Changes::empty());
        };

        let range = layout::collapse_range(&self.slots, &viewport);
        self.engine.reconfigure(viewport.safe_top(), range);
        let mut changes = self.place(&viewport)?;
        changes |= self.refresh_bar();
        Ok(changes)
    }

    // Configuration calls relayout only once everything a layout needs is
    // there; the explicit layout pass is the one that insists on content.
    fn relayout_if_ready(&mut self) -> Changes {
        if !self.slots.is_configured(SlotKey::Content) {
            self.frames = None;
            return Changes::empty();
        }
        self.try_layout().unwrap_or_default()
    }

    fn place(&mut self, viewport: &Viewport) -> Result<Changes> {
        let frames = layout::place(&self.slots, viewport, self.engine.stack_top())?;
        if self.frames == Some(frames) {
            return Ok(Changes::empty());
        }
        log::debug!("relayout: stack_top {}", frames.stack_top());
        self.frames = Some(frames);
        Ok(Changes::FRAMES)
    }

    // The bar stands in for a collapsed header, so it stays hidden when
    // there is none.
    fn refresh_bar(&mut self) -> Changes {
        let (opacity, actions) = match self.engine.range() {
            Some(_) => self.bar.update(self.engine.remaining()),
            None => self.bar.hide(),
        };
        let mut changes = Changes::empty();
        changes.set(Changes::OPACITY, opacity);
        changes.set(Changes::ACTIONS, actions);
        changes
    }

    pub fn frames(&self) -> Option<&LayoutFrames> {
        self.frames.as_ref()
    }

    // ---- scrolling ----------------------------------------------------------

    /// Forward a scroll event from `source`, now at vertical `offset`.
    pub fn on_scroll(&mut self, source: ScrollSourceId, offset: f32) -> ScrollResponse {
        let delta = self.tracker.track(source, offset);
        if !self.can_move() {
            return ScrollResponse {
                delta,
                movement: Movement::untouched(delta),
                changes: Changes::empty(),
            };
        }
        let was_collapsed = self.engine.is_collapsed();
        let movement = self.engine.apply(delta, offset);
        let changes = if movement.moved() {
            self.after_move(was_collapsed)
        } else {
            Changes::empty()
        };
        ScrollResponse {
            delta,
            movement,
            changes,
        }
    }

    /// Re-baseline `source`, e.g. after the host adjusted its offset itself.
    pub fn reset_scroll_source(&mut self, source: ScrollSourceId, offset: f32) {
        self.tracker.reset(source, offset);
    }

    pub fn forget_scroll_source(&mut self, source: ScrollSourceId) {
        self.tracker.forget(source);
    }

    // A header to collapse and content to place it against.
    fn can_move(&self) -> bool {
        self.slots.has_header() && self.slots.is_configured(SlotKey::Content)
    }

    pub fn expand(&mut self) -> Changes {
        if !self.can_move() {
            return Changes::empty();
        }
        let was_collapsed = self.engine.is_collapsed();
        let m = self.engine.expand();
        if m.moved() {
            self.after_move(was_collapsed)
        } else {
            Changes::empty()
        }
    }

    pub fn collapse(&mut self) -> Changes {
        if !self.can_move() {
            return Changes::empty();
        }
        let was_collapsed = self.engine.is_collapsed();
        let m = self.engine.collapse();
        if m.moved() {
            self.after_move(was_collapsed)
        } else {
            Changes::empty()
        }
    }

    fn after_move(&mut self, was_collapsed: bool) -> Changes {
        let mut changes = match self.viewport {
            Some(viewport) => self.place(&viewport).unwrap_or_default(),
            None => Changes::empty(),
        };
        changes |= self.refresh_bar();
        let collapsed = self.engine.is_collapsed();
        if collapsed != was_collapsed {
            log::debug!("header {}", if collapsed { "collapsed" } else { "expanded" });
        }
        changes
    }

    /// Current stack top (section, else content).
    pub fn stack_top(&self) -> f32 {
        self.engine.stack_top()
    }

    /// 0 when fully expanded, 1 when fully collapsed.
    pub fn progress(&self) -> f32 {
        self.engine.progress()
    }

    pub fn is_collapsed(&self) -> bool {
        self.engine.is_collapsed()
    }
}
