//! Overlay bar: the compact title bar that fades in as the header collapses,
//! plus the navigation actions that only make sense once it is showing.

use collapsing_core::{Color, Rect, Signal, ViewId, animation::progress, signal};
use smallvec::SmallVec;

use crate::config::BarStyle;

/// Width reserved for each collapsed bar action, right aligned.
pub const ACTION_WIDTH: f32 = 44.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BarAction {
    pub id: ViewId,
    pub title: String,
}

impl BarAction {
    pub fn new(id: ViewId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Bar opacity for a stack that is `remaining` away from full collapse.
///
/// Zero until `remaining` drops below `fade_distance`, then linear up to 1 at
/// full collapse. A fade distance of 0 makes the bar pop in at full collapse.
pub fn bar_opacity(remaining: f32, fade_distance: f32) -> f32 {
    let remaining = remaining.max(0.0);
    if fade_distance <= 0.0 {
        return if remaining <= 0.0 { 1.0 } else { 0.0 };
    }
    progress(remaining, fade_distance, 0.0)
}

/// Whether collapsed actions belong in the navigation bar.
pub fn actions_shown(remaining: f32, fade_distance: f32) -> bool {
    remaining <= 0.0 || remaining < fade_distance
}

/// Snapshot of the bar, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayBarState {
    pub opacity: f32,
    pub title: String,
    pub background: Color,
    pub title_color: Color,
    pub title_size: f32,
    pub actions: Vec<BarAction>,
}

pub struct OverlayBar {
    title: String,
    style: BarStyle,
    actions: SmallVec<[BarAction; 4]>,
    fade_distance: f32,
    opacity: Signal<f32>,
    actions_shown: Signal<bool>,
}

impl OverlayBar {
    pub fn new(fade_distance: f32) -> Self {
        Self {
            title: String::new(),
            style: BarStyle::default(),
            actions: SmallVec::new(),
            fade_distance: fade_distance.max(0.0),
            opacity: signal(0.0),
            actions_shown: signal(false),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style.sanitized();
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn set_actions(&mut self, actions: impl IntoIterator<Item = BarAction>) {
        self.actions = actions.into_iter().collect();
    }

    pub fn set_fade_distance(&mut self, d: f32) {
        self.fade_distance = d.max(0.0);
    }

    pub fn fade_distance(&self) -> f32 {
        self.fade_distance
    }

    /// Recompute opacity and action visibility. Returns `(opacity_changed,
    /// actions_toggled)`; subscribers of the signals are only notified for
    /// real changes.
    pub fn update(&mut self, remaining: f32) -> (bool, bool) {
        let opacity = bar_opacity(remaining, self.fade_distance);
        let shown = actions_shown(remaining, self.fade_distance);
        let opacity_changed = self.opacity.replace(opacity);
        let toggled = self.actions_shown.replace(shown);
        if toggled {
            log::debug!(
                "overlay bar: collapsed actions {}",
                if shown { "shown" } else { "hidden" }
            );
        }
        (opacity_changed, toggled)
    }

    /// Hide the bar and its actions; used when there is no header to
    /// collapse. Returns the same pair as [`OverlayBar::update`].
    pub fn hide(&mut self) -> (bool, bool) {
        let opacity_changed = self.opacity.replace(0.0);
        let toggled = self.actions_shown.replace(false);
        if toggled {
            log::debug!("overlay bar: collapsed actions hidden");
        }
        (opacity_changed, toggled)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    pub fn opacity_signal(&self) -> Signal<f32> {
        self.opacity.clone()
    }

    pub fn actions_shown_signal(&self) -> Signal<bool> {
        self.actions_shown.clone()
    }

    pub fn visible_actions(&self) -> &[BarAction] {
        if self.actions_shown.get() {
            &self.actions[..]
        } else {
            &[]
        }
    }

    pub fn state(&self) -> OverlayBarState {
        let opacity = self.opacity();
        OverlayBarState {
            opacity,
            title: self.title.clone(),
            background: self.style.background.with_opacity(opacity),
            title_color: self.style.title_color.with_opacity(opacity),
            title_size: self.style.title_size,
            actions: self.visible_actions().to_vec(),
        }
    }

    /// The bar sits in the band just above the safe-area top, where the
    /// navigation bar lives.
    pub fn frame(&self, width: f32, safe_top: f32) -> Rect {
        let h = self.style.height;
        Rect::new(0.0, (safe_top - h).max(0.0), width, h)
    }

    /// Right aligned action frames inside `bar`, in action order from the
    /// trailing edge.
    pub fn action_frames(&self, bar: Rect) -> Vec<(BarAction, Rect)> {
        self.visible_actions()
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let x = bar.max_x() - ACTION_WIDTH * (i as f32 + 1.0);
                (a.clone(), Rect::new(x, bar.y, ACTION_WIDTH, bar.h))
            })
            .collect()
    }
}
