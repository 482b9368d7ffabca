#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }
}

/// Safe-area insets reported by the host (status bar, navigation bar, home
/// indicator). Only `top` takes part in collapsing; the rest are carried so a
/// host can hand over its insets verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn top(top: f32) -> Self {
        Self {
            top,
            ..Self::ZERO
        }
    }
}

/// Clamp a host supplied length to a finite, non-negative value.
///
/// `what` names the value in the warning emitted when clamping kicks in.
pub fn sanitize_length(value: f32, what: &str) -> f32 {
    if !value.is_finite() {
        log::warn!("{what}: non-finite value {value}; using 0");
        0.0
    } else if value < 0.0 {
        log::warn!("{what}: negative value {value}; clamping to 0");
        0.0
    } else {
        value
    }
}
