use collapsing_core::{Color, sanitize_length};

/// When scrolling back toward the top should bring the header back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExpandPolicy {
    /// Expand on any upward scroll.
    #[default]
    Immediate,
    /// Expand only while the scroll source is at (or above) its top edge.
    AtContentTop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollapsingConfig {
    /// Distance before full collapse over which the overlay bar fades in.
    /// Collapsed bar actions appear as soon as this window is entered.
    pub fade_distance: f32,
    pub expand_policy: ExpandPolicy,
}

impl Default for CollapsingConfig {
    fn default() -> Self {
        Self {
            fade_distance: 44.0,
            expand_policy: ExpandPolicy::Immediate,
        }
    }
}

impl CollapsingConfig {
    pub fn fade_distance(mut self, d: f32) -> Self {
        self.fade_distance = d;
        self
    }

    pub fn expand_policy(mut self, p: ExpandPolicy) -> Self {
        self.expand_policy = p;
        self
    }

    pub fn sanitized(self) -> Self {
        Self {
            fade_distance: sanitize_length(self.fade_distance, "fade_distance"),
            ..self
        }
    }
}

/// Look of the overlay bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarStyle {
    pub background: Color,
    pub title_color: Color,
    pub title_size: f32,
    pub height: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title_color: Color::BLACK,
            title_size: 17.0,
            height: 44.0,
        }
    }
}

impl BarStyle {
    pub fn background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    pub fn title_color(mut self, c: Color) -> Self {
        self.title_color = c;
        self
    }

    pub fn title_size(mut self, s: f32) -> Self {
        self.title_size = s;
        self
    }

    pub fn height(mut self, h: f32) -> Self {
        self.height = h;
        self
    }

    pub fn sanitized(self) -> Self {
        Self {
            title_size: sanitize_length(self.title_size, "bar title_size"),
            height: sanitize_length(self.height, "bar height"),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_negative_fade() {
        let cfg = CollapsingConfig::default().fade_distance(-10.0).sanitized();
        assert_eq!(cfg.fade_distance, 0.0);
        assert_eq!(cfg.expand_policy, ExpandPolicy::Immediate);
    }

    #[test]
    fn bar_style_builder() {
        let style = BarStyle::default()
            .background(Color::from_hex("#101820"))
            .height(-1.0)
            .sanitized();
        assert_eq!(style.background, Color(16, 24, 32, 255));
        assert_eq!(style.height, 0.0);
        assert_eq!(style.title_size, 17.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_partial_json() {
        let cfg: CollapsingConfig =
            serde_json::from_str(r#"{ "expand_policy": "at_content_top" }"#).unwrap();
        assert_eq!(cfg.fade_distance, 44.0);
        assert_eq!(cfg.expand_policy, ExpandPolicy::AtContentTop);

        let style: BarStyle = serde_json::from_str(r##"{ "background": "#FF000080" }"##).unwrap();
        assert_eq!(style.background, Color(255, 0, 0, 128));
        assert_eq!(style.height, 44.0);
    }
}
