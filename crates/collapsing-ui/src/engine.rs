//! Collapse engine: moves the stack in response to scroll deltas.

use crate::config::ExpandPolicy;
use crate::layout::CollapseRange;

/// What one delta did to the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Movement {
    /// How far the stack moved (positive = down, expanding).
    pub consumed: f32,
    /// Part of the delta the stack could not absorb.
    pub leftover: f32,
}

impl Movement {
    /// The whole delta passed through.
    pub fn untouched(delta: f32) -> Self {
        Self {
            consumed: 0.0,
            leftover: delta,
        }
    }

    pub fn moved(&self) -> bool {
        self.consumed != 0.0
    }
}

#[derive(Clone, Debug)]
pub struct CollapseEngine {
    range: Option<CollapseRange>,
    stack_top: f32,
    policy: ExpandPolicy,
}

impl CollapseEngine {
    pub fn new(policy: ExpandPolicy) -> Self {
        Self {
            range: None,
            stack_top: 0.0,
            policy,
        }
    }

    pub fn set_policy(&mut self, policy: ExpandPolicy) {
        self.policy = policy;
    }

    /// Adopt a new range after a relayout.
    ///
    /// The distance already collapsed is carried over and clamped into the new
    /// range, so a header height change does not snap the header back open.
    /// The first range starts fully expanded. Without a range (no header) the
    /// stack rests at `top`.
    pub fn reconfigure(&mut self, top: f32, range: Option<CollapseRange>) {
        let collapsed_by = self.range.map(|r| r.threshold - self.stack_top);
        self.stack_top = match (range, collapsed_by) {
            (Some(new), Some(collapsed_by)) => new.clamp(new.threshold - collapsed_by),
            (Some(new), None) => new.threshold,
            (None, _) => top,
        };
        if self.range != range {
            log::debug!("collapse range {:?} -> {:?}", self.range, range);
        }
        self.range = range;
    }

    pub fn range(&self) -> Option<CollapseRange> {
        self.range
    }

    pub fn stack_top(&self) -> f32 {
        self.stack_top
    }

    /// Apply a scroll delta (`last - current`) reported by a source that now
    /// sits at `source_offset`.
    pub fn apply(&mut self, delta: f32, source_offset: f32) -> Movement {
        let Some(range) = self.range else {
            return Movement::untouched(delta);
        };
        if delta == 0.0 || !delta.is_finite() {
            return Movement::untouched(0.0);
        }

        let target = if delta > 0.0 {
            if self.policy == ExpandPolicy::AtContentTop && source_offset > 0.0 {
                return Movement::untouched(delta);
            }
            (self.stack_top + delta).min(range.threshold)
        } else {
            (self.stack_top + delta).max(range.top)
        };
        // Also pulls a stack left outside the range by a resize back in.
        let target = range.clamp(target);

        let consumed = target - self.stack_top;
        self.stack_top = target;
        log::trace!(
            "collapse: delta {delta} consumed {consumed} stack_top {}",
            self.stack_top
        );
        Movement {
            consumed,
            leftover: delta - consumed,
        }
    }

    /// Space left until the header is fully collapsed.
    pub fn remaining(&self) -> f32 {
        self.range
            .map(|r| (self.stack_top - r.top).max(0.0))
            .unwrap_or(0.0)
    }

    /// 0 when fully expanded, 1 when fully collapsed.
    pub fn progress(&self) -> f32 {
        match self.range {
            Some(r) if r.span() > 0.0 => 1.0 - self.remaining() / r.span(),
            _ => 0.0,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.range.is_some() && self.remaining() <= 0.0
    }

    pub fn expand(&mut self) -> Movement {
        let delta = self.range.map(|r| r.threshold - self.stack_top).unwrap_or(0.0);
        self.jump(delta)
    }

    pub fn collapse(&mut self) -> Movement {
        let delta = self.range.map(|r| r.top - self.stack_top).unwrap_or(0.0);
        self.jump(delta)
    }

    fn jump(&mut self, delta: f32) -> Movement {
        if self.range.is_none() || delta == 0.0 {
            return Movement::default();
        }
        self.stack_top += delta;
        Movement {
            consumed: delta,
            leftover: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CollapseEngine {
        let mut e = CollapseEngine::new(ExpandPolicy::Immediate);
        e.reconfigure(20.0, Some(CollapseRange::new(20.0, 100.0)));
        e
    }

    #[test]
    fn starts_expanded() {
        let e = engine();
        assert_eq!(e.stack_top(), 120.0);
        assert_eq!(e.remaining(), 100.0);
        assert_eq!(e.progress(), 0.0);
    }

    #[test]
    fn collapses_and_clamps_at_safe_top() {
        let mut e = engine();
        let m = e.apply(-30.0, 30.0);
        assert_eq!(m, Movement { consumed: -30.0, leftover: 0.0 });
        assert_eq!(e.stack_top(), 90.0);

        let m = e.apply(-500.0, 530.0);
        assert_eq!(m.consumed, -70.0);
        assert_eq!(m.leftover, -430.0);
        assert_eq!(e.stack_top(), 20.0);
        assert!(e.is_collapsed());
    }

    #[test]
    fn expands_and_clamps_at_threshold() {
        let mut e = engine();
        e.collapse();
        let m = e.apply(250.0, 0.0);
        assert_eq!(m.consumed, 100.0);
        assert_eq!(m.leftover, 150.0);
        assert_eq!(e.stack_top(), 120.0);
    }

    #[test]
    fn at_content_top_policy_waits_for_the_top_edge() {
        let mut e = engine();
        e.set_policy(ExpandPolicy::AtContentTop);
        e.collapse();

        assert!(!e.apply(40.0, 300.0).moved());
        assert_eq!(e.stack_top(), 20.0);

        assert_eq!(e.apply(40.0, 0.0).consumed, 40.0);
        assert_eq!(e.stack_top(), 60.0);
    }

    #[test]
    fn inert_without_range() {
        let mut e = CollapseEngine::new(ExpandPolicy::Immediate);
        e.reconfigure(44.0, None);
        assert_eq!(e.stack_top(), 44.0);
        assert_eq!(e.apply(-10.0, 10.0), Movement::untouched(-10.0));
        assert_eq!(e.stack_top(), 44.0);
        assert!(!e.is_collapsed());
        assert_eq!(e.expand(), Movement::default());
    }

    #[test]
    fn reconfigure_keeps_collapsed_distance() {
        let mut e = engine();
        e.apply(-40.0, 40.0);
        assert_eq!(e.stack_top(), 80.0);

        // header grows by 50: still collapsed by 40
        e.reconfigure(20.0, Some(CollapseRange::new(20.0, 150.0)));
        assert_eq!(e.stack_top(), 130.0);

        // header shrinks below the collapsed distance: fully collapsed
        e.reconfigure(20.0, Some(CollapseRange::new(20.0, 30.0)));
        assert_eq!(e.stack_top(), 20.0);
    }

    #[test]
    fn reconfigure_follows_inset_changes() {
        let mut e = engine();
        e.reconfigure(0.0, Some(CollapseRange::new(0.0, 100.0)));
        assert_eq!(e.stack_top(), 100.0);
    }

    #[test]
    fn progress_tracks_remaining() {
        let mut e = engine();
        e.apply(-25.0, 25.0);
        assert_eq!(e.progress(), 0.25);
        e.collapse();
        assert_eq!(e.progress(), 1.0);
        assert!(e.expand().moved());
        assert_eq!(e.progress(), 0.0);
    }
}
