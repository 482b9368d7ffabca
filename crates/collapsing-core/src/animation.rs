//! Scroll-driven progress.
//!
//! Collapsing is driven directly by scroll position, so there is no clock or
//! easing here: a value is always a linear function of how far the header has
//! travelled.

/// Where `value` sits between `start` and `end`, clamped to `[0, 1]`.
///
/// An empty range yields 1 once `value` reaches `end` and 0 before it, which
/// turns a zero-length fade into a step.
pub fn progress(value: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        let reached = if end >= start { value >= end } else { value <= end };
        return if reached { 1.0 } else { 0.0 };
    }
    ((value - start) / span).clamp(0.0, 1.0)
}
