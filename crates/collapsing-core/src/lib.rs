//! # Collapsing core
//!
//! Framework independent building blocks for the collapsing header layout:
//!
//! - `Rect`, `Size`, `EdgeInsets` — the geometry every layout pass speaks.
//! - `Color` and `animation::progress` — enough math to fade a bar in.
//! - `Signal<T>` — observable value for hosts that want to react to changes
//!   instead of polling.
//! - `Scene` / `Presenter` — what a paint pass produces and who consumes it.
//!
//! ```rust
//! use collapsing_core::*;
//!
//! let opacity = signal(0.0f32);
//! opacity.subscribe(|a| log::debug!("bar opacity {a}"));
//! assert!(opacity.replace(0.5));
//! assert!(!opacity.replace(0.5));
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod scene;
pub mod signal;
pub mod tests;

pub use color::*;
pub use geometry::*;
pub use scene::*;
pub use signal::*;
