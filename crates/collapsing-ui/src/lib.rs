//! Collapsing header layout.
//!
//! A screen with a tall header above a scrollable content area. Scrolling
//! the content slides the header up and away until the content (and the
//! optional section above it) is pinned under the safe-area top, while a
//! compact overlay bar fades in where the navigation bar lives.
//!
//! Nothing here touches a real view: slots hold opaque `ViewId`s and the
//! container hands back frames and a `Scene` for the host to apply.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod paint;
pub mod scroll;
pub mod slots;

pub use config::*;
pub use controller::*;
pub use engine::{CollapseEngine, Movement};
pub use error::CollapseError;
pub use layout::{CollapseRange, LayoutFrames, Viewport};
pub use overlay::{BarAction, OverlayBar, OverlayBarState};
pub use scroll::{ScrollSourceId, ScrollState, ScrollTracker};
pub use slots::{Slot, SlotKey, SlotTable};
