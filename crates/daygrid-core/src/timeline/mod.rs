//! Day-view timeline layout.
//!
//! This module provides:
//! - The reminder item model with an opaque display payload
//! - Conflict-free column packing of overlapping reminders
//! - Hour bucketing and pixel geometry for the rendering layer

mod geometry;
mod item;
mod layout;

pub use geometry::{BlockGeometry, LayoutConfig};
pub use item::ReminderItem;
pub use layout::{items_starting_in_hour, layout_day, DayLayoutEngine, PositionedItem};
