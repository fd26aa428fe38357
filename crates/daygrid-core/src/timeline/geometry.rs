//! Pixel geometry for rendering positioned reminders.
//!
//! Translates a [`PositionedItem`]'s column placement into the absolute
//! offsets a renderer needs inside a fixed-height-per-hour day grid.

use serde::{Deserialize, Serialize};

use super::layout::PositionedItem;

/// Rendering policy for the day grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Height of one hour row in pixels.
    pub hour_height: f64,
    /// Visual duration of a reminder block in minutes.
    pub slot_minutes: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            slot_minutes: 60,
        }
    }
}

/// Absolute placement of one reminder block within its hour row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    /// Offset in pixels from the top of the hour row.
    pub top_offset: f64,
    /// Block height in pixels, floored at one hour row.
    pub height: f64,
    /// Width as a percentage of the day column.
    pub width_pct: f64,
    /// Left edge as a percentage of the day column.
    pub left_pct: f64,
}

impl BlockGeometry {
    /// Geometry for a reminder rendered inside the given hour bucket.
    pub fn for_item_in_hour(item: &PositionedItem, hour: u32, config: &LayoutConfig) -> Self {
        let hour_start = f64::from(hour) * 60.0;
        let start = item.start_minutes as f64;
        let end = item.end_minutes as f64;

        let top_offset = (start - hour_start) / 60.0 * config.hour_height;
        // Floor at one hour row so short future slot durations stay legible.
        let height = ((end - start) / 60.0 * config.hour_height).max(config.hour_height);
        let width_pct = 100.0 / item.total_columns as f64;
        let left_pct = item.column as f64 / item.total_columns as f64 * 100.0;

        Self {
            top_offset,
            height,
            width_pct,
            left_pct,
        }
    }
}

impl PositionedItem {
    /// Geometry for this reminder inside its own start-hour bucket.
    pub fn geometry(&self, config: &LayoutConfig) -> BlockGeometry {
        BlockGeometry::for_item_in_hour(self, self.start_hour(), config)
    }
}
