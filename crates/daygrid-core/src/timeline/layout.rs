//! Day-view column layout for overlapping reminders.
//!
//! Assigns every reminder in one day a column index and a column count so
//! that reminders whose time blocks overlap render side by side instead of
//! stacked. The computation is a stateless pure function over the full
//! item list; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use super::geometry::LayoutConfig;
use super::item::ReminderItem;

/// A reminder together with its computed day-view placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedItem {
    #[serde(flatten)]
    pub item: ReminderItem,
    /// Block start, minutes since midnight.
    pub start_minutes: i64,
    /// Block end, minutes since midnight (start plus the fixed slot).
    pub end_minutes: i64,
    /// Zero-based lane among concurrently overlapping reminders.
    pub column: usize,
    /// Width divisor for this reminder's slot.
    pub total_columns: usize,
}

impl PositionedItem {
    /// Strict overlap test over half-open `[start, end)` intervals.
    /// Blocks that merely touch do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }

    /// The hour bucket this reminder's block starts in.
    pub fn start_hour(&self) -> u32 {
        (self.start_minutes / 60) as u32
    }
}

/// Layout engine for one day of reminders.
pub struct DayLayoutEngine {
    config: LayoutConfig,
}

impl DayLayoutEngine {
    /// Create an engine with the default layout configuration.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Create an engine with a custom layout configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute placements for one day of reminders.
    ///
    /// Every input item appears exactly once in the output. Output order
    /// follows start time (equal starts keep input order); callers bucket
    /// by hour for rendering via [`items_starting_in_hour`].
    pub fn layout_day(&self, items: &[ReminderItem]) -> Vec<PositionedItem> {
        let slot = self.config.slot_minutes;

        let mut positioned: Vec<PositionedItem> = items
            .iter()
            .map(|item| {
                let start = item.start_time.minutes_from_midnight();
                PositionedItem {
                    item: item.clone(),
                    start_minutes: start,
                    end_minutes: start + slot,
                    column: 0,
                    total_columns: 1,
                }
            })
            .collect();

        // Stable sort keeps input order for equal start times.
        positioned.sort_by_key(|p| p.start_minutes);

        // First-fit column against already-placed overlapping reminders.
        for idx in 0..positioned.len() {
            let mut used: Vec<usize> = Vec::new();
            for prev in &positioned[..idx] {
                if prev.overlaps(&positioned[idx]) {
                    used.push(prev.column);
                }
            }
            let mut column = 0;
            while used.contains(&column) {
                column += 1;
            }
            positioned[idx].column = column;
        }

        // Column count per reminder, from its direct overlap neighbors.
        // A chain A-B-C where A and C do not touch reports the width each
        // reminder sees locally, not the transitive cluster width.
        for idx in 0..positioned.len() {
            let mut widest = positioned[idx].column;
            for (other_idx, other) in positioned.iter().enumerate() {
                if other_idx != idx && other.overlaps(&positioned[idx]) {
                    widest = widest.max(other.column);
                }
            }
            positioned[idx].total_columns = widest + 1;
        }

        positioned
    }
}

impl Default for DayLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to lay out a day with default settings.
pub fn layout_day(items: &[ReminderItem]) -> Vec<PositionedItem> {
    DayLayoutEngine::new().layout_day(items)
}

/// Reminders whose block starts within the given hour.
///
/// Buckets partition a day's layout exactly: every positioned reminder is
/// returned for exactly one of hours 0-23, so a renderer walking all hour
/// rows emits each block once.
pub fn items_starting_in_hour(items: &[PositionedItem], hour: u32) -> Vec<&PositionedItem> {
    let bucket_start = i64::from(hour) * 60;
    let bucket_end = bucket_start + 60;
    items
        .iter()
        .filter(|p| p.start_minutes >= bucket_start && p.start_minutes < bucket_end)
        .collect()
}
