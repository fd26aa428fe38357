//! Property tests for the day layout engine.
//!
//! Checks the universal layout invariants over arbitrary valid item lists:
//! cardinality preservation, column disjointness of overlapping blocks,
//! isolated-item placement, and exact hour partitioning.

use proptest::prelude::*;

use daygrid_core::{items_starting_in_hour, layout_day, ReminderItem, TimeOfDay};

fn arb_items() -> impl Strategy<Value = Vec<ReminderItem>> {
    prop::collection::vec((0u32..24, 0u32..60), 0..40).prop_map(|times| {
        times
            .into_iter()
            .enumerate()
            .map(|(i, (hour, minute))| {
                ReminderItem::new(
                    format!("item-{i}"),
                    format!("Reminder {i}"),
                    TimeOfDay::new(hour, minute).unwrap(),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn layout_preserves_cardinality(items in arb_items()) {
        let positioned = layout_day(&items);
        prop_assert_eq!(positioned.len(), items.len());

        let mut ids: Vec<&str> = positioned.iter().map(|p| p.item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn overlapping_blocks_never_share_a_column(items in arb_items()) {
        let positioned = layout_day(&items);
        for (i, a) in positioned.iter().enumerate() {
            for b in positioned.iter().skip(i + 1) {
                if a.overlaps(b) {
                    prop_assert_ne!(a.column, b.column);
                }
            }
        }
    }

    #[test]
    fn isolated_blocks_take_the_full_width(items in arb_items()) {
        let positioned = layout_day(&items);
        for (i, a) in positioned.iter().enumerate() {
            let isolated = positioned
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.overlaps(b));
            if isolated {
                prop_assert_eq!(a.column, 0);
                prop_assert_eq!(a.total_columns, 1);
            }
        }
    }

    #[test]
    fn column_count_covers_every_direct_neighbor(items in arb_items()) {
        let positioned = layout_day(&items);
        for (i, a) in positioned.iter().enumerate() {
            prop_assert!(a.total_columns >= a.column + 1);
            for (j, b) in positioned.iter().enumerate() {
                if i != j && a.overlaps(b) {
                    prop_assert!(a.total_columns >= b.column + 1);
                }
            }
        }
    }

    #[test]
    fn hour_buckets_partition_the_output(items in arb_items()) {
        let positioned = layout_day(&items);
        let mut seen: Vec<&str> = Vec::new();
        for hour in 0..24 {
            for p in items_starting_in_hour(&positioned, hour) {
                seen.push(p.item.id.as_str());
            }
        }
        prop_assert_eq!(seen.len(), positioned.len());
        let mut unique = seen.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), positioned.len());
    }
}
