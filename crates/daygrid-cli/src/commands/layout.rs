use clap::Subcommand;
use daygrid_core::{items_starting_in_hour, Config, DayLayoutEngine, ReminderItem, TimeOfDay};

use crate::common::{check_hour, read_items};

#[derive(Subcommand)]
pub enum LayoutAction {
    /// Compute the day layout for a JSON array of reminder items
    Day {
        /// Path to the items file, or - for stdin
        file: String,
    },
    /// Show positioned items whose block starts within one hour
    Hour {
        /// Path to the items file, or - for stdin
        file: String,
        /// Hour bucket (0-23)
        hour: u32,
    },
    /// Generate a sample day of reminder items
    Sample {
        /// Number of items to generate
        #[arg(long, default_value_t = 6)]
        count: usize,
    },
}

pub fn run(action: LayoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LayoutAction::Day { file } => {
            let items = read_items(&file)?;
            let positioned = engine().layout_day(&items);
            println!("{}", serde_json::to_string_pretty(&positioned)?);
        }
        LayoutAction::Hour { file, hour } => {
            check_hour(hour)?;
            let items = read_items(&file)?;
            let positioned = engine().layout_day(&items);
            let bucket = items_starting_in_hour(&positioned, hour);
            println!("{}", serde_json::to_string_pretty(&bucket)?);
        }
        LayoutAction::Sample { count } => {
            let items = sample_items(count);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}

fn engine() -> DayLayoutEngine {
    DayLayoutEngine::with_config(Config::load_or_default().layout_config())
}

/// Deterministic spread over the working day, dense enough that some
/// blocks collide and exercise column packing.
fn sample_items(count: usize) -> Vec<ReminderItem> {
    (0..count)
        .map(|i| {
            let minutes = (540 + i as i64 * 40).min(23 * 60 + 59);
            let time = TimeOfDay::new((minutes / 60) as u32, (minutes % 60) as u32)
                .expect("sample times stay within one day");
            ReminderItem::new(
                uuid::Uuid::new_v4().to_string(),
                format!("Sample reminder {}", i + 1),
                time,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_are_valid_and_unique() {
        let items = sample_items(6);
        assert_eq!(items.len(), 6);
        let mut ids: Vec<&String> = items.iter().map(|i| &i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn sample_times_never_leave_the_day() {
        let items = sample_items(50);
        for item in items {
            assert!(item.start_time.minutes_from_midnight() < 24 * 60);
        }
    }
}
