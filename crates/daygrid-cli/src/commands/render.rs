use clap::Subcommand;
use daygrid_core::{items_starting_in_hour, Config, DayLayoutEngine};

use crate::common::read_items;

#[derive(Subcommand)]
pub enum RenderAction {
    /// Print a plain-text day grid, one row per non-empty hour
    Day {
        /// Path to the items file, or - for stdin
        file: String,
    },
}

pub fn run(action: RenderAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RenderAction::Day { file } => {
            let items = read_items(&file)?;
            let config = Config::load_or_default().layout_config();
            let positioned = DayLayoutEngine::with_config(config.clone()).layout_day(&items);

            if positioned.is_empty() {
                println!("(empty day)");
                return Ok(());
            }

            for hour in 0..24 {
                let bucket = items_starting_in_hour(&positioned, hour);
                if bucket.is_empty() {
                    continue;
                }
                println!("{hour:02}:00");
                for block in bucket {
                    let geom = block.geometry(&config);
                    let done = if block.item.completed { "x" } else { " " };
                    println!(
                        "  [{done}] {} {} (lane {}/{}, {:.0}%-{:.0}%)",
                        block.item.start_time,
                        block.item.title,
                        block.column + 1,
                        block.total_columns,
                        geom.left_pct,
                        geom.left_pct + geom.width_pct,
                    );
                }
            }
        }
    }
    Ok(())
}
