//! Shared helpers for CLI commands.

use std::io::Read;

use daygrid_core::ReminderItem;

/// Read a JSON array of reminder items from a file, or stdin when the
/// path is `-`.
pub fn read_items(path: &str) -> Result<Vec<ReminderItem>, Box<dyn std::error::Error>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let items: Vec<ReminderItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Validate an hour bucket argument.
pub fn check_hour(hour: u32) -> Result<(), Box<dyn std::error::Error>> {
    if hour > 23 {
        return Err(format!("hour must be 0-23, got {hour}").into());
    }
    Ok(())
}
