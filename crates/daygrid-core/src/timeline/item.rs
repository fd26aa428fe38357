//! Reminder item types.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// A single reminder scheduled within one day.
///
/// Only `id` and `start_time` matter to the layout engine. The display
/// fields (`title`, `color`, `completed`, and any extra metadata) are
/// opaque and pass through layout unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderItem {
    pub id: String,
    pub title: String,
    pub start_time: TimeOfDay,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(flatten)]
    pub metadata: serde_json::Value,
}

impl ReminderItem {
    /// Create a new reminder item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, start_time: TimeOfDay) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time,
            color: None,
            completed: false,
            metadata: serde_json::json!({}),
        }
    }

    /// Set display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark as completed
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serialization_roundtrip() {
        let item = ReminderItem::new("rem-1", "Pay invoices", "09:30".parse().unwrap())
            .with_color("#ff7043")
            .with_completed(true);

        let json = serde_json::to_string(&item).unwrap();
        let decoded: ReminderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, "rem-1");
        assert_eq!(decoded.start_time, item.start_time);
        assert_eq!(decoded.color.as_deref(), Some("#ff7043"));
        assert!(decoded.completed);
    }

    #[test]
    fn unknown_fields_survive_as_metadata() {
        let json = r#"{
            "id": "rem-2",
            "title": "Site visit",
            "start_time": "14:00",
            "location": "HQ",
            "priority": 2
        }"#;
        let item: ReminderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.metadata["location"], "HQ");
        assert_eq!(item.metadata["priority"], 2);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["location"], "HQ");
    }
}
