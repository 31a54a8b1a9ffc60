//! Routine templates and instantiation.
//!
//! A template is a fixed, ordered list of (title, duration, description)
//! seeds. Instantiating one replaces the whole routine with a fresh,
//! contiguous task list packed from a chosen start time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::{minutes_to_time, time_to_minutes};
use crate::task::{palette_color, Task};

/// One seed entry in a routine template. Static data, not user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub title: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl TemplateItem {
    fn new(title: &str, duration_minutes: i32, description: &str) -> Self {
        Self {
            title: title.to_string(),
            duration_minutes,
            description: Some(description.to_string()),
        }
    }
}

/// The built-in productivity day: six blocks, 345 minutes end to end.
pub fn productivity_template() -> Vec<TemplateItem> {
    vec![
        TemplateItem::new(
            "Morning Deep Work Block",
            120,
            "Focus on most important tasks.",
        ),
        TemplateItem::new("Review & Quick Tasks", 45, "Emails, quick to-dos."),
        TemplateItem::new("Lunch Break", 60, "Rest and recharge."),
        TemplateItem::new(
            "Meetings & Collaboration",
            60,
            "Scheduled calls or team work.",
        ),
        TemplateItem::new(
            "Afternoon Work Session",
            30,
            "Continue with tasks or projects.",
        ),
        TemplateItem::new("Plan Next Day", 30, "Review progress, plan for tomorrow."),
    ]
}

/// Expand a template into a contiguous task list starting at `start_time`.
///
/// Each item gets a fresh UUID and the palette color for its position.
/// A malformed `start_time` falls back to 09:00, in keeping with the
/// planner's degrade-don't-fail contract.
pub fn instantiate(items: &[TemplateItem], start_time: &str) -> Vec<Task> {
    let mut cursor = time_to_minutes(start_time).unwrap_or(540);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let start = minutes_to_time(cursor);
            let end = minutes_to_time(cursor + item.duration_minutes);
            cursor += item.duration_minutes;
            Task {
                id: Uuid::new_v4().to_string(),
                title: item.title.clone(),
                start_time: start,
                end_time: end,
                description: item.description.clone(),
                color: palette_color(index).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_productivity_template_total() {
        let total: i32 = productivity_template()
            .iter()
            .map(|item| item.duration_minutes)
            .sum();
        assert_eq!(total, 345);
    }

    #[test]
    fn test_instantiate_is_contiguous() {
        let tasks = instantiate(&productivity_template(), "09:00");

        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[0].start_time, "09:00");
        for pair in tasks.windows(2) {
            assert_eq!(pair[0].end_time, pair[1].start_time);
        }
        assert_eq!(tasks.last().unwrap().end_time, "14:45");
    }

    #[test]
    fn test_instantiate_assigns_ids_and_colors() {
        let tasks = instantiate(&productivity_template(), "09:00");

        assert_eq!(tasks[0].color, "red");
        assert_eq!(tasks[1].color, "orange");
        assert_eq!(tasks[5].color, "emerald");

        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_instantiate_carries_seed_fields() {
        let items = vec![TemplateItem::new("Warmup", 15, "Stretch.")];
        let tasks = instantiate(&items, "06:30");

        assert_eq!(tasks[0].title, "Warmup");
        assert_eq!(tasks[0].description.as_deref(), Some("Stretch."));
        assert_eq!(tasks[0].start_time, "06:30");
        assert_eq!(tasks[0].end_time, "06:45");
    }

    #[test]
    fn test_instantiate_bad_start_falls_back() {
        let items = vec![TemplateItem::new("Warmup", 30, "Stretch.")];
        let tasks = instantiate(&items, "later");
        assert_eq!(tasks[0].start_time, "09:00");
        assert_eq!(tasks[0].end_time, "09:30");
    }

    #[test]
    fn test_instantiate_empty_template() {
        assert!(instantiate(&[], "09:00").is_empty());
    }
}
