//! Task model and color palette.

use serde::{Deserialize, Serialize};

use crate::clock::time_to_minutes;

/// Fixed color palette, assigned round-robin as tasks are created.
pub const TASK_COLORS: [&str; 16] = [
    "red", "orange", "amber", "lime", "green", "emerald", "teal", "cyan", "sky", "blue", "indigo",
    "violet", "purple", "fuchsia", "pink", "rose",
];

/// Color used when a palette lookup is out of range.
pub const DEFAULT_TASK_COLOR: &str = "slate";

/// Palette color for the nth created task (wraps around).
pub fn palette_color(index: usize) -> &'static str {
    TASK_COLORS
        .get(index % TASK_COLORS.len())
        .copied()
        .unwrap_or(DEFAULT_TASK_COLOR)
}

/// A single time-blocked task in the day's routine.
///
/// Serialized with camelCase keys (`startTime`/`endTime`) so the stored
/// JSON keeps the interchange shape the store validates on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub start_time: String, // HH:MM
    pub end_time: String, // HH:MM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
}

impl Task {
    /// Duration in minutes, or `None` when either time fails to parse.
    pub fn duration_minutes(&self) -> Option<i32> {
        let start = time_to_minutes(&self.start_time)?;
        let end = time_to_minutes(&self.end_time)?;
        Some(end - start)
    }
}

/// Form-level input for creating or editing a task.
///
/// Id and color are assigned by the state container, never by the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: Option<String>,
}
