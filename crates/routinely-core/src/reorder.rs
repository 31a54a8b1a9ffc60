//! Drag-and-drop reordering with contiguous time recomputation.
//!
//! A reorder never edits times directly: it captures every task's current
//! duration, rebuilds the list in the dropped order, then repacks start/end
//! times back-to-back from the day's start time. Order is the single source
//! of truth; chronology is re-derived from it.

use crate::clock::{minutes_to_time, time_to_minutes};
use crate::task::Task;

/// Substitute duration for tasks whose stored times are missing, unparseable,
/// or not strictly increasing.
pub const FALLBACK_DURATION_MINUTES: i32 = 60;

/// Reorder `tasks` by moving `dragged_id` to just before `target_id`
/// (or to the end of the day when `target_id` is `None`), then recompute
/// all start/end times contiguously from `day_start`.
///
/// Degrades instead of failing:
/// - unknown `dragged_id` returns the input unchanged,
/// - a stale `target_id` falls back to appending at the end,
/// - corrupt durations become [`FALLBACK_DURATION_MINUTES`].
///
/// Ids, titles, descriptions and colors pass through untouched.
pub fn reorder(
    tasks: &[Task],
    dragged_id: &str,
    target_id: Option<&str>,
    day_start: &str,
) -> Vec<Task> {
    let Some(dragged_index) = tasks.iter().position(|t| t.id == dragged_id) else {
        return tasks.to_vec();
    };

    // Pair every task with its current duration before any repacking;
    // the pairing is scratch state and never leaves this function.
    let with_durations: Vec<(Task, i32)> = tasks
        .iter()
        .map(|t| (t.clone(), effective_duration(t)))
        .collect();

    let dragged = with_durations[dragged_index].clone();

    let mut working: Vec<(Task, i32)> = with_durations
        .into_iter()
        .filter(|(t, _)| t.id != dragged_id)
        .collect();

    match target_id.and_then(|id| working.iter().position(|(t, _)| t.id == id)) {
        Some(index) => working.insert(index, dragged),
        // No target, or the target vanished underneath the drag: end of day.
        None => working.push(dragged),
    }

    repack(working, day_start)
}

/// Walk the ordered pairs and assign contiguous times from `day_start`.
fn repack(ordered: Vec<(Task, i32)>, day_start: &str) -> Vec<Task> {
    // A malformed day start falls back to 09:00.
    let mut cursor = time_to_minutes(day_start).unwrap_or(540);
    ordered
        .into_iter()
        .map(|(mut task, duration)| {
            task.start_time = minutes_to_time(cursor);
            task.end_time = minutes_to_time(cursor + duration);
            cursor += duration;
            task
        })
        .collect()
}

fn effective_duration(task: &Task) -> i32 {
    match task.duration_minutes() {
        Some(d) if d > 0 => d,
        _ => FALLBACK_DURATION_MINUTES,
    }
}
