pub mod config;
pub mod export;
pub mod task;
pub mod template;

use routinely_core::clock::{is_clock_time, time_to_minutes};

/// Form-boundary validation for task input.
///
/// The core trusts whatever it is given; required titles, time shapes and
/// start-before-end are enforced here and reported as plain field errors.
pub fn validate_task_input(
    title: &str,
    start: &str,
    end: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if title.trim().is_empty() {
        return Err("title: must not be empty".into());
    }
    if !is_clock_time(start) {
        return Err(format!("start: '{start}' is not an HH:MM time").into());
    }
    if !is_clock_time(end) {
        return Err(format!("end: '{end}' is not an HH:MM time").into());
    }
    match (time_to_minutes(start), time_to_minutes(end)) {
        (Some(s), Some(e)) if s < e => Ok(()),
        _ => Err("end: must be after the start time".into()),
    }
}
