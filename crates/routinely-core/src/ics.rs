//! iCalendar export.
//!
//! Serializes the task list into a VCALENDAR document with one VEVENT per
//! task. Event times are *floating* local times (no zone marker): the tasks
//! carry wall-clock times only, and every event lands on the calendar date
//! current at encode time. Lines are separated by `\n` and are not folded at
//! 75 octets, matching the planner's original export byte for byte.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::task::Task;

const PRODUCT_ID: &str = "-//Routinely//NONSGML v1.0//EN";
const UID_DOMAIN: &str = "routinely.app";

/// Encode `tasks` as an iCalendar document dated today.
///
/// Captures the local date for the events and a single UTC generation
/// timestamp shared by every DTSTAMP in the document.
pub fn generate_ics(tasks: &[Task]) -> String {
    generate_ics_at(tasks, Local::now().date_naive(), Utc::now())
}

/// Encode `tasks` on an explicit calendar date with an explicit generation
/// timestamp. Deterministic; [`generate_ics`] is the clock-capturing wrapper.
pub fn generate_ics_at(tasks: &[Task], date: NaiveDate, generated_at: DateTime<Utc>) -> String {
    let dt_stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\n");
    out.push_str("VERSION:2.0\n");
    out.push_str(&format!("PRODID:{PRODUCT_ID}\n"));
    out.push_str("CALSCALE:GREGORIAN\n");

    for task in tasks {
        let dt_start = format_date_time(date, &task.start_time);
        let dt_end = format_date_time(date, &task.end_time);

        out.push_str("BEGIN:VEVENT\n");
        out.push_str(&format!("UID:{dt_start}-{}@{UID_DOMAIN}\n", task.id));
        out.push_str(&format!("DTSTAMP:{dt_stamp}\n"));
        out.push_str(&format!("DTSTART:{dt_start}\n"));
        out.push_str(&format!("DTEND:{dt_end}\n"));
        out.push_str(&format!("SUMMARY:{}\n", escape_summary(&task.title)));
        if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("DESCRIPTION:{}\n", escape_description(description)));
        }
        out.push_str("END:VEVENT\n");
    }

    out.push_str("END:VCALENDAR");
    out
}

/// `YYYYMMDDTHHMMSS` from a calendar date plus an "HH:MM" wall-clock time.
///
/// The time's digits are spliced in verbatim, so even an out-of-range task
/// time round-trips into the document unaltered.
fn format_date_time(date: NaiveDate, time: &str) -> String {
    let compact: String = time.chars().filter(|c| *c != ':').collect();
    format!("{}{compact}00", date.format("%Y%m%d"))
}

/// Escape `;`, `,`, `\` and `"` for a SUMMARY value.
fn escape_summary(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, ';' | ',' | '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape a DESCRIPTION value.
///
/// Backslash must go first so the backslashes introduced by the newline,
/// semicolon and comma substitutions are not escaped a second time.
fn escape_description(description: &str) -> String {
    description
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(';', "\\;")
        .replace(',', "\\,")
}
