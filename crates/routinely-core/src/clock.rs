//! Wall-clock time arithmetic on "HH:MM" strings.
//!
//! Schedule times are floating wall-clock values with no date or zone
//! attached, so they stay plain strings end to end and all arithmetic
//! happens on minute offsets from midnight.

/// Parse an "HH:MM" string into minutes from midnight.
///
/// Returns `None` for anything that is not two colon-separated integers.
/// Callers substitute their own fallback instead of treating this as an
/// error; schedule computations never fail on bad input.
pub fn time_to_minutes(time: &str) -> Option<i32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Convert minutes from midnight back to a zero-padded "HH:MM" string.
///
/// Does not wrap at 24 hours (1500 minutes renders as "25:00"); callers
/// are expected to keep values inside a single day.
pub fn minutes_to_time(total_minutes: i32) -> String {
    let hours = total_minutes.div_euclid(60);
    let minutes = total_minutes.rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}

/// Add a duration in minutes to an "HH:MM" time.
pub fn add_minutes_to_time(time: &str, duration_minutes: i32) -> Option<String> {
    let start = time_to_minutes(time)?;
    Some(minutes_to_time(start + duration_minutes))
}

/// Check that a string has the exact `\d\d:\d\d` shape.
///
/// Used when validating persisted task records at load time.
pub fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}
