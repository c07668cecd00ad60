//! Time utilities: parsing HH:MM, minutes-since-midnight conversions,
//! formatting minutes, reading the wall clock.

use chrono::{NaiveTime, Timelike};

/// Placeholder used wherever an absent time is rendered.
pub const TIME_PLACEHOLDER: &str = "--:--";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse "HH:MM" into minutes since midnight.
/// Malformed or empty input yields None, never an error: absent and
/// unparseable times are equivalent for the schedule engine.
pub fn time_to_minutes(t: &str) -> Option<i64> {
    parse_time(t).map(|nt| (nt.hour() * 60 + nt.minute()) as i64)
}

/// Same as [`time_to_minutes`] but for an optional field.
pub fn optional_to_minutes(t: Option<&String>) -> Option<i64> {
    t.and_then(|s| time_to_minutes(s))
}

/// Format minutes as zero-padded "HH:MM", with a leading "-" when negative.
/// Values of 24h or more keep growing ("30:20"); shifts never cross midnight,
/// so an out-of-range projection stays visible instead of wrapping.
pub fn minutes_to_time(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// "--:--" for None, formatted time otherwise.
pub fn format_optional_minutes(mins: Option<i64>) -> String {
    match mins {
        Some(m) => minutes_to_time(m),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

/// Minutes since local midnight, right now. The single side-effecting input
/// of the schedule engine; always passed in explicitly so tests and the
/// `--now` flag can substitute a fixed instant.
pub fn current_clock_minutes() -> i64 {
    let now = chrono::Local::now().time();
    (now.hour() * 60 + now.minute()) as i64
}
