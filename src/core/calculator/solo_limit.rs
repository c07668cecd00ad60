//! Statutory limit on uninterrupted work: no more than 6 hours without a
//! break. Applies from entry until a lunch departure is recorded.

use crate::models::schedule::Alert;
use crate::utils::time::minutes_to_time;

/// Maximum minutes of consecutive work without a break.
const SOLO_WORK_LIMIT_MIN: i64 = 6 * 60;
/// Warn when less than this many minutes remain before the limit.
const SOLO_WORK_WARN_MIN: i64 = 60;

/// Countdown (or overrun) of the 6h limit at `now_min`.
/// Returns the display text and the alert to append, if any.
pub fn evaluate(entry: i64, now_min: i64) -> (String, Option<Alert>) {
    let to_limit = (entry + SOLO_WORK_LIMIT_MIN) - now_min;

    if to_limit > 0 {
        let text = format!("Lunch due in: {}", minutes_to_time(to_limit));
        let alert = if to_limit < SOLO_WORK_WARN_MIN {
            Some(Alert::warning(format!(
                "Mandatory lunch break due in less than {}.",
                minutes_to_time(to_limit)
            )))
        } else {
            None
        };
        (text, alert)
    } else {
        (
            format!("Over 6h: +{}", minutes_to_time(-to_limit)),
            Some(Alert::danger("More than 6 hours worked without a break.")),
        )
    }
}
