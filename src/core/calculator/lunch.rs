//! Lunch-break handling: projection for the exit window, status of a break
//! in progress or completed, and the lunch-return edit check.

use crate::models::profile::ShiftProfile;
use crate::models::schedule::LunchValidation;
use crate::utils::time::{minutes_to_time, time_to_minutes};

/// Lunch duration resolved for projection purposes.
#[derive(Debug, Clone, Copy)]
pub struct LunchProjection {
    /// Minutes to plug into the exit window: the actual break once both
    /// instants are known, the profile's standard break otherwise.
    pub projected: i64,
    /// Actual duration, only when the break is complete and well-ordered.
    pub actual: Option<i64>,
    /// Return recorded before departure: record invariant broken.
    pub inverted: bool,
}

pub fn project(lunch_out: Option<i64>, lunch_in: Option<i64>, profile: &ShiftProfile) -> LunchProjection {
    let target = profile.lunch_target_min as i64;
    match (lunch_out, lunch_in) {
        (Some(out), Some(back)) => {
            let duration = back - out;
            if duration < 0 {
                LunchProjection {
                    projected: target,
                    actual: None,
                    inverted: true,
                }
            } else {
                LunchProjection {
                    projected: duration,
                    actual: Some(duration),
                    inverted: false,
                }
            }
        }
        _ => LunchProjection {
            projected: target,
            actual: None,
            inverted: false,
        },
    }
}

/// Status of a break still in progress, measured against the live clock.
/// Returns (status text, violation flag).
pub fn in_progress_status(lunch_out: i64, now_min: i64, profile: &ShiftProfile) -> (String, bool) {
    let gone = now_min - lunch_out;
    let left = profile.lunch_target_min as i64 - gone;
    if left < 0 {
        (format!("Exceeded: {}", minutes_to_time(-left)), true)
    } else {
        (format!("Remaining: {}", minutes_to_time(left)), false)
    }
}

/// Status of a completed break. Returns (status text, violation flag,
/// short-lunch alert message when the legal minimum was not honored).
pub fn completed_status(actual: i64, profile: &ShiftProfile) -> (String, bool, Option<String>) {
    if actual > 0 && actual < profile.lunch_min_limit as i64 {
        (
            "Too short".to_string(),
            true,
            Some(format!("Lunch break too short ({}).", minutes_to_time(actual))),
        )
    } else {
        ("OK".to_string(), false, None)
    }
}

/// Check invoked on the lunch-return edit, before any full recomputation.
/// A `valid: false` result must block the edit; `warning: true` means the
/// value may be saved only after explicit confirmation.
pub fn validate_return(lunch_out: &str, lunch_in: &str, profile: &ShiftProfile) -> LunchValidation {
    if lunch_out.trim().is_empty() {
        return LunchValidation::rejected("Enter the lunch departure time first.");
    }

    let out = match time_to_minutes(lunch_out) {
        Some(t) => t,
        None => return LunchValidation::rejected("Invalid time format."),
    };
    let back = match time_to_minutes(lunch_in) {
        Some(t) => t,
        None => return LunchValidation::rejected("Invalid time format."),
    };

    if back < out {
        return LunchValidation::rejected("Return cannot be before departure.");
    }

    let duration = back - out;
    if duration < profile.lunch_min_limit as i64 {
        return LunchValidation::confirm(format!(
            "Break of only {} min is below the {} min legal minimum. Confirm?",
            duration, profile.lunch_min_limit
        ));
    }

    LunchValidation::ok()
}
