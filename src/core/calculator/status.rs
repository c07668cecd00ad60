//! Work status classification and notification trigger thresholds.

use crate::models::profile::ShiftProfile;
use crate::models::schedule::{NotificationTrigger, WorkStatus};
use crate::utils::time::minutes_to_time;

/// Minutes-to-limit at or below which the 10-minute warning fires.
const WARN_WINDOW_MIN: i64 = 10;
/// Minutes-to-limit at or below which the critical warning fires.
const CRITICAL_WINDOW_MIN: i64 = 1;

#[derive(Debug, Clone)]
pub struct WorkOutcome {
    pub status: WorkStatus,
    pub text: String,
    /// The legal ceiling was crossed; the caller appends the danger alert.
    pub exceeded: bool,
}

pub fn classify(worked: i64, profile: &ShiftProfile) -> WorkOutcome {
    let remaining = profile.work_target_min as i64 - worked;

    if remaining > 0 {
        return WorkOutcome {
            status: WorkStatus::Normal,
            text: format!("Remaining: {}", minutes_to_time(remaining)),
            exceeded: false,
        };
    }

    let extra = -remaining;
    if extra <= profile.max_extra_min as i64 {
        WorkOutcome {
            status: WorkStatus::Extra,
            text: format!("Extra: +{}", minutes_to_time(extra)),
            exceeded: false,
        }
    } else {
        WorkOutcome {
            status: WorkStatus::Exceeded,
            text: format!("Exceeded: +{}", minutes_to_time(extra)),
            exceeded: true,
        }
    }
}

/// Distance to the hard daily limit and the trigger it implies.
/// Exactly 10 minutes out fires the 10-minute warning; 1 minute or less
/// (including past the limit) fires the critical one. The same trigger
/// re-fires on every tick while in range: de-duplication is the caller's
/// job (see [`crate::core::notify`]).
pub fn trigger(worked: i64, profile: &ShiftProfile) -> (i64, Option<NotificationTrigger>) {
    let minutes_to_limit = profile.hard_limit_min() - worked;

    let trigger = if minutes_to_limit <= CRITICAL_WINDOW_MIN {
        Some(NotificationTrigger::WarningCritical)
    } else if minutes_to_limit <= WARN_WINDOW_MIN {
        Some(NotificationTrigger::Warning10Min)
    } else {
        None
    };

    (minutes_to_limit, trigger)
}
