//! The schedule engine: a pure transform from one day's recorded instants
//! and a shift profile to the full picture of that day at a given moment.
//!
//! No input is mutated and no error is returned: malformed or missing
//! "HH:MM" strings degrade to absent and short-circuit whatever depends on
//! them. The only temporal input, `now_min`, is injected by the caller
//! (usually [`crate::utils::time::current_clock_minutes`]).

use crate::core::calculator::{exit_window, lunch, solo_limit, status, worked};
use crate::models::profile::ShiftProfile;
use crate::models::record::DailyRecord;
use crate::models::schedule::{Alert, LunchValidation, Schedule};
use crate::utils::time::{minutes_to_time, optional_to_minutes};

pub struct Engine;

impl Engine {
    /// Evaluate `record` against `profile` at `now_min` (minutes since
    /// local midnight). Deterministic: identical arguments produce an
    /// identical [`Schedule`].
    ///
    /// Alert order is fixed and relied upon by callers: 6h-limit alerts,
    /// then the inverted-lunch alert, then short-lunch, then
    /// exceeded-overtime.
    pub fn calculate_schedule(record: &DailyRecord, profile: &ShiftProfile, now_min: i64) -> Schedule {
        let mut schedule = Schedule::default();
        let times = &record.times;

        let entry = optional_to_minutes(times.entry.as_ref());
        let lunch_out = optional_to_minutes(times.lunch_out.as_ref());
        let mut lunch_in = optional_to_minutes(times.lunch_in.as_ref());

        // 6h-without-break countdown, while no lunch departure is recorded.
        if let (Some(entry), None) = (entry, lunch_out) {
            let (text, alert) = solo_limit::evaluate(entry, now_min);
            schedule.time_to_lunch_limit = Some(text);
            if let Some(alert) = alert {
                schedule.alerts.push(alert);
            }
        }

        // Without an entry there is nothing more to compute.
        let entry = match entry {
            Some(e) => e,
            None => return schedule,
        };

        // Lunch duration for projection. An inverted pair (return before
        // departure) breaks the record invariant: surface it and fall back
        // to on-break semantics rather than doing arithmetic on it.
        let projection = lunch::project(lunch_out, lunch_in, profile);
        if projection.inverted {
            schedule
                .alerts
                .push(Alert::danger("Lunch return before departure ignored."));
            lunch_in = None;
        }
        schedule.actual_lunch_min = projection.actual;

        // Exit window.
        let window = exit_window::project(entry, projection.projected, profile);
        schedule.estimated_exit = Some(minutes_to_time(window.estimated));
        schedule.exit_range_text = Some(format!(
            "{} - {}",
            minutes_to_time(window.estimated),
            minutes_to_time(window.limit)
        ));

        // Computation end-point: a recorded hypothetical exit decouples the
        // evaluation from the live clock.
        let (calc_end, simulated) = match optional_to_minutes(times.exit_time_real.as_ref()) {
            Some(exit) => (exit, true),
            None => (now_min, false),
        };
        schedule.is_simulated = simulated;

        let worked_so_far = worked::net_worked(entry, lunch_out, lunch_in, calc_end);
        schedule.worked_current = minutes_to_time(worked_so_far);

        let outcome = status::classify(worked_so_far, profile);
        schedule.work_status = outcome.status;
        schedule.work_remaining_text = Some(outcome.text.clone());

        // Simulated evaluations never fire live notifications.
        if !simulated {
            let (minutes_to_limit, trigger) = status::trigger(worked_so_far, profile);
            schedule.minutes_to_limit = Some(minutes_to_limit);
            schedule.notification_trigger = trigger;
        }

        // Lunch status: in progress (against the live clock, even for
        // simulated runs) or completed.
        match (lunch_out, lunch_in) {
            (Some(out), None) => {
                let (text, violated) = lunch::in_progress_status(out, now_min, profile);
                schedule.lunch_status_text = Some(text);
                schedule.is_lunch_violation = violated;
            }
            _ => {
                if let Some(actual) = projection.actual {
                    schedule.lunch_duration = Some(minutes_to_time(actual));
                    let (text, violated, short_alert) = lunch::completed_status(actual, profile);
                    schedule.lunch_status_text = Some(text);
                    schedule.is_lunch_violation = violated;
                    if let Some(message) = short_alert {
                        schedule.alerts.push(Alert::danger(message));
                    }
                }
            }
        }

        // Appended last so the short-lunch alert always precedes it.
        if outcome.exceeded {
            schedule
                .alerts
                .push(Alert::danger("Legal overtime limit exceeded."));
        }

        schedule
    }

    /// Cheap check run on the lunch-return edit itself, before the full
    /// recomputation: its failure path must block the edit, not annotate it.
    pub fn validate_lunch_return(
        lunch_out: &str,
        lunch_in: &str,
        profile: &ShiftProfile,
    ) -> LunchValidation {
        lunch::validate_return(lunch_out, lunch_in, profile)
    }
}
