mod common;
use common::{as_minutes, profile, record};

use shiftwatch::core::logic::Engine;
use shiftwatch::models::schedule::{AlertLevel, NotificationTrigger, WorkStatus};
use shiftwatch::utils::time::time_to_minutes;

fn at(hhmm: &str) -> i64 {
    time_to_minutes(hhmm).unwrap()
}

// ---------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------

#[test]
fn fresh_entry_projects_the_full_exit_window() {
    let record = record(Some("08:00"), None, None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("08:00"));

    assert_eq!(schedule.exit_range_text.as_deref(), Some("16:20 - 18:20"));
    assert_eq!(schedule.estimated_exit.as_deref(), Some("16:20"));
    assert_eq!(schedule.worked_current, "00:00");
    assert_eq!(schedule.work_status, WorkStatus::Normal);
    assert_eq!(
        schedule.work_remaining_text.as_deref(),
        Some("Remaining: 07:20")
    );
    assert!(!schedule.is_simulated);
    assert_eq!(schedule.minutes_to_limit, Some(560));
    assert_eq!(schedule.notification_trigger, None);
}

#[test]
fn short_completed_lunch_is_flagged_and_alerted() {
    let record = record(Some("08:00"), Some("12:00"), Some("12:30"), None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("13:00"));

    assert_eq!(schedule.lunch_duration.as_deref(), Some("00:30"));
    assert_eq!(schedule.actual_lunch_min, Some(30));
    assert!(schedule.is_lunch_violation);
    assert_eq!(schedule.lunch_status_text.as_deref(), Some("Too short"));
    assert!(schedule
        .alerts
        .iter()
        .any(|a| a.message.contains("Lunch break too short")));

    // 4h morning + 30min afternoon, actual lunch in the projection.
    assert_eq!(schedule.worked_current, "04:30");
    assert_eq!(schedule.exit_range_text.as_deref(), Some("15:50 - 17:50"));
}

#[test]
fn overtime_past_the_cap_is_exceeded_with_a_danger_alert() {
    let record = record(Some("08:00"), None, None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("20:10"));

    assert_eq!(schedule.worked_current, "12:10");
    assert_eq!(schedule.work_status, WorkStatus::Exceeded);
    assert_eq!(
        schedule.work_remaining_text.as_deref(),
        Some("Exceeded: +04:50")
    );
    assert!(schedule
        .alerts
        .iter()
        .any(|a| a.message.contains("Legal overtime limit exceeded")));

    // No lunch departure all day: the 6h alert precedes the overtime one.
    assert_eq!(schedule.alerts.len(), 2);
    assert!(schedule.alerts[0].message.contains("6 hours"));
    assert_eq!(schedule.alerts[0].level, AlertLevel::Danger);
}

// ---------------------------------------------------------------
// Worked-minutes phases
// ---------------------------------------------------------------

#[test]
fn work_stops_accruing_during_the_break() {
    let record = record(Some("08:00"), Some("12:00"), None, None);

    let at_1230 = Engine::calculate_schedule(&record, &profile(), at("12:30"));
    let at_1330 = Engine::calculate_schedule(&record, &profile(), at("13:30"));

    assert_eq!(at_1230.worked_current, "04:00");
    assert_eq!(at_1330.worked_current, "04:00");
}

#[test]
fn lunch_in_progress_counts_down_the_standard_break() {
    let record = record(Some("08:00"), Some("12:00"), None, None);

    let schedule = Engine::calculate_schedule(&record, &profile(), at("12:50"));
    assert_eq!(
        schedule.lunch_status_text.as_deref(),
        Some("Remaining: 00:50")
    );
    assert!(!schedule.is_lunch_violation);

    // Standard 100 min break exceeded by 20 min.
    let late = Engine::calculate_schedule(&record, &profile(), at("14:00"));
    assert_eq!(late.lunch_status_text.as_deref(), Some("Exceeded: 00:20"));
    assert!(late.is_lunch_violation);

    // Projection uses the standard break while the actual one is unknown.
    assert_eq!(schedule.exit_range_text.as_deref(), Some("17:00 - 19:00"));
}

#[test]
fn clock_behind_recorded_instants_never_yields_negative_work() {
    let record = record(Some("08:00"), None, None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("07:30"));
    assert_eq!(schedule.worked_current, "00:00");
}

#[test]
fn missing_entry_leaves_everything_at_defaults() {
    let record = record(None, Some("12:00"), None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("13:00"));

    assert_eq!(schedule.worked_current, "--:--");
    assert_eq!(schedule.exit_range_text, None);
    assert_eq!(schedule.work_remaining_text, None);
    assert_eq!(schedule.work_status, WorkStatus::Normal);
    assert!(schedule.alerts.is_empty());
    assert_eq!(schedule.minutes_to_limit, None);
}

#[test]
fn malformed_times_degrade_to_absent() {
    let record = record(Some("8h00"), None, None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("13:00"));
    assert_eq!(schedule.worked_current, "--:--");
    assert_eq!(schedule.exit_range_text, None);
}

// ---------------------------------------------------------------
// Simulated evaluations
// ---------------------------------------------------------------

#[test]
fn hypothetical_exit_decouples_from_the_live_clock() {
    let record = record(Some("08:00"), None, None, Some("17:00"));
    // The injected clock says 09:00; the what-if exit must win.
    let schedule = Engine::calculate_schedule(&record, &profile(), at("09:00"));

    assert!(schedule.is_simulated);
    assert_eq!(schedule.worked_current, "09:00");
    assert_eq!(schedule.work_status, WorkStatus::Extra);
    assert_eq!(schedule.work_remaining_text.as_deref(), Some("Extra: +01:40"));

    // Simulated runs never fire live notifications.
    assert_eq!(schedule.notification_trigger, None);
    assert_eq!(schedule.minutes_to_limit, None);
}

// ---------------------------------------------------------------
// Notification thresholds
// ---------------------------------------------------------------

#[test]
fn exactly_at_the_hard_limit_is_still_extra_but_critical() {
    // worked == 440 + 120 exactly: entry 08:00, no lunch, clock 17:20.
    let record = record(Some("08:00"), None, None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("17:20"));

    assert_eq!(as_minutes(&schedule.worked_current), 560);
    assert_eq!(schedule.work_status, WorkStatus::Extra);
    assert_eq!(schedule.minutes_to_limit, Some(0));
    assert_eq!(
        schedule.notification_trigger,
        Some(NotificationTrigger::WarningCritical)
    );
}

#[test]
fn trigger_thresholds_are_inclusive_with_a_one_minute_gap() {
    let record = record(Some("08:00"), None, None, None);
    let profile = profile();

    let cases = [
        ("17:09", Some(11), None),
        ("17:10", Some(10), Some(NotificationTrigger::Warning10Min)),
        ("17:18", Some(2), Some(NotificationTrigger::Warning10Min)),
        ("17:19", Some(1), Some(NotificationTrigger::WarningCritical)),
        ("17:30", Some(-10), Some(NotificationTrigger::WarningCritical)),
    ];

    for (now, minutes_to_limit, trigger) in cases {
        let schedule = Engine::calculate_schedule(&record, &profile, at(now));
        assert_eq!(schedule.minutes_to_limit, minutes_to_limit, "at {now}");
        assert_eq!(schedule.notification_trigger, trigger, "at {now}");
    }
}

// ---------------------------------------------------------------
// Purity and monotonicity
// ---------------------------------------------------------------

#[test]
fn identical_inputs_yield_identical_schedules() {
    let record = record(Some("08:00"), Some("12:00"), Some("13:40"), None);
    let profile = profile();

    let first = Engine::calculate_schedule(&record, &profile, at("15:00"));
    let second = Engine::calculate_schedule(&record, &profile, at("15:00"));
    assert_eq!(first, second);
}

#[test]
fn worked_time_is_non_decreasing_as_the_clock_advances() {
    let record = record(Some("08:00"), Some("12:00"), Some("13:40"), None);
    let profile = profile();

    let mut previous = -1;
    let mut now = at("08:00");
    while now <= at("22:00") {
        let schedule = Engine::calculate_schedule(&record, &profile, now);
        let worked = as_minutes(&schedule.worked_current);
        assert!(worked >= previous, "worked regressed at minute {now}");
        previous = worked;
        now += 15;
    }
}

// ---------------------------------------------------------------
// 6h solo-work limit
// ---------------------------------------------------------------

#[test]
fn solo_work_limit_counts_down_and_warns_inside_the_last_hour() {
    let record = record(Some("08:00"), None, None, None);
    let profile = profile();

    let early = Engine::calculate_schedule(&record, &profile, at("10:00"));
    assert_eq!(
        early.time_to_lunch_limit.as_deref(),
        Some("Lunch due in: 04:00")
    );
    assert!(early.alerts.is_empty());

    let close = Engine::calculate_schedule(&record, &profile, at("13:30"));
    assert_eq!(
        close.time_to_lunch_limit.as_deref(),
        Some("Lunch due in: 00:30")
    );
    assert_eq!(close.alerts.len(), 1);
    assert_eq!(close.alerts[0].level, AlertLevel::Warning);

    let over = Engine::calculate_schedule(&record, &profile, at("14:30"));
    assert_eq!(over.time_to_lunch_limit.as_deref(), Some("Over 6h: +00:30"));
    assert!(over.alerts[0].message.contains("6 hours"));
    assert_eq!(over.alerts[0].level, AlertLevel::Danger);
}

#[test]
fn recorded_lunch_departure_clears_the_solo_limit() {
    let record = record(Some("08:00"), Some("12:00"), None, None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("15:00"));
    assert_eq!(schedule.time_to_lunch_limit, None);
}

// ---------------------------------------------------------------
// Record invariant and alert ordering
// ---------------------------------------------------------------

#[test]
fn inverted_lunch_pair_is_alerted_and_ignored() {
    let record = record(Some("08:00"), Some("12:00"), Some("11:00"), None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("13:00"));

    assert!(schedule.alerts[0]
        .message
        .contains("Lunch return before departure"));
    assert_eq!(schedule.actual_lunch_min, None);
    assert_eq!(schedule.lunch_duration, None);

    // Falls back to on-break semantics: work frozen at the departure.
    assert_eq!(schedule.worked_current, "04:00");
    assert_eq!(
        schedule.lunch_status_text.as_deref(),
        Some("Remaining: 00:40")
    );
}

#[test]
fn short_lunch_alert_precedes_the_overtime_alert() {
    // 30 min lunch and a day long enough to blow past the overtime cap.
    let record = record(Some("05:00"), Some("10:00"), Some("10:30"), None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("22:00"));

    assert_eq!(schedule.work_status, WorkStatus::Exceeded);
    assert_eq!(schedule.alerts.len(), 2);
    assert!(schedule.alerts[0].message.contains("Lunch break too short"));
    assert!(schedule.alerts[1]
        .message
        .contains("Legal overtime limit exceeded"));
}

#[test]
fn compliant_completed_lunch_reads_ok() {
    let record = record(Some("08:00"), Some("12:00"), Some("13:40"), None);
    let schedule = Engine::calculate_schedule(&record, &profile(), at("15:00"));

    assert_eq!(schedule.lunch_duration.as_deref(), Some("01:40"));
    assert_eq!(schedule.lunch_status_text.as_deref(), Some("OK"));
    assert!(!schedule.is_lunch_violation);
    assert!(schedule.alerts.is_empty());
}
