mod common;
use common::profile;

use shiftwatch::core::logic::Engine;
use shiftwatch::core::notify::NotificationSession;
use shiftwatch::models::profile::ShiftProfile;
use shiftwatch::models::schedule::NotificationTrigger;

#[test]
fn return_before_departure_is_rejected() {
    let validation = Engine::validate_lunch_return("12:00", "11:30", &profile());
    assert!(!validation.valid);
    assert_eq!(
        validation.message.as_deref(),
        Some("Return cannot be before departure.")
    );
}

#[test]
fn short_break_is_valid_but_needs_confirmation() {
    let validation = Engine::validate_lunch_return("12:00", "12:40", &profile());
    assert!(validation.valid);
    assert!(validation.warning);
    let message = validation.message.unwrap();
    assert!(message.contains("Break of only 40 min"));
    assert!(message.contains("Confirm?"));
}

#[test]
fn zero_length_break_still_warns() {
    let validation = Engine::validate_lunch_return("12:00", "12:00", &profile());
    assert!(validation.valid);
    assert!(validation.warning);
}

#[test]
fn compliant_break_passes_silently() {
    let validation = Engine::validate_lunch_return("12:00", "13:05", &profile());
    assert!(validation.valid);
    assert!(!validation.warning);
    assert_eq!(validation.message, None);
}

#[test]
fn missing_departure_is_rejected_first() {
    let validation = Engine::validate_lunch_return("", "12:40", &profile());
    assert!(!validation.valid);
    assert_eq!(
        validation.message.as_deref(),
        Some("Enter the lunch departure time first.")
    );
}

#[test]
fn malformed_times_are_rejected_not_warned() {
    for (out, back) in [("12x00", "12:40"), ("12:00", "later")] {
        let validation = Engine::validate_lunch_return(out, back, &profile());
        assert!(!validation.valid, "expected rejection for {out}/{back}");
        assert_eq!(validation.message.as_deref(), Some("Invalid time format."));
    }
}

#[test]
fn minimum_comes_from_the_profile() {
    let lenient = ShiftProfile {
        lunch_min_limit: 30,
        ..profile()
    };
    let validation = Engine::validate_lunch_return("12:00", "12:40", &lenient);
    assert!(validation.valid);
    assert!(!validation.warning);
}

// ---------------------------------------------------------------
// Notification session de-duplication
// ---------------------------------------------------------------

#[test]
fn a_trigger_fires_once_per_record() {
    let mut session = NotificationSession::new();

    assert!(session.fire("2025-03-10", NotificationTrigger::Warning10Min));
    assert!(!session.fire("2025-03-10", NotificationTrigger::Warning10Min));

    // A different trigger kind for the same record still fires.
    assert!(session.fire("2025-03-10", NotificationTrigger::WarningCritical));
    // And the same kind for another record is independent.
    assert!(session.fire("2025-03-11", NotificationTrigger::Warning10Min));

    assert_eq!(session.sent_count(), 3);
}

#[test]
fn reset_forgets_previous_fires() {
    let mut session = NotificationSession::new();
    assert!(session.fire("2025-03-10", NotificationTrigger::WarningCritical));
    session.reset();
    assert!(session.fire("2025-03-10", NotificationTrigger::WarningCritical));
}
