use serde::Serialize;

use crate::utils::time::TIME_PLACEHOLDER;

/// Where the worked time stands relative to the profile limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// Still below the daily work target.
    Normal,
    /// Past the target, within the overtime cap.
    Extra,
    /// Past target plus overtime cap: a legal violation.
    Exceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Danger,
            message: message.into(),
        }
    }
}

/// Notification condition the caller may forward to a dispatcher.
/// Re-emitted on every recomputation while the condition holds; callers
/// de-duplicate per (record, trigger) pair, see [`crate::core::notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NotificationTrigger {
    #[serde(rename = "warning_10min")]
    Warning10Min,
    #[serde(rename = "warning_critical")]
    WarningCritical,
}

impl NotificationTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTrigger::Warning10Min => "warning_10min",
            NotificationTrigger::WarningCritical => "warning_critical",
        }
    }
}

/// Full picture of one day's shift at a given instant. A snapshot, never
/// persisted: every edit or clock tick produces a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// "earliest compliant - latest legal" exit window, when entry is known.
    pub exit_range_text: Option<String>,
    /// Earliest compliant exit (HH:MM).
    pub estimated_exit: Option<String>,

    /// Net minutes worked so far, formatted ("--:--" before entry).
    pub worked_current: String,
    pub work_remaining_text: Option<String>,
    pub work_status: WorkStatus,

    /// Completed lunch duration, formatted.
    pub lunch_duration: Option<String>,
    /// Completed lunch duration in minutes.
    pub actual_lunch_min: Option<i64>,
    pub lunch_status_text: Option<String>,
    pub is_lunch_violation: bool,

    /// Countdown to the 6h-without-break statutory limit, while no lunch
    /// departure is recorded.
    pub time_to_lunch_limit: Option<String>,

    /// True when a hypothetical exit time drove the evaluation instead of
    /// the live clock.
    pub is_simulated: bool,

    /// Accumulated in a fixed order; callers render them as-is.
    pub alerts: Vec<Alert>,
    pub notification_trigger: Option<NotificationTrigger>,
    /// Minutes left before the hard daily limit (live evaluations only).
    pub minutes_to_limit: Option<i64>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            exit_range_text: None,
            estimated_exit: None,
            worked_current: TIME_PLACEHOLDER.to_string(),
            work_remaining_text: None,
            work_status: WorkStatus::Normal,
            lunch_duration: None,
            actual_lunch_min: None,
            lunch_status_text: None,
            is_lunch_violation: false,
            time_to_lunch_limit: None,
            is_simulated: false,
            alerts: Vec::new(),
            notification_trigger: None,
            minutes_to_limit: None,
        }
    }
}

impl Schedule {
    pub fn has_danger(&self) -> bool {
        self.alerts.iter().any(|a| a.level == AlertLevel::Danger)
    }
}

/// Outcome of the lunch-return edit check (see `Engine::validate_lunch_return`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunchValidation {
    /// False means the edit must be rejected outright.
    pub valid: bool,
    /// True means the edit may be saved, but only after explicit confirmation.
    pub warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LunchValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            warning: false,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            warning: false,
            message: Some(message.into()),
        }
    }

    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            warning: true,
            message: Some(message.into()),
        }
    }
}
