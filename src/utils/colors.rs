/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::schedule::{AlertLevel, WorkStatus};

/// Work status color: normal → reset, extra → yellow, exceeded → red.
pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Normal => RESET,
        WorkStatus::Extra => YELLOW,
        WorkStatus::Exceeded => RED,
    }
}

pub fn color_for_alert(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Warning => YELLOW,
        AlertLevel::Danger => RED,
    }
}

/// Returns a grey rendition for empty/placeholder values ("--:--"),
/// the plain value otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
