//! Projected exit window: earliest compliant exit to latest legal exit.

use crate::models::profile::ShiftProfile;

#[derive(Debug, Clone, Copy)]
pub struct ExitWindow {
    /// Entry + work target + lunch: the minimum compliant exit.
    pub estimated: i64,
    /// Estimated + overtime cap: the legal ceiling.
    pub limit: i64,
}

pub fn project(entry: i64, lunch_projection: i64, profile: &ShiftProfile) -> ExitWindow {
    let estimated = entry + profile.work_target_min as i64 + lunch_projection;
    ExitWindow {
        estimated,
        limit: estimated + profile.max_extra_min as i64,
    }
}
