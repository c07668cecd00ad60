use serde::{Deserialize, Serialize};

/// A named configuration of daily work-time rules (e.g. the "6x1" shift):
/// how many net minutes must be worked, the standard and minimum lunch
/// durations, and the legal overtime cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftProfile {
    /// Required minutes of net work per day (440 = 7h20).
    pub work_target_min: u32,
    /// Standard lunch duration, used for projection while the actual
    /// break is not yet known (100 = 1h40).
    pub lunch_target_min: u32,
    /// Legal minimum lunch duration (60 = 1h).
    pub lunch_min_limit: u32,
    /// Maximum permitted overtime beyond the work target (120 = 2h).
    pub max_extra_min: u32,
}

impl ShiftProfile {
    /// The standard 6x1 shift shipped as the default catalog entry.
    pub fn six_by_one() -> Self {
        Self {
            work_target_min: 440,
            lunch_target_min: 100,
            lunch_min_limit: 60,
            max_extra_min: 120,
        }
    }

    /// Hard ceiling of the day: target plus the overtime cap.
    pub fn hard_limit_min(&self) -> i64 {
        self.work_target_min as i64 + self.max_extra_min as i64
    }
}
