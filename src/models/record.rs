use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The sparse set of recorded instants for one day, each an "HH:MM" string
/// or absent. Kept as strings on purpose: parsing (and soft rejection of
/// malformed values) belongs to the engine, not to whoever filled the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayTimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_in: Option<String>,
    /// Hypothetical exit: when present the evaluation is "simulated"
    /// (what if I leave at this time?) instead of live-clock based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time_real: Option<String>,
}

/// One worker's timestamps for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub times: DayTimes,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            times: DayTimes::default(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
