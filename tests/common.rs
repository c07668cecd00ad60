#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

use shiftwatch::models::profile::ShiftProfile;
use shiftwatch::models::record::DailyRecord;

pub fn sw() -> Command {
    cargo_bin_cmd!("shiftwatch")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file, so each test starts from the built-in defaults.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftwatch.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// The standard 6x1 profile every scenario uses:
/// 440 min target, 100 min standard lunch, 60 min legal minimum, 120 min cap.
pub fn profile() -> ShiftProfile {
    ShiftProfile::six_by_one()
}

/// Record for a fixed date with the given optional "HH:MM" times.
pub fn record(
    entry: Option<&str>,
    lunch_out: Option<&str>,
    lunch_in: Option<&str>,
    exit_time_real: Option<&str>,
) -> DailyRecord {
    let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let mut record = DailyRecord::new(date);
    record.times.entry = entry.map(str::to_string);
    record.times.lunch_out = lunch_out.map(str::to_string);
    record.times.lunch_in = lunch_in.map(str::to_string);
    record.times.exit_time_real = exit_time_real.map(str::to_string);
    record
}

/// Parse an "HH:MM" produced by the engine back into minutes, accepting
/// values past 23:59 (worked totals can exceed a day).
pub fn as_minutes(formatted: &str) -> i64 {
    let (h, m) = formatted.split_once(':').expect("HH:MM");
    h.parse::<i64>().unwrap() * 60 + m.parse::<i64>().unwrap()
}
