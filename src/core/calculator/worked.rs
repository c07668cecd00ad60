//! Net worked minutes, accumulated phase-wise around the lunch break.

/// Three mutually exclusive phases:
/// - no lunch departure yet: one continuous block up to `calc_end`;
/// - on break: work stopped accruing at `lunch_out`;
/// - back from lunch: morning segment plus afternoon segment.
/// Each segment is clamped at zero so a clock behind the recorded
/// instants never produces negative work.
pub fn net_worked(entry: i64, lunch_out: Option<i64>, lunch_in: Option<i64>, calc_end: i64) -> i64 {
    match (lunch_out, lunch_in) {
        (None, _) => (calc_end - entry).max(0),
        (Some(out), None) => (out - entry).max(0),
        (Some(out), Some(back)) => (out - entry).max(0) + (calc_end - back).max(0),
    }
}
