//! Human readable ages relative to the dump's reference time

const MINUTE: i64 = 60;
const HOUR: i64 = 3600;

/// Format an elapsed time in seconds as `"N s"`, `"N min"` or `"N h"`.
///
/// Negative deltas (clock skew between daemon and record) are passed
/// through in the seconds branch.
pub fn age_string(delta: i64) -> String {
    if delta < MINUTE {
        format!("{} s", delta)
    } else if delta < HOUR {
        format!("{} min", delta / MINUTE)
    } else {
        format!("{} h", delta / HOUR)
    }
}

/// Age of `time` relative to `curtime`, if both are known
pub fn age_between(curtime: Option<i64>, time: Option<i64>) -> Option<String> {
    match (curtime, time) {
        (Some(now), Some(then)) => Some(age_string(now.saturating_sub(then))),
        _ => None,
    }
}
