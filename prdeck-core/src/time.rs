//! Relative timestamps ("opened 2 days ago")

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Describe `then` relative to `now` in whole days
///
/// The offset is rounded toward the future, so anything less than a day old
/// reads "today" and anything between one and two days old "yesterday".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let offset = (then - now).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let days = offset.ceil() as i64;

    match days {
        0 => "today".to_string(),
        -1 => "yesterday".to_string(),
        1 => "tomorrow".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("in {} days", d),
    }
}
