use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Human readable age like "5 minutes ago".
pub fn time_ago(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    match secs {
        0..45 => "just now".to_string(),
        s if s < HOUR => plural((s / MINUTE).max(1), "minute"),
        s if s < DAY => plural(s / HOUR, "hour"),
        s if s < MONTH => plural(s / DAY, "day"),
        s if s < YEAR => plural(s / MONTH, "month"),
        s => plural(s / YEAR, "year"),
    }
}
