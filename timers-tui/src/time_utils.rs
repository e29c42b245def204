use time::{OffsetDateTime, UtcOffset};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Milliseconds a timer has accumulated as of `now`.
///
/// A running timer adds the current run to `elapsed`. A start time in the
/// future (clock skew between client and server) counts as zero.
pub fn total_elapsed(elapsed: u64, running_since: Option<i64>, now: i64) -> u64 {
    match running_since {
        Some(since) => elapsed.saturating_add(now.saturating_sub(since).max(0) as u64),
        None => elapsed,
    }
}

/// `HH:MM:SS` for the given accumulated time. Hours grow past two digits.
pub fn render_elapsed(elapsed: u64, running_since: Option<i64>, now: i64) -> String {
    let total_secs = total_elapsed(elapsed, running_since, now) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// Local `HH:MM` for an epoch-millisecond start time.
pub fn format_started_at(running_since: i64) -> Option<String> {
    let utc = OffsetDateTime::from_unix_timestamp_nanos(running_since as i128 * 1_000_000).ok()?;
    let local = to_local_time(utc);
    Some(format!("{:02}:{:02}", local.hour(), local.minute()))
}
