//! Display formatting for backend timestamps.
//!
//! Timestamps arrive as ISO 8601 strings and are only reformatted for
//! display, so no datetime arithmetic library is pulled in — the date part
//! is a prefix slice and relative times are tiered from a seconds delta.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// The `YYYY-MM-DD` prefix of an ISO 8601 timestamp, or the input unchanged
/// when it is too short to carry one.
pub fn format_date(timestamp: &str) -> &str {
    match timestamp.get(..10) {
        Some(date) if timestamp.as_bytes()[4] == b'-' && timestamp.as_bytes()[7] == b'-' => date,
        _ => timestamp,
    }
}

fn counted(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Coarse relative-time label for comment metadata.
pub fn relative_time(seconds_ago: i64) -> String {
    if seconds_ago < 60 {
        "just now".to_owned()
    } else if seconds_ago < 3600 {
        counted(seconds_ago / 60, "minute")
    } else if seconds_ago < 86_400 {
        counted(seconds_ago / 3600, "hour")
    } else {
        counted(seconds_ago / 86_400, "day")
    }
}

/// Seconds elapsed since an ISO 8601 timestamp, per the browser clock.
/// Returns `None` outside the browser or for unparseable input.
pub fn seconds_since(timestamp: &str) -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::parse(timestamp);
        if parsed.is_nan() {
            return None;
        }
        let now = js_sys::Date::now();
        #[allow(clippy::cast_possible_truncation)]
        let seconds = ((now - parsed) / 1000.0) as i64;
        Some(seconds)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp;
        None
    }
}

/// Relative label for an ISO 8601 timestamp, falling back to its date part
/// when the elapsed time cannot be computed.
pub fn relative_label(timestamp: &str) -> String {
    seconds_since(timestamp).map_or_else(
        || format_date(timestamp).to_owned(),
        relative_time,
    )
}
