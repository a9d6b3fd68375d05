use chrono::{DateTime, Utc};
use log::warn;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Return time now in seconds or 0
pub(crate) fn time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0))
        .as_secs()
}

/**
 * Convert a Windows FILETIME (100 nanosecond ticks since 1601-01-01 UTC) to a UTC timestamp
 *
 * A FILETIME of zero means no timestamp was recorded, not 1601-01-01.
 * The largest u64 FILETIME lands around the year 60056 which chrono can represent,
 * if chrono ever rejects a value we warn and return `None` instead of wrapping
 */
pub(crate) fn filetime_to_datetime(filetime: &u64) -> Option<DateTime<Utc>> {
    if *filetime == 0 {
        return None;
    }

    let windows_ticks = 10000000;
    let nano_per_tick = 100;
    let seconds_to_unix: i64 = 11644473600;

    // u64::MAX / 10000000 always fits in an i64
    let seconds = (filetime / windows_ticks) as i64 - seconds_to_unix;
    let nanos = ((filetime % windows_ticks) * nano_per_tick) as u32;

    let timestamp = DateTime::from_timestamp(seconds, nanos);
    if timestamp.is_none() {
        warn!("[time] FILETIME {filetime} is outside the supported date range");
    }
    timestamp
}
