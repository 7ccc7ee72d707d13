use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use super::format::TimestampFormat;
use crate::core::{Error, Result, NTP_UNIX_OFFSET};

/// Converts an NTP timestamp into Unix seconds and nanoseconds
///
/// Timestamps before 1970 give negative seconds; the nanosecond part is always
/// in `0..1_000_000_000`.
pub fn to_unix(timestamp: &TimestampFormat) -> (i64, u32) {
    let mut seconds = i64::from(timestamp.seconds) - NTP_UNIX_OFFSET;
    let mut nanos = timestamp.fraction_nanos();
    if nanos >= 1_000_000_000 {
        seconds += 1;
        nanos -= 1_000_000_000;
    }
    (seconds, nanos)
}

/// Converts an NTP timestamp into a UTC calendar time
pub fn to_calendar(timestamp: &TimestampFormat) -> Result<DateTime<Utc>> {
    let (seconds, nanos) = to_unix(timestamp);
    Utc.timestamp_opt(seconds, nanos)
        .single()
        .ok_or_else(|| Error::decode(format!("timestamp {} has no calendar form", seconds)))
}

/// Renders an NTP timestamp as RFC 3339 with nine fractional digits
pub fn to_rfc3339(timestamp: &TimestampFormat) -> Result<String> {
    Ok(to_calendar(timestamp)?.to_rfc3339_opts(SecondsFormat::Nanos, true))
}
