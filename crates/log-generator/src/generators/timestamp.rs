//! Timestamp formatting for the different log layouts.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// The current local time with its UTC offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// nginx `$time_local`, e.g. `10/Oct/2024:13:55:36 +0200`.
pub fn time_local(at: &DateTime<FixedOffset>) -> String {
    at.format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

/// ISO-8601 with microseconds, e.g. `2024-10-10T13:55:36.123456+02:00`.
pub fn iso8601(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// nginx error log timestamp, e.g. `2024/10/10 13:55:36`.
pub fn error_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format("%Y/%m/%d %H:%M:%S").to_string()
}
