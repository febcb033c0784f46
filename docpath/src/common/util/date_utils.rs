use chrono::{DateTime, Utc};

/// Current wall-clock time as epoch milliseconds.
#[inline]
pub fn get_current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current wall-clock time as a UTC timestamp.
#[inline]
pub fn get_current_timestamp() -> DateTime<Utc> {
    Utc::now()
}
