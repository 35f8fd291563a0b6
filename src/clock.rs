//! Conversion from standard wall-clock time to decimal seconds.

use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Decimal seconds per day (10 hours × 100 minutes × 100 seconds).
pub const DECIMAL_SECONDS_PER_DAY: u32 = 100_000;

/// Standard milliseconds per decimal second:
/// 86,400,000 ms/day ÷ 100,000 decimal seconds/day.
pub const MILLIS_PER_DECIMAL_SECOND: u32 = 864;

/// Converts an instant to its decimal second-of-day (0–99,999).
///
/// Milliseconds since UTC midnight divided by 864, truncating toward zero.
///
/// # Example
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use decimal_time::clock::decimal_second_of_day;
/// let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
/// assert_eq!(decimal_second_of_day(&midnight), 0);
///
/// let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// assert_eq!(decimal_second_of_day(&noon), 50_000);
/// ```
pub fn decimal_second_of_day<Tz: TimeZone>(datetime: &DateTime<Tz>) -> u32 {
    let utc = datetime.with_timezone(&Utc);
    // chrono folds a leap second into nanosecond() >= 1e9; clamp the
    // millisecond part so the result stays below 100,000.
    let millis = (utc.nanosecond() / 1_000_000).min(999);
    let millis_of_day = millis + (utc.second() + (utc.minute() + utc.hour() * 60) * 60) * 1000;
    millis_of_day / MILLIS_PER_DECIMAL_SECOND
}
