//! Calendar decomposition for the decimal clock.
//!
//! Years are counted from the founding of Rome (Ab urbe condita), and days
//! are grouped into 10-day decimal weeks. All decompositions read the UTC
//! representation of the instant.

#![allow(clippy::unreadable_literal)]

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::types::DAYS_PER_DECIMAL_WEEK;

/// Offset of the Ab urbe condita epoch relative to the common era (753 BCE).
pub const AUC_EPOCH_OFFSET: i32 = 753;

/// Cumulative month-length corrections, three bits per month from March
/// through December. For month `m` (zero-based, `m >= 2`), the first day of
/// the month falls on ordinal `m * 31 - ((TABLE >> (3 * m - 6)) & 7)` in a
/// common year.
const MONTH_CORRECTION_TABLE: u32 = 1054267675;

/// Returns the calendar year in the Ab urbe condita era.
///
/// The UTC calendar year offset by 753, the traditional founding year of
/// Rome.
///
/// # Example
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use decimal_time::calendar::auc_year;
/// let datetime = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// assert_eq!(auc_year(&datetime), 2777);
/// ```
pub fn auc_year<Tz: TimeZone>(datetime: &DateTime<Tz>) -> i32 {
    datetime.with_timezone(&Utc).year() + AUC_EPOCH_OFFSET
}

/// Tests whether a year is a Gregorian leap year.
///
/// Divisible by 4, except centuries not divisible by 400. Since every year
/// divisible by 100 is divisible by 25, and a multiple of 4 and 25 is
/// divisible by 400 exactly when it is divisible by 16, the century rule
/// reduces to divisibility by 25 and then by 16.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 25 != 0 || year % 16 == 0)
}

/// Returns the zero-based ordinal day within the UTC year (0–365).
///
/// Computed from the packed month-correction table rather than iterating
/// month lengths.
///
/// # Example
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use decimal_time::calendar::day_of_year;
/// let jan_1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(day_of_year(&jan_1), 0);
///
/// let dec_31 = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
/// assert_eq!(day_of_year(&dec_31), 365); // leap year
/// ```
pub fn day_of_year<Tz: TimeZone>(datetime: &DateTime<Tz>) -> u32 {
    let utc = datetime.with_timezone(&Utc);
    let month0 = utc.month0();
    let correction = if month0 >= 2 {
        let packed = (MONTH_CORRECTION_TABLE >> (3 * month0 - 6)) & 7;
        packed - u32::from(is_leap_year(utc.year()))
    } else {
        0
    };
    month0 * 31 - correction + utc.day() - 1
}

/// Returns the decimal week (0–36) for a zero-based day of year.
#[must_use]
pub const fn decimal_week(day_of_year: u32) -> u32 {
    day_of_year / DAYS_PER_DECIMAL_WEEK
}

/// Returns the decimal weekday (0–9) for a zero-based day of year.
#[must_use]
pub const fn decimal_weekday(day_of_year: u32) -> u32 {
    day_of_year % DAYS_PER_DECIMAL_WEEK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_auc_year() {
        assert_eq!(auc_year(&utc_date(2024, 6, 15)), 2777);
        assert_eq!(auc_year(&utc_date(1, 1, 1)), 754);
    }

    #[test]
    fn test_auc_year_uses_utc_components() {
        use chrono::FixedOffset;

        // 2023-12-31T23:30:00-05:00 is already 2024 in UTC.
        let datetime = "2023-12-31T23:30:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(auc_year(&datetime), 2777);
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(2004));

        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn test_day_of_year_boundaries() {
        assert_eq!(day_of_year(&utc_date(2023, 1, 1)), 0);
        assert_eq!(day_of_year(&utc_date(2023, 12, 31)), 364);
        assert_eq!(day_of_year(&utc_date(2024, 1, 1)), 0);
        assert_eq!(day_of_year(&utc_date(2024, 12, 31)), 365);
    }

    #[test]
    fn test_day_of_year_around_leap_day() {
        assert_eq!(day_of_year(&utc_date(2024, 2, 28)), 58);
        assert_eq!(day_of_year(&utc_date(2024, 2, 29)), 59);
        assert_eq!(day_of_year(&utc_date(2024, 3, 1)), 60);

        assert_eq!(day_of_year(&utc_date(2023, 2, 28)), 58);
        assert_eq!(day_of_year(&utc_date(2023, 3, 1)), 59);
    }

    #[test]
    fn test_day_of_year_matches_chrono_ordinal() {
        for year in [1900, 2000, 2023, 2024] {
            let mut date = utc_date(year, 1, 1);
            while date.year() == year {
                assert_eq!(
                    day_of_year(&date),
                    date.ordinal0(),
                    "mismatch on {date}"
                );
                date = date + chrono::Duration::days(1);
            }
        }
    }

    #[test]
    fn test_decimal_week_and_weekday() {
        assert_eq!(decimal_week(0), 0);
        assert_eq!(decimal_weekday(0), 0);
        assert_eq!(decimal_week(60), 6);
        assert_eq!(decimal_weekday(60), 0);
        assert_eq!(decimal_week(365), 36);
        assert_eq!(decimal_weekday(365), 5);
    }
}
