//! Printable reports composing the calendar, clock, and solar conversions.

use core::fmt;

use chrono::{DateTime, TimeZone};

use crate::types::{DecimalTime, Period};
use crate::{calendar, clock, solar, Result};

/// The decimal-clock reading of an instant: Ab urbe condita year, decimal
/// week, and the time of day at its position within the decimal week.
///
/// # Example
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use decimal_time::report::StandardTime;
/// let datetime = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let standard = StandardTime::for_instant(&datetime).unwrap();
/// assert_eq!(standard.to_string(), "year 2777, week 6, time 5.00.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardTime {
    /// Ab urbe condita year
    year: i32,
    /// Decimal week of the year (0–36)
    week: u32,
    /// Time of day, with the decimal weekday folded into the hour
    time: DecimalTime,
}

impl StandardTime {
    /// Computes the decimal-clock reading for an instant.
    ///
    /// # Errors
    /// Returns an error if the derived second-of-day or weekday is out of
    /// range.
    pub fn for_instant<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self> {
        let day_of_year = calendar::day_of_year(datetime);
        let second_of_day = clock::decimal_second_of_day(datetime);
        let time =
            DecimalTime::from_week_seconds(second_of_day, calendar::decimal_weekday(day_of_year))?;
        Ok(Self {
            year: calendar::auc_year(datetime),
            week: calendar::decimal_week(day_of_year),
            time,
        })
    }

    /// Gets the Ab urbe condita year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the decimal week of the year (0–36).
    #[must_use]
    pub const fn week(&self) -> u32 {
        self.week
    }

    /// Gets the time of day, with the decimal weekday folded into the hour.
    #[must_use]
    pub const fn time(&self) -> DecimalTime {
        self.time
    }
}

impl fmt::Display for StandardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year {}, week {}, time {}",
            self.year, self.week, self.time
        )
    }
}

/// Solar-relative local time at a longitude: distance to local mean noon and
/// the noon time-of-day itself.
///
/// # Example
/// ```
/// # use decimal_time::report::LocalSolarTime;
/// // Vienna at 12:00 UTC
/// let local = LocalSolarTime::at(50_000, 16.37).unwrap();
/// assert_eq!(local.to_string(), "0.45.47 pm at longitude 16.37°");
/// assert_eq!(local.noon().to_string(), "4.54.53");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSolarTime {
    /// Distance to local mean noon as a decimal time
    time: DecimalTime,
    /// Side of noon
    period: Period,
    /// Local mean noon as a UTC decimal time-of-day
    noon: DecimalTime,
    /// Longitude the report was computed for, in degrees
    longitude: f64,
}

impl LocalSolarTime {
    /// Computes the solar-relative local time for a decimal second-of-day at
    /// a longitude.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` for an out-of-range longitude or
    /// `InvalidDecimalSeconds` for an out-of-range second-of-day.
    pub fn at(second_of_day: u32, longitude: f64) -> Result<Self> {
        let noon_second = solar::local_noon_second(longitude)?;
        let offset = solar::seconds_to_local_noon(second_of_day, noon_second)?;
        Ok(Self {
            time: DecimalTime::from_day_seconds(offset.seconds())?,
            period: offset.period(),
            noon: DecimalTime::from_day_seconds(noon_second)?,
            longitude,
        })
    }

    /// Gets the distance to local mean noon as a decimal time.
    #[must_use]
    pub const fn time(&self) -> DecimalTime {
        self.time
    }

    /// Gets the side of noon: `Am` if noon is upcoming, `Pm` if it has passed.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Gets local mean noon as a UTC decimal time-of-day.
    #[must_use]
    pub const fn noon(&self) -> DecimalTime {
        self.noon
    }

    /// Gets the longitude the report was computed for, in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for LocalSolarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at longitude {}°",
            self.time, self.period, self.longitude
        )
    }
}
