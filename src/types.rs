//! Core data types for decimal-time conversions.

use core::fmt;

use crate::clock::DECIMAL_SECONDS_PER_DAY;
use crate::{Error, Result};

/// Number of days in a decimal week.
pub const DAYS_PER_DECIMAL_WEEK: u32 = 10;

/// A time of day on the decimal clock.
///
/// A decimal day has 10 hours of 100 minutes of 100 seconds. When a time
/// carries a position within the 10-day decimal week, the weekday is folded
/// into the hour field (10 decimal hours per day, 100 per week), so `hour`
/// ranges over 0–99 rather than 0–9.
///
/// # Example
/// ```
/// # use decimal_time::DecimalTime;
/// let time = DecimalTime::from_day_seconds(50_000).unwrap();
/// assert_eq!(time.hour(), 5);
/// assert_eq!(time.minute(), 0);
/// assert_eq!(time.second(), 0);
/// assert_eq!(time.to_string(), "5.00.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalTime {
    /// Decimal hour (0–99, including the decimal-week position)
    hour: u32,
    /// Decimal minute (0–99)
    minute: u32,
    /// Decimal second (0–99)
    second: u32,
}

impl DecimalTime {
    /// Creates a decimal time from its components.
    ///
    /// # Errors
    /// Returns `InvalidDecimalTime` if any component is 100 or more.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 99 {
            return Err(Error::invalid_decimal_time("hour must be below 100"));
        }
        if minute > 99 {
            return Err(Error::invalid_decimal_time("minute must be below 100"));
        }
        if second > 99 {
            return Err(Error::invalid_decimal_time("second must be below 100"));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Splits a decimal-second count (0–99,999) into hour, minute, and second.
    ///
    /// # Errors
    /// Returns `InvalidDecimalSeconds` if `seconds` is 100,000 or more.
    ///
    /// # Example
    /// ```
    /// # use decimal_time::DecimalTime;
    /// let time = DecimalTime::from_day_seconds(34_129).unwrap();
    /// assert_eq!((time.hour(), time.minute(), time.second()), (3, 41, 29));
    /// ```
    pub fn from_day_seconds(seconds: u32) -> Result<Self> {
        Self::from_week_seconds(seconds, 0)
    }

    /// Splits a decimal-second count into hour, minute, and second at a
    /// position within the 10-day decimal week.
    ///
    /// The weekday (0–9) is added ×10 to the hour, so the result counts
    /// decimal hours since the start of the week (0–99).
    ///
    /// # Errors
    /// Returns `InvalidDecimalSeconds` if `seconds` is 100,000 or more, or
    /// `InvalidWeekday` if `weekday` is 10 or more.
    ///
    /// # Example
    /// ```
    /// # use decimal_time::DecimalTime;
    /// let time = DecimalTime::from_week_seconds(34_129, 6).unwrap();
    /// assert_eq!(time.hour(), 63);
    /// assert_eq!(time.to_string(), "63.41.29");
    /// ```
    pub fn from_week_seconds(seconds: u32, weekday: u32) -> Result<Self> {
        if seconds >= DECIMAL_SECONDS_PER_DAY {
            return Err(Error::invalid_decimal_seconds(seconds));
        }
        if weekday >= DAYS_PER_DECIMAL_WEEK {
            return Err(Error::invalid_weekday(weekday));
        }
        Ok(Self {
            hour: weekday * 10 + seconds / 10_000,
            minute: (seconds % 10_000) / 100,
            second: seconds % 100,
        })
    }

    /// Gets the decimal hour (0–99, including the decimal-week position).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the decimal minute (0–99).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the decimal second (0–99).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }
}

impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}.{:02}", self.hour, self.minute, self.second)
    }
}

/// Side of local mean noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Local mean noon is upcoming (ante meridiem).
    Am,
    /// Local mean noon has passed (post meridiem).
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => write!(f, "am"),
            Self::Pm => write!(f, "pm"),
        }
    }
}
