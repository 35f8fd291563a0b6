//! Local mean solar time relative to the decimal clock.
//!
//! Local mean noon is derived purely from longitude: the mean sun crosses the
//! meridian at longitude `lon` when the UTC decimal clock reads
//! `100,000 - trunc(100,000 * (lon + 180) / 360)` seconds. The equation of
//! time is ignored.

use crate::error::check_longitude;
use crate::types::Period;
use crate::{clock::DECIMAL_SECONDS_PER_DAY, Error, Result};

/// Half of the decimal day, the maximum distance from local mean noon.
pub const HALF_DAY_SECONDS: u32 = DECIMAL_SECONDS_PER_DAY / 2;

/// Distance to local mean noon, as an absolute decimal-second count and the
/// side of noon it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoonOffset {
    /// Absolute distance to noon in decimal seconds (0–50,000)
    seconds: u32,
    /// Whether noon is upcoming (am) or has passed (pm)
    period: Period,
}

impl NoonOffset {
    /// Gets the absolute distance to noon in decimal seconds (0–50,000).
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Gets the side of noon: `Am` if noon is upcoming, `Pm` if it has passed.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }
}

/// Maps a longitude onto the decimal-second scale.
///
/// `trunc(100,000 * (longitude + 180) / 360)`: −180° maps to 0, Greenwich to
/// 50,000, and +180° to 100,000, the full-day boundary.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
///
/// # Example
/// ```
/// # use decimal_time::solar::longitude_decimal_seconds;
/// assert_eq!(longitude_decimal_seconds(0.0).unwrap(), 50_000);
/// assert_eq!(longitude_decimal_seconds(-180.0).unwrap(), 0);
/// assert_eq!(longitude_decimal_seconds(180.0).unwrap(), 100_000);
/// ```
pub fn longitude_decimal_seconds(longitude: f64) -> Result<u32> {
    check_longitude(longitude)?;
    let scaled = f64::from(DECIMAL_SECONDS_PER_DAY) * (longitude + 180.0) / 360.0;
    Ok(scaled as u32)
}

/// Returns the UTC decimal second-of-day of local mean noon (0–99,999).
///
/// The +180° boundary wraps to 0: noon on the antimeridian falls at UTC
/// decimal midnight.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
///
/// # Example
/// ```
/// # use decimal_time::solar::local_noon_second;
/// assert_eq!(local_noon_second(0.0).unwrap(), 50_000);   // Greenwich: UTC noon
/// assert_eq!(local_noon_second(180.0).unwrap(), 0);
/// assert_eq!(local_noon_second(-180.0).unwrap(), 0);
/// ```
pub fn local_noon_second(longitude: f64) -> Result<u32> {
    let seconds = longitude_decimal_seconds(longitude)?;
    Ok((DECIMAL_SECONDS_PER_DAY - seconds) % DECIMAL_SECONDS_PER_DAY)
}

/// Computes the distance from a decimal second-of-day to local mean noon.
///
/// The signed difference `second_of_day - noon_second` is wrapped to the
/// nearer noon when it exceeds the half-day distance; the result reports the
/// absolute distance and whether noon is upcoming (`Am`) or has passed
/// (`Pm`). A difference of exactly zero counts as `Am`.
///
/// The half-day boundary is asymmetric: a raw difference of exactly −50,000
/// reports `(50,000, Am)` while exactly +50,000 reports `(50,000, Pm)`.
///
/// # Errors
/// Returns `InvalidDecimalSeconds` if either argument is 100,000 or more.
///
/// # Example
/// ```
/// # use decimal_time::{solar::seconds_to_local_noon, Period};
/// let offset = seconds_to_local_noon(50_000, 45_453).unwrap();
/// assert_eq!(offset.seconds(), 4_547);
/// assert_eq!(offset.period(), Period::Pm);
/// ```
pub fn seconds_to_local_noon(second_of_day: u32, noon_second: u32) -> Result<NoonOffset> {
    if second_of_day >= DECIMAL_SECONDS_PER_DAY {
        return Err(Error::invalid_decimal_seconds(second_of_day));
    }
    if noon_second >= DECIMAL_SECONDS_PER_DAY {
        return Err(Error::invalid_decimal_seconds(noon_second));
    }

    let mut ds = i64::from(second_of_day) - i64::from(noon_second);
    if ds < -i64::from(HALF_DAY_SECONDS) {
        ds += i64::from(DECIMAL_SECONDS_PER_DAY);
    } else if ds > i64::from(HALF_DAY_SECONDS) {
        ds -= i64::from(DECIMAL_SECONDS_PER_DAY);
    }

    let period = if ds > 0 { Period::Pm } else { Period::Am };
    Ok(NoonOffset {
        seconds: u32::try_from(ds.unsigned_abs()).expect("offset is at most half a day"),
        period,
    })
}

/// Computes the distance to local mean noon directly from a longitude.
///
/// # Errors
/// Returns `InvalidLongitude` for an out-of-range longitude or
/// `InvalidDecimalSeconds` for an out-of-range second-of-day.
pub fn local_noon_offset(second_of_day: u32, longitude: f64) -> Result<NoonOffset> {
    seconds_to_local_noon(second_of_day, local_noon_second(longitude)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_mapping() {
        assert_eq!(longitude_decimal_seconds(0.0).unwrap(), 50_000);
        assert_eq!(longitude_decimal_seconds(-180.0).unwrap(), 0);
        assert_eq!(longitude_decimal_seconds(180.0).unwrap(), 100_000);
        assert_eq!(longitude_decimal_seconds(90.0).unwrap(), 75_000);
        assert_eq!(longitude_decimal_seconds(-90.0).unwrap(), 25_000);
        // Truncation toward zero
        assert_eq!(longitude_decimal_seconds(16.37).unwrap(), 54_547);

        assert!(longitude_decimal_seconds(180.1).is_err());
        assert!(longitude_decimal_seconds(-180.1).is_err());
        assert!(longitude_decimal_seconds(f64::NAN).is_err());
    }

    #[test]
    fn test_local_noon_second() {
        assert_eq!(local_noon_second(0.0).unwrap(), 50_000);
        assert_eq!(local_noon_second(180.0).unwrap(), 0);
        assert_eq!(local_noon_second(-180.0).unwrap(), 0);
        // East of Greenwich: noon before UTC noon
        assert_eq!(local_noon_second(16.37).unwrap(), 45_453);
        // West of Greenwich: noon after UTC noon
        assert_eq!(local_noon_second(-122.4194).unwrap(), 84_006);
    }

    #[test]
    fn test_noon_offset_at_noon() {
        let offset = seconds_to_local_noon(50_000, 50_000).unwrap();
        assert_eq!(offset.seconds(), 0);
        assert_eq!(offset.period(), Period::Am);
    }

    #[test]
    fn test_noon_offset_half_day_boundary() {
        // Raw difference of exactly -50,000 is am, exactly +50,000 is pm.
        let am = seconds_to_local_noon(0, 50_000).unwrap();
        assert_eq!((am.seconds(), am.period()), (50_000, Period::Am));

        let pm = seconds_to_local_noon(50_000, 0).unwrap();
        assert_eq!((pm.seconds(), pm.period()), (50_000, Period::Pm));

        let just_before = seconds_to_local_noon(99_999, 50_000).unwrap();
        assert_eq!(
            (just_before.seconds(), just_before.period()),
            (49_999, Period::Pm)
        );
    }

    #[test]
    fn test_noon_offset_wraps_to_nearer_noon() {
        // Just past the previous day's noon
        let wrapped_pm = seconds_to_local_noon(0, 99_999).unwrap();
        assert_eq!(
            (wrapped_pm.seconds(), wrapped_pm.period()),
            (1, Period::Pm)
        );

        // Just before the next day's noon
        let wrapped_am = seconds_to_local_noon(99_999, 0).unwrap();
        assert_eq!(
            (wrapped_am.seconds(), wrapped_am.period()),
            (1, Period::Am)
        );
    }

    #[test]
    fn test_noon_offset_simple_sides() {
        let am = seconds_to_local_noon(40_000, 50_000).unwrap();
        assert_eq!((am.seconds(), am.period()), (10_000, Period::Am));

        let pm = seconds_to_local_noon(60_000, 50_000).unwrap();
        assert_eq!((pm.seconds(), pm.period()), (10_000, Period::Pm));
    }

    #[test]
    fn test_noon_offset_validation() {
        assert!(seconds_to_local_noon(100_000, 0).is_err());
        assert!(seconds_to_local_noon(0, 100_000).is_err());
    }

    #[test]
    fn test_local_noon_offset_composition() {
        // Vienna at 12:00 UTC: solar noon has already passed.
        let offset = local_noon_offset(50_000, 16.37).unwrap();
        assert_eq!((offset.seconds(), offset.period()), (4_547, Period::Pm));
    }
}
