//! # Decimal Time
//!
//! Conversions between standard wall-clock time and decimal time, plus local
//! solar-relative time derived from longitude.
//!
//! On the decimal clock, a day has 10 hours of 100 minutes of 100 seconds —
//! 100,000 decimal seconds, each lasting exactly 864 standard milliseconds.
//! Days group into 10-day decimal weeks, and years are counted from the
//! founding of Rome (Ab urbe condita, 753 BCE).
//!
//! Local time is reported relative to local *mean* noon: the moment the mean
//! sun crosses the local meridian, derived purely from longitude with no
//! equation-of-time correction. A time is "am" while noon is still upcoming
//! and "pm" once it has passed.
//!
//! ## Features
//!
//! - `geo` (default): asynchronous position lookup over an IP-geolocation
//!   HTTP endpoint ([`geo::GeoClient`]).
//! - `cli` (default): the `dectime` binary that prints the current decimal
//!   time and, when geolocation succeeds, the local solar-relative time.
//!
//! The conversion library itself has no async machinery and builds with
//! `--no-default-features`.
//!
//! ## Quick Start
//!
//! ### Standard decimal time
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use decimal_time::{clock, report::StandardTime};
//!
//! let datetime = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//!
//! // UTC noon is halfway through the decimal day.
//! assert_eq!(clock::decimal_second_of_day(&datetime), 50_000);
//!
//! let standard = StandardTime::for_instant(&datetime).unwrap();
//! assert_eq!(standard.to_string(), "year 2777, week 6, time 5.00.00");
//! ```
//!
//! ### Local solar time
//! ```rust
//! use decimal_time::{report::LocalSolarTime, Period};
//!
//! // Vienna (16.37°E) at 12:00 UTC: solar noon has already passed.
//! let local = LocalSolarTime::at(50_000, 16.37).unwrap();
//! assert_eq!(local.period(), Period::Pm);
//! assert_eq!(local.to_string(), "0.45.47 pm at longitude 16.37°");
//! assert_eq!(local.noon().to_string(), "4.54.53");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions,
    clippy::float_cmp, // Exact comparisons of integral-valued constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::solar::NoonOffset;
pub use crate::types::{DecimalTime, Period};

// Core modules
pub mod error;
pub mod types;

// Conversion modules
pub mod calendar;
pub mod clock;
pub mod solar;

// Composition
pub mod report;

#[cfg(feature = "geo")]
pub mod geo;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_standard_and_local_agree_on_second_of_day() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let second_of_day = clock::decimal_second_of_day(&datetime);

        let standard = report::StandardTime::for_instant(&datetime).unwrap();
        let local = report::LocalSolarTime::at(second_of_day, 0.0).unwrap();

        // Greenwich noon at UTC noon: distance zero, noon upcoming by convention.
        assert_eq!(standard.time(), DecimalTime::new(5, 0, 0).unwrap());
        assert_eq!(local.noon(), DecimalTime::new(5, 0, 0).unwrap());
        assert_eq!(local.time(), DecimalTime::new(0, 0, 0).unwrap());
        assert_eq!(local.period(), Period::Am);
    }
}
