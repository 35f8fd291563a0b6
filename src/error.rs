//! Error types for the decimal-time library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during decimal-time conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid decimal time component.
    InvalidDecimalTime {
        /// Description of the component constraint violation.
        message: &'static str,
    },
    /// Invalid decimal second-of-day (must be below 100,000).
    InvalidDecimalSeconds {
        /// The invalid second-of-day value provided.
        value: u32,
    },
    /// Invalid decimal weekday (must be between 0 and 9).
    InvalidWeekday {
        /// The invalid weekday value provided.
        value: u32,
    },
    /// Geolocation lookup failure (transport error, bad status, malformed body).
    #[cfg(feature = "geo")]
    Geolocation {
        /// Description of the lookup failure.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDecimalTime { message } => {
                write!(f, "invalid decimal time: {message}")
            }
            Self::InvalidDecimalSeconds { value } => {
                write!(
                    f,
                    "invalid decimal second-of-day {value} (must be below 100000)"
                )
            }
            Self::InvalidWeekday { value } => {
                write!(
                    f,
                    "invalid decimal weekday {value} (must be between 0 and 9)"
                )
            }
            #[cfg(feature = "geo")]
            Self::Geolocation { message } => {
                write!(f, "geolocation failed: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid decimal time error.
    #[must_use]
    pub const fn invalid_decimal_time(message: &'static str) -> Self {
        Self::InvalidDecimalTime { message }
    }

    /// Creates an invalid decimal second-of-day error.
    #[must_use]
    pub const fn invalid_decimal_seconds(value: u32) -> Self {
        Self::InvalidDecimalSeconds { value }
    }

    /// Creates an invalid decimal weekday error.
    #[must_use]
    pub const fn invalid_weekday(value: u32) -> Self {
        Self::InvalidWeekday { value }
    }

    /// Creates a geolocation failure error.
    #[cfg(feature = "geo")]
    #[must_use]
    pub fn geolocation(message: impl Into<String>) -> Self {
        Self::Geolocation {
            message: message.into(),
        }
    }
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}
