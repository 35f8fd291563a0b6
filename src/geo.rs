//! Asynchronous geolocation lookup.
//!
//! Positions come from an IP-geolocation HTTP endpoint returning a JSON body
//! with the longitude. The lookup is a single request: no retry, no timeout,
//! no cancellation.

use serde::Deserialize;

use crate::error::check_longitude;
use crate::{Error, Result};

/// Default public IP-geolocation endpoint.
const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Environment variable overriding the geolocation endpoint. Setting it to
/// the empty string disables geolocation entirely.
pub const GEO_URL_ENV: &str = "DECTIME_GEO_URL";

/// Geographic position reported by the geolocation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude in degrees, positive east of Greenwich
    longitude: f64,
}

impl Position {
    /// Creates a position from a longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` if longitude is outside -180 to +180
    /// degrees.
    pub fn new(longitude: f64) -> Result<Self> {
        check_longitude(longitude)?;
        Ok(Self { longitude })
    }

    /// Gets the longitude in degrees, positive east of Greenwich.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Wire format of the geolocation response. Accepts both the long field name
/// and the ip-api.com spelling.
#[derive(Deserialize)]
struct PositionBody {
    #[serde(alias = "lon")]
    longitude: f64,
}

/// Client for the geolocation endpoint.
pub struct GeoClient {
    endpoint: String,
    client: reqwest::Client,
}

impl GeoClient {
    /// Creates a client for an explicit endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from the environment.
    ///
    /// Returns `None` when [`GEO_URL_ENV`] is set to the empty string
    /// (geolocation disabled); otherwise uses the override URL or the default
    /// public endpoint.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        match std::env::var(GEO_URL_ENV) {
            Ok(url) if url.is_empty() => None,
            Ok(url) => Some(Self::new(url)),
            Err(_) => Some(Self::new(DEFAULT_ENDPOINT)),
        }
    }

    /// Gets the endpoint URL this client queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests the current position from the geolocation endpoint.
    ///
    /// A single GET request; the three failure modes (transport error,
    /// non-success status, malformed body) all surface as
    /// `Error::Geolocation`.
    ///
    /// # Errors
    /// Returns `Error::Geolocation` if the lookup fails, or
    /// `InvalidLongitude` if the endpoint reports a longitude outside -180
    /// to +180 degrees.
    pub async fn current_position(&self) -> Result<Position> {
        tracing::debug!("requesting position from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| Error::geolocation(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::geolocation(format!("endpoint returned {status}")));
        }

        let body: PositionBody = response
            .json()
            .await
            .map_err(|err| Error::geolocation(err.to_string()))?;

        tracing::debug!("geolocation reported longitude {}", body.longitude);
        Position::new(body.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validation() {
        let position = Position::new(16.37).unwrap();
        assert_eq!(position.longitude(), 16.37);

        assert!(Position::new(181.0).is_err());
        assert!(Position::new(f64::NAN).is_err());
    }

    #[test]
    fn test_position_body_field_spellings() {
        let long: PositionBody = serde_json::from_str(r#"{"longitude": 16.37}"#).unwrap();
        assert_eq!(long.longitude, 16.37);

        let short: PositionBody = serde_json::from_str(r#"{"lat": 48.21, "lon": 16.37}"#).unwrap();
        assert_eq!(short.longitude, 16.37);
    }
}
