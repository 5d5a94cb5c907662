//! Observer location and time context for a sky computation.

use chrono::{DateTime, Duration, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::local_sidereal_time;

/// Errors from checked construction of an observer location.
#[derive(Error, Debug, PartialEq)]
pub enum ObserverError {
    #[error("Latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
    #[error("Time offset {0} leaves the supported date range")]
    TimeOutOfRange(String),
}

/// Geographic position of the observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// Create a location without validating the coordinates.
    ///
    /// Out-of-range or non-finite values are accepted; the pipeline degrades
    /// rather than failing on them.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
            country: None,
        }
    }

    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, ObserverError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ObserverError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ObserverError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Fallback location used when neither device nor IP geolocation resolves
    pub fn nairobi() -> Self {
        Self::new(-1.2921, 36.8219)
            .with_city("Nairobi")
            .with_country("Kenya")
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Human readable label: the city name, or coordinates to two decimals
    pub fn label(&self) -> String {
        match &self.city {
            Some(city) => city.clone(),
            None => format!("{:.2}°, {:.2}°", self.latitude, self.longitude),
        }
    }
}

/// Where and when the sky is observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub location: Location,
    pub time: DateTime<Utc>,
}

impl ObserverContext {
    pub fn new(location: Location, time: DateTime<Utc>) -> Self {
        Self { location, time }
    }

    /// Context at the current wall clock time
    pub fn now(location: Location) -> Self {
        Self::new(location, Utc::now())
    }

    /// Same location, time moved by `offset` (negative moves into the past).
    ///
    /// Fails when the result is outside the range `DateTime<Utc>` can hold.
    pub fn shifted(&self, offset: Duration) -> Result<Self, ObserverError> {
        let time = self
            .time
            .checked_add_signed(offset)
            .ok_or_else(|| ObserverError::TimeOutOfRange(offset.to_string()))?;
        Ok(Self::new(self.location.clone(), time))
    }

    /// Time travel by a fractional number of hours, rounded to whole seconds.
    pub fn shifted_hours(&self, hours: f64) -> Result<Self, ObserverError> {
        let seconds = (hours * 3600.0).round();
        let offset = if seconds.is_finite() && seconds.abs() < i64::MAX as f64 {
            TimeDelta::try_seconds(seconds as i64)
        } else {
            None
        };
        let offset = offset.ok_or_else(|| ObserverError::TimeOutOfRange(format!("{hours} h")))?;
        self.shifted(offset)
    }

    /// Local sidereal time in degrees for this location and time
    pub fn local_sidereal_time(&self) -> f64 {
        local_sidereal_time(self.location.longitude, &self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_checked_accepts_bounds() {
        assert!(Location::checked(90.0, 180.0).is_ok());
        assert!(Location::checked(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert_eq!(
            Location::checked(91.0, 0.0),
            Err(ObserverError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Location::checked(0.0, -181.0),
            Err(ObserverError::LongitudeOutOfRange(-181.0))
        );
        assert!(Location::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(Location::nairobi().label(), "Nairobi");
        assert_eq!(Location::new(51.4779, -0.1278).label(), "51.48°, -0.13°");
    }

    #[test]
    fn test_shifted_keeps_location() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let context = ObserverContext::new(Location::nairobi(), time);
        let later = context.shifted(Duration::hours(3)).unwrap();
        assert_eq!(later.location, context.location);
        assert_eq!(later.time, Utc.with_ymd_and_hms(2024, 1, 15, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_shift_beyond_date_range_is_error() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let context = ObserverContext::new(Location::nairobi(), time);

        assert!(matches!(
            context.shifted(Duration::days(200_000_000)),
            Err(ObserverError::TimeOutOfRange(_))
        ));
        assert!(matches!(
            context.shifted_hours(1e16),
            Err(ObserverError::TimeOutOfRange(_))
        ));
        assert!(context.shifted_hours(f64::NAN).is_err());
        assert!(context.shifted_hours(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_shifted_hours_rounds_to_seconds() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let context = ObserverContext::new(Location::nairobi(), time);
        let earlier = context.shifted_hours(-1.5).unwrap();
        assert_eq!(earlier.time, Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_lst_advances_per_solar_day() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let context = ObserverContext::new(Location::nairobi(), time);
        // One solar day advances LST by ~0.9856 degrees
        let next_day = context.shifted(Duration::days(1)).unwrap();
        let advance = crate::time::normalize_degrees(
            next_day.local_sidereal_time() - context.local_sidereal_time(),
        );
        assert!((advance - 0.9856).abs() < 1e-3, "advance {advance}");
    }
}
