//! Equatorial to horizontal coordinate transformation.
//!
//! Converts catalog positions (right ascension, declination) into the local
//! horizon frame of an observer (azimuth, altitude) given the local sidereal
//! time and the observer latitude.
//!
//! # Conventions
//!
//! - Right ascension enters in degrees (`hours * 15`)
//! - Azimuth is measured from north through east, `[0, 360)`
//! - Altitude is positive above the horizon, `[-90, 90]`
//!
//! # Spherical Trigonometry
//!
//! ```text
//! H   = LST - RA
//! alt = asin(sin δ sin φ + cos δ cos φ cos H)
//! az  = acos((sin δ - sin alt sin φ) / (cos alt cos φ))
//! az  = 360 - az   if sin H > 0   (object west of the meridian)
//! ```

use serde::{Deserialize, Serialize};

use crate::time::normalize_degrees;

/// Below this absolute value the azimuth denominator `cos(alt) * cos(lat)` is
/// treated as zero (object at zenith/nadir or observer at a pole).
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Convert right ascension from hours to degrees.
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

/// Position on the celestial sphere in the equatorial frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in degrees
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

impl Equatorial {
    /// Create from right ascension and declination, both in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Create from catalog units: right ascension in hours, declination in degrees
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::from_degrees(hours_to_degrees(ra_hours), dec_deg)
    }

    /// True when both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.ra_deg.is_finite() && self.dec_deg.is_finite()
    }

    /// Transform into the observer's horizon frame.
    ///
    /// See [`equatorial_to_horizontal`].
    pub fn to_horizontal(&self, lst_deg: f64, latitude_deg: f64) -> Horizontal {
        equatorial_to_horizontal(self.ra_deg, self.dec_deg, lst_deg, latitude_deg)
    }
}

/// Position in the observer's horizon frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth in degrees, north through east, `[0, 360)`
    pub azimuth: f64,
    /// Altitude above the horizon in degrees, `[-90, 90]`
    pub altitude: f64,
}

impl Horizontal {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Above the geometric horizon
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Convert equatorial coordinates to horizontal coordinates.
///
/// The `acos` argument is clamped to `[-1, 1]` so floating point overshoot
/// near the meridian never produces NaN. When the azimuth is geometrically
/// undefined (`cos(alt) * cos(lat)` is zero for finite input) the azimuth is
/// reported as 0° (north) and the altitude is still exact.
///
/// Non-finite input is not rejected: NaN flows through to the result and is
/// excluded later by the projector's visibility test.
///
/// # Arguments
/// * `ra_deg` - Right ascension in degrees
/// * `dec_deg` - Declination in degrees
/// * `lst_deg` - Local sidereal time in degrees
/// * `latitude_deg` - Observer latitude in degrees
///
/// # Returns
/// Azimuth/altitude pair in degrees
///
/// # Examples
/// ```rust
/// use skymap::coordinates::equatorial_to_horizontal;
///
/// // A star on the meridian with dec equal to latitude sits at the zenith
/// let h = equatorial_to_horizontal(120.0, 40.0, 120.0, 40.0);
/// assert!((h.altitude - 90.0).abs() < 1e-5);
/// assert!(h.azimuth.is_finite());
/// ```
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    lst_deg: f64,
    latitude_deg: f64,
) -> Horizontal {
    let dec = dec_deg.to_radians();
    let lat = latitude_deg.to_radians();
    let hour_angle = lst_deg.to_radians() - ra_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos();
    // asin of a value a hair outside [-1, 1] would be NaN
    let altitude = if sin_alt.is_nan() {
        f64::NAN
    } else {
        sin_alt.clamp(-1.0, 1.0).asin()
    };

    let denominator = altitude.cos() * lat.cos();
    let azimuth = if denominator.abs() < DEGENERATE_EPSILON {
        0.0
    } else {
        let cos_az = (dec.sin() - altitude.sin() * lat.sin()) / denominator;
        let raw = if cos_az.is_nan() {
            f64::NAN
        } else {
            cos_az.clamp(-1.0, 1.0).acos()
        };
        if hour_angle.sin() > 0.0 {
            2.0 * std::f64::consts::PI - raw
        } else {
            raw
        }
    };

    Horizontal {
        azimuth: normalize_degrees(azimuth.to_degrees()),
        altitude: altitude.to_degrees(),
    }
}
