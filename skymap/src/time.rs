//! Time conversion from civil UTC to the astronomical time scales the
//! coordinate transform needs.
//!
//! # Key Functions
//!
//! - **Julian Day**: continuous day count from a Gregorian calendar instant
//! - **Greenwich Mean Sidereal Time**: Earth rotation angle relative to the stars
//! - **Local Sidereal Time**: GMST shifted by the observer's longitude
//!
//! All angles are returned in degrees normalized into `[0, 360)`.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skymap::time::{julian_day, local_sidereal_time};
//!
//! let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(julian_day(&j2000), 2451545.0);
//!
//! let lst = local_sidereal_time(36.8219, &j2000);
//! assert!((0.0..360.0).contains(&lst));
//! ```

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT)
pub const J2000_JD: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Normalize an angle in degrees into `[0, 360)`.
///
/// `f64::rem_euclid` can round a tiny negative input up to exactly 360.0,
/// which is folded back to zero here. Non-finite input stays non-finite.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert a UTC instant to a Julian Day number.
///
/// Uses the Fliegel–Van Flandern integer form of the Gregorian calendar
/// conversion: January and February are counted as months 13 and 14 of the
/// previous year, the day number is built with floor division, and the
/// fractional day is added from the wall-clock time with noon as the origin.
///
/// Sub-second precision is discarded; only whole seconds contribute.
///
/// # Arguments
/// * `time` - Instant to convert
///
/// # Returns
/// Julian Day (days since noon, 4713 BC January 1, proleptic Julian calendar)
pub fn julian_day(time: &DateTime<Utc>) -> f64 {
    let month = time.month() as i64;
    let a = (14 - month).div_euclid(12);
    let y = time.year() as i64 + 4800 - a;
    let m = month + 12 * a - 3;

    let day_number = time.day() as i64
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    day_number as f64
        + (time.hour() as f64 - 12.0) / 24.0
        + time.minute() as f64 / 1440.0
        + time.second() as f64 / 86400.0
}

/// Julian centuries elapsed since J2000.0 for a given Julian Day.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Calculate Greenwich Mean Sidereal Time in degrees.
///
/// ```text
/// GMST = 280.46061837 + 360.98564736629 (JD - 2451545) + 0.000387933 T² - T³ / 38710000
/// ```
///
/// where `T` is Julian centuries since J2000.0. Dates far from J2000 lose
/// precision but are never rejected.
///
/// # Arguments
/// * `time` - UTC instant
///
/// # Returns
/// GMST in degrees, `[0, 360)`
pub fn greenwich_mean_sidereal_time(time: &DateTime<Utc>) -> f64 {
    gmst_from_julian_day(julian_day(time))
}

/// GMST in degrees for an already computed Julian Day.
pub fn gmst_from_julian_day(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let gmst = 280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
        - (t * t * t) / 38710000.0;
    normalize_degrees(gmst)
}

/// Calculate Local Sidereal Time in degrees for an observer longitude.
///
/// # Arguments
/// * `longitude_deg` - Observer longitude, east positive
/// * `time` - UTC instant
///
/// # Returns
/// LST in degrees, `[0, 360)`
pub fn local_sidereal_time(longitude_deg: f64, time: &DateTime<Utc>) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(time) + longitude_deg)
}
