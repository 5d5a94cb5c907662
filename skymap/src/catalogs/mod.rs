//! Star catalogs module
//!
//! This module provides the catalog record types consumed by the pipeline,
//! the bundled bright-star list, and parsers for the HYG star database and
//! the OpenNGC deep-sky catalog.

mod bright_stars;
pub mod deep_sky;
pub mod hyg;

pub use bright_stars::bright_stars;
pub use deep_sky::{DeepSkyObject, DeepSkyType};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Magnitude assumed for records without one; fainter than any realistic limit
pub const UNKNOWN_MAGNITUDE: f64 = 99.0;

/// Errors raised while reading catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Anything with a position on the celestial sphere that the pipeline can place.
pub trait CelestialTarget {
    /// Right ascension in decimal hours
    fn ra_hours(&self) -> f64;

    /// Declination in decimal degrees
    fn dec_degrees(&self) -> f64;

    /// Apparent magnitude, if known
    fn magnitude(&self) -> Option<f64>;

    /// Identifier used in diagnostics
    fn label(&self) -> &str;

    /// Magnitude used for limit filtering; unknown counts as very faint
    fn filter_magnitude(&self) -> f64 {
        self.magnitude().unwrap_or(UNKNOWN_MAGNITUDE)
    }
}

/// One star as delivered by a catalog loader, before any placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique within its catalog (e.g. `HIP32349`)
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    pub constellation: String,
    /// Right ascension in decimal hours, 0-24
    pub ra_hours: f64,
    /// Declination in decimal degrees, -90 to 90
    pub dec_deg: f64,
    /// Apparent visual magnitude
    pub magnitude: f64,
    /// Morgan-Keenan designation such as `A1V`
    pub spectral_class: String,
    /// Effective temperature in Kelvin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_k: Option<f64>,
    /// Distance in light-years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_ly: Option<f64>,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        constellation: impl Into<String>,
        ra_hours: f64,
        dec_deg: f64,
        magnitude: f64,
        spectral_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            common_name: None,
            constellation: constellation.into(),
            ra_hours,
            dec_deg,
            magnitude,
            spectral_class: spectral_class.into(),
            temperature_k: None,
            distance_ly: None,
        }
    }

    pub fn with_common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = Some(common_name.into());
        self
    }

    pub fn with_temperature(mut self, temperature_k: f64) -> Self {
        self.temperature_k = Some(temperature_k);
        self
    }

    pub fn with_distance(mut self, distance_ly: f64) -> Self {
        self.distance_ly = Some(distance_ly);
        self
    }

    /// Case-insensitive substring match on name, common name and constellation.
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .common_name
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
            || self.constellation.to_lowercase().contains(needle)
    }
}

impl CelestialTarget for CatalogEntry {
    fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    fn magnitude(&self) -> Option<f64> {
        Some(self.magnitude)
    }

    fn label(&self) -> &str {
        &self.id
    }
}

/// Search entries by name, common name or constellation.
///
/// Matching is a case-insensitive substring test. A blank query returns no
/// results. At most `limit` entries are returned, in catalog order.
pub fn search<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    limit: usize,
) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| entry.matches_lowercase(&needle))
        .take(limit)
        .collect()
}

/// All entries belonging to a constellation (case-insensitive exact match).
pub fn by_constellation<'a>(
    entries: &'a [CatalogEntry],
    constellation: &str,
) -> Vec<&'a CatalogEntry> {
    let wanted = constellation.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.constellation.to_lowercase() == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("HIP32349", "Sirius", "Canis Major", 6.7525, -16.7161, -1.46, "A1V")
                .with_common_name("Alpha Canis Majoris"),
            CatalogEntry::new("HIP25336", "Betelgeuse", "Orion", 5.4553, 7.4069, 0.50, "M1-2Ia"),
            CatalogEntry::new("HIP24608", "Rigel", "Orion", 5.2422, -8.2017, 0.13, "B8Ia"),
        ]
    }

    #[test]
    fn test_search_matches_all_name_fields() {
        let entries = sample();
        assert_eq!(search(&entries, "sirius", 10).len(), 1);
        assert_eq!(search(&entries, "CANIS", 10)[0].id, "HIP32349");
        assert_eq!(search(&entries, "alpha canis", 10).len(), 1);
        assert_eq!(search(&entries, "orion", 10).len(), 2);
    }

    #[test]
    fn test_search_blank_and_limit() {
        let entries = sample();
        assert!(search(&entries, "   ", 10).is_empty());
        let limited = search(&entries, "i", 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "HIP32349");
    }

    #[test]
    fn test_by_constellation() {
        let entries = sample();
        let orion = by_constellation(&entries, "orion");
        assert_eq!(orion.len(), 2);
        assert!(by_constellation(&entries, "Ori").is_empty());
    }

    #[test]
    fn test_entry_serde_uses_optional_fields() {
        let entry =
            CatalogEntry::new("X1", "Test", "Lyra", 1.0, 2.0, 3.0, "G2V").with_distance(10.0);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("common_name").is_none());
        assert_eq!(json["distance_ly"], 10.0);

        let parsed: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_unknown_magnitude_filters_as_faint() {
        let dso = DeepSkyObject {
            id: "NGC-1".into(),
            name: "NGC 1".into(),
            catalog: "NGC".into(),
            object_type: DeepSkyType::Galaxy,
            ra_hours: 0.1,
            dec_deg: 27.7,
            magnitude: None,
            size_arcmin: None,
        };
        assert_eq!(dso.filter_magnitude(), UNKNOWN_MAGNITUDE);
    }
}
