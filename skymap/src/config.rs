//! Persistent sky map settings.
//!
//! Stored as pretty-printed JSON. Every field has a default, so a file only
//! needs to name what it changes:
//!
//! ```json
//! { "star_magnitude_limit": 4.5, "projection": { "visibility_margin_px": 50.0 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::projection::{ProjectionConfig, Viewport};

/// Faintest star magnitude drawn by default (naked-eye limit)
pub const DEFAULT_STAR_MAGNITUDE_LIMIT: f64 = 6.0;

/// Faintest deep-sky magnitude drawn by default
pub const DEFAULT_DEEP_SKY_MAGNITUDE_LIMIT: f64 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyMapConfig {
    pub projection: ProjectionConfig,
    /// Canvas size used when none is given
    pub viewport: Viewport,
    pub star_magnitude_limit: f64,
    pub deep_sky_magnitude_limit: f64,
}

impl Default for SkyMapConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            viewport: Viewport::default(),
            star_magnitude_limit: DEFAULT_STAR_MAGNITUDE_LIMIT,
            deep_sky_magnitude_limit: DEFAULT_DEEP_SKY_MAGNITUDE_LIMIT,
        }
    }
}

impl SkyMapConfig {
    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skymap.json");

        let config = SkyMapConfig {
            viewport: Viewport::new(800.0, 600.0),
            star_magnitude_limit: 4.5,
            ..SkyMapConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = SkyMapConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"projection": {"visibility_margin_px": 50.0}}"#).unwrap();

        let loaded = SkyMapConfig::load_from_file(&path).unwrap();
        assert_relative_eq!(loaded.projection.visibility_margin_px, 50.0);
        assert_relative_eq!(loaded.projection.min_altitude_deg, -30.0);
        assert_relative_eq!(loaded.star_magnitude_limit, 6.0);
        assert_relative_eq!(loaded.deep_sky_magnitude_limit, 11.0);
        assert_eq!(loaded.viewport, Viewport::default());
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SkyMapConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = SkyMapConfig::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
