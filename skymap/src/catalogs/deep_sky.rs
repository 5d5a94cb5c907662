//! Deep-sky objects (galaxies, nebulae, clusters) and the OpenNGC JSON reader.
//!
//! OpenNGC records look like
//!
//! ```text
//! { "id": 224, "name": "Andromeda Galaxy", "cat": "NGC", "type": "G",
//!   "ra": 0.7123, "dec": 41.269, "mag": 3.4, "size": 190.0 }
//! ```
//!
//! with RA in hours. `cat` may be spelled `catalog`, and `id` may be either
//! a number or a string.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{CatalogError, CelestialTarget, UNKNOWN_MAGNITUDE};

/// Catalog label used when a record does not name one
const DEFAULT_CATALOG: &str = "NGC";

/// Broad morphological class of a deep-sky object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepSkyType {
    Galaxy,
    Nebula,
    Cluster,
    PlanetaryNebula,
    Other,
}

impl DeepSkyType {
    /// Map an OpenNGC type code (`G`, `N`, `OC`, `GC`, `PN`, ...)
    pub fn from_code(code: &str) -> Self {
        match code {
            "G" => DeepSkyType::Galaxy,
            "N" => DeepSkyType::Nebula,
            "OC" | "GC" => DeepSkyType::Cluster,
            "PN" => DeepSkyType::PlanetaryNebula,
            _ => DeepSkyType::Other,
        }
    }
}

impl fmt::Display for DeepSkyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeepSkyType::Galaxy => "galaxy",
            DeepSkyType::Nebula => "nebula",
            DeepSkyType::Cluster => "cluster",
            DeepSkyType::PlanetaryNebula => "planetary nebula",
            DeepSkyType::Other => "other",
        };
        f.write_str(name)
    }
}

/// A deep-sky catalog object before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepSkyObject {
    /// `<catalog>-<number>`, e.g. `NGC-224`
    pub id: String,
    pub name: String,
    /// Source catalog label (NGC, IC, Messier, ...)
    pub catalog: String,
    pub object_type: DeepSkyType,
    /// Right ascension in decimal hours
    pub ra_hours: f64,
    /// Declination in decimal degrees
    pub dec_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// Largest apparent dimension in arcminutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_arcmin: Option<f64>,
}

impl CelestialTarget for DeepSkyObject {
    fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    fn label(&self) -> &str {
        &self.id
    }
}

/// Selection applied while reading OpenNGC data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenNgcQuery {
    /// Faintest magnitude kept; records without a magnitude count as 99
    pub max_mag: f64,
    /// Stop after this many objects
    pub limit: usize,
    /// Keep only this type, e.g. galaxies for a galaxy layer
    pub object_type: Option<DeepSkyType>,
}

impl Default for OpenNgcQuery {
    fn default() -> Self {
        Self {
            max_mag: 13.0,
            limit: 1500,
            object_type: None,
        }
    }
}

impl OpenNgcQuery {
    /// Galaxies only, with the default magnitude limit and row cap
    pub fn galaxies() -> Self {
        Self {
            object_type: Some(DeepSkyType::Galaxy),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenNgcRecord {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "catalog")]
    cat: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    ra: Option<f64>,
    #[serde(default)]
    dec: Option<f64>,
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    size: Option<f64>,
}

impl OpenNgcRecord {
    fn id_text(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => "?".to_string(),
            other => other.to_string(),
        }
    }

    fn object_type(&self) -> DeepSkyType {
        DeepSkyType::from_code(self.kind.as_deref().unwrap_or(""))
    }

    fn into_object(self) -> DeepSkyObject {
        let number = self.id_text();
        let object_type = self.object_type();
        let catalog = self
            .cat
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG.to_string());
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("{catalog} {number}"));

        DeepSkyObject {
            id: format!("{catalog}-{number}"),
            name,
            object_type,
            catalog,
            ra_hours: self.ra.unwrap_or(f64::NAN),
            dec_deg: self.dec.unwrap_or(f64::NAN),
            magnitude: self.mag,
            size_arcmin: self.size,
        }
    }
}

/// Parse an OpenNGC JSON array into deep-sky objects.
///
/// Record handling:
/// - records fainter than `query.max_mag` (missing magnitude = 99) are skipped
/// - with `query.object_type` set, other types are skipped
/// - a null or missing RA/Dec becomes NaN, so the object is never visible
/// - a record that does not have the OpenNGC shape is logged and skipped
///
/// Reading stops once `query.limit` objects are collected. Only input that
/// is not a JSON array at all is an error.
pub fn parse_open_ngc<R: Read>(
    reader: R,
    query: &OpenNgcQuery,
) -> Result<Vec<DeepSkyObject>, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    let total = records.len();
    let mut objects = Vec::new();
    let mut skipped = 0usize;

    for (index, value) in records.into_iter().enumerate() {
        if objects.len() >= query.limit {
            break;
        }

        let record: OpenNgcRecord = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping malformed OpenNGC record {}: {}", index, e);
                skipped += 1;
                continue;
            }
        };

        if record.mag.unwrap_or(UNKNOWN_MAGNITUDE) > query.max_mag {
            continue;
        }
        if query
            .object_type
            .is_some_and(|wanted| record.object_type() != wanted)
        {
            continue;
        }

        objects.push(record.into_object());
    }

    if skipped > 0 {
        debug!("Skipped {} malformed OpenNGC records", skipped);
    }
    info!(
        "Parsed {} of {} deep-sky objects from OpenNGC data",
        objects.len(),
        total
    );
    Ok(objects)
}

/// Read an OpenNGC JSON file from disk.
pub fn load_open_ngc<P: AsRef<Path>>(
    path: P,
    query: &OpenNgcQuery,
) -> Result<Vec<DeepSkyObject>, CatalogError> {
    let file = File::open(path.as_ref())?;
    parse_open_ngc(BufReader::new(file), query)
}
