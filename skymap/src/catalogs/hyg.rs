//! HYG star database (v3) CSV parser.
//!
//! The HYG file carries one star per row with a header line. Only the
//! columns `id, proper, ra, dec, mag, spect, dist` are read; RA is already in
//! hours and distance is in parsecs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use super::{CatalogEntry, CatalogError, UNKNOWN_MAGNITUDE};

/// Light-years per parsec
const LY_PER_PARSEC: f64 = 3.261_563_777;

/// HYG writes this distance (parsecs) when the parallax is unknown
const HYG_UNKNOWN_DISTANCE_PC: f64 = 100_000.0;

/// Selection applied while reading a HYG file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HygQuery {
    /// Brightest magnitude kept
    pub min_mag: f64,
    /// Faintest magnitude kept
    pub max_mag: f64,
    /// Stop after this many stars
    pub limit: usize,
}

impl Default for HygQuery {
    fn default() -> Self {
        Self {
            min_mag: -99.0,
            max_mag: 10.0,
            limit: 2000,
        }
    }
}

struct Columns {
    id: usize,
    name: usize,
    ra: usize,
    dec: usize,
    mag: usize,
    spect: usize,
    dist: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            id: find("id")?,
            name: find("proper")?,
            ra: find("ra")?,
            dec: find("dec")?,
            mag: find("mag")?,
            spect: find("spect")?,
            dist: find("dist")?,
        })
    }
}

fn parse_field(record: &csv::StringRecord, idx: usize) -> f64 {
    record
        .get(idx)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn text_field(record: &csv::StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// Parse HYG CSV data into catalog entries.
///
/// Row handling:
/// - a finite magnitude outside `[min_mag, max_mag]` skips the row; a
///   missing magnitude is kept and recorded as 99
/// - rows without finite RA/Dec are skipped
/// - name falls back to `HYG <id>`, spectral class to `G`
/// - distance is converted to light-years; the "unknown" sentinel is dropped
///
/// # Arguments
/// * `reader` - CSV source with a header row
/// * `query` - Magnitude window and row limit
///
/// # Returns
/// Entries in file order, at most `query.limit` of them
pub fn parse_hyg_csv<R: Read>(
    reader: R,
    query: &HygQuery,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut results = Vec::new();
    let mut skipped = 0usize;

    for record in rdr.records() {
        if results.len() >= query.limit {
            break;
        }

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping malformed HYG row: {}", e);
                skipped += 1;
                continue;
            }
        };

        let mag = parse_field(&record, columns.mag);
        if mag.is_finite() && (mag < query.min_mag || mag > query.max_mag) {
            continue;
        }

        let ra = parse_field(&record, columns.ra);
        let dec = parse_field(&record, columns.dec);
        if !ra.is_finite() || !dec.is_finite() {
            skipped += 1;
            continue;
        }

        let id = text_field(&record, columns.id);
        let name = match text_field(&record, columns.name) {
            "" => format!("HYG {id}"),
            proper => proper.to_string(),
        };
        let spectral_class = match text_field(&record, columns.spect) {
            "" => "G",
            spect => spect,
        };

        let mut entry = CatalogEntry::new(
            id,
            name,
            "",
            ra,
            dec,
            if mag.is_finite() { mag } else { UNKNOWN_MAGNITUDE },
            spectral_class,
        );

        let dist_pc = parse_field(&record, columns.dist);
        if dist_pc.is_finite() && dist_pc > 0.0 && dist_pc < HYG_UNKNOWN_DISTANCE_PC {
            entry = entry.with_distance(dist_pc * LY_PER_PARSEC);
        }

        results.push(entry);
    }

    if skipped > 0 {
        debug!("Skipped {} HYG rows without usable coordinates", skipped);
    }
    info!("Parsed {} stars from HYG catalog", results.len());

    Ok(results)
}

/// Read a HYG CSV file from disk.
///
/// See [`parse_hyg_csv`] for row handling.
pub fn load_hyg_csv<P: AsRef<Path>>(
    path: P,
    query: &HygQuery,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let file = File::open(path.as_ref())?;
    parse_hyg_csv(file, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci
0,,,,,,Sol,0.000000,0.000000,0.0000,0.00,0.00,0.0,-26.700,4.850,G2V,0.656
32263,32349,48915,2491,Gl 244A,9Alp CMa,Sirius,6.752481,-16.716116,2.6371,-546.01,-1223.08,-9.4,-1.440,1.454,A0m...,0.009
1,1,224700,,,,,0.000060,1.089009,219.7802,-5.20,-1.88,0.0,9.100,2.390,F5,0.482
2,2,224690,,,,,0.000283,-19.498837,47.9616,181.21,-0.93,0.0,9.270,5.866,,0.999
3,3,224699,,,,,0.000335,38.859279,442.4779,5.24,-2.91,0.0,12.1,3.900,B9,-0.019
4,4,,,,,,,-51.893546,100000.0000,62.85,0.16,0.0,8.900,2.900,F0V,0.370
5,5,224707,,,,,0.000569,-40.591202,100000.0000,2.53,9.07,0.0,8.590,2.400,G8III,0.902
";

    #[test]
    fn test_parse_sample() {
        let stars = parse_hyg_csv(SAMPLE.as_bytes(), &HygQuery::default()).unwrap();
        // Row 3 is fainter than the default limit, row 4 has no RA
        let ids: Vec<&str> = stars.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "32263", "1", "2", "5"]);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let stars = parse_hyg_csv(SAMPLE.as_bytes(), &HygQuery::default()).unwrap();
        let anonymous = stars.iter().find(|s| s.id == "2").unwrap();
        assert_eq!(anonymous.name, "HYG 2");
        assert_eq!(anonymous.spectral_class, "G");
        assert_eq!(anonymous.constellation, "");
    }

    #[test]
    fn test_distance_conversion() {
        let stars = parse_hyg_csv(SAMPLE.as_bytes(), &HygQuery::default()).unwrap();
        let sirius = stars.iter().find(|s| s.name == "Sirius").unwrap();
        assert_relative_eq!(sirius.distance_ly.unwrap(), 8.6, max_relative = 0.01);

        // Unknown distance sentinel and zero distance are dropped
        let unknown = stars.iter().find(|s| s.id == "5").unwrap();
        assert!(unknown.distance_ly.is_none());
        let sol = stars.iter().find(|s| s.id == "0").unwrap();
        assert!(sol.distance_ly.is_none());
    }

    #[test]
    fn test_magnitude_window_and_limit() {
        let query = HygQuery {
            min_mag: -5.0,
            max_mag: 9.0,
            limit: 10,
        };
        let stars = parse_hyg_csv(SAMPLE.as_bytes(), &query).unwrap();
        let ids: Vec<&str> = stars.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["32263", "5"]);

        let limited = parse_hyg_csv(
            SAMPLE.as_bytes(),
            &HygQuery {
                limit: 2,
                ..HygQuery::default()
            },
        )
        .unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_missing_magnitude_kept_as_faint() {
        let csv = "id,proper,ra,dec,mag,spect,dist\n7,Test,1.0,2.0,,K0,10\n";
        let stars = parse_hyg_csv(csv.as_bytes(), &HygQuery::default()).unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].magnitude, UNKNOWN_MAGNITUDE);
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "id,proper,ra,dec,spect,dist\n1,A,1.0,2.0,G,1\n";
        let err = parse_hyg_csv(csv.as_bytes(), &HygQuery::default()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "mag"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hyg.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let stars = load_hyg_csv(&path, &HygQuery::default()).unwrap();
        assert_eq!(stars.len(), 5);

        assert!(matches!(
            load_hyg_csv(dir.path().join("missing.csv"), &HygQuery::default()),
            Err(CatalogError::Io(_))
        ));
    }
}
