//! Command line sky map
//!
//! Computes which catalog objects are visible for an observer and prints
//! their horizontal coordinates and screen placement, either as a table or
//! as JSON for a renderer.
//!
//! ```text
//! skymap --lat 51.48 --lon -0.13 --time 2024-01-15T20:00:00Z --magnitude 3
//! RUST_LOG=debug skymap --hyg hygdata_v3.csv --deep-sky ngc.json --json
//! ```

use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use serde::Serialize;

use skymap::catalogs::deep_sky::{load_open_ngc, OpenNgcQuery};
use skymap::catalogs::hyg::{load_hyg_csv, HygQuery};
use skymap::catalogs::{bright_stars, search, CatalogEntry};
use skymap::{
    process_catalog_with, process_deep_sky_with, Location, ObserverContext, RenderableDeepSky,
    RenderableObject, SkyMapConfig, Viewport,
};

/// Search hits shown for `--search`
const SEARCH_LIMIT: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "skymap",
    about = "Computes visible stars and deep-sky objects for an observer",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees, north positive (default: Nairobi)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive (default: Nairobi)
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Observation time in RFC 3339 format (default: now)
    #[arg(long, value_parser = parse_time)]
    time: Option<DateTime<Utc>>,

    /// Shift the observation time by this many hours (negative for the past)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_hours: f64,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Faintest star magnitude shown
    #[arg(long, allow_hyphen_values = true)]
    magnitude: Option<f64>,

    /// HYG v3 CSV file to use instead of the bundled bright stars
    #[arg(long)]
    hyg: Option<PathBuf>,

    /// OpenNGC JSON file with deep-sky objects
    #[arg(long)]
    deep_sky: Option<PathBuf>,

    /// Keep only galaxies from the deep-sky file
    #[arg(long)]
    galaxies_only: bool,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// List catalog stars matching a name or constellation and exit
    #[arg(long)]
    search: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time '{s}': {e}"))
}

#[derive(Serialize)]
struct SkyReport<'a> {
    context: &'a ObserverContext,
    lst_deg: f64,
    stars: &'a [RenderableObject],
    deep_sky: &'a [RenderableDeepSky],
}

fn observer_location(lat: Option<f64>, lon: Option<f64>) -> Result<Location, Box<dyn Error>> {
    let home = Location::nairobi();
    match (lat, lon) {
        (None, None) => Ok(home),
        (lat, lon) => Ok(Location::checked(
            lat.unwrap_or(home.latitude),
            lon.unwrap_or(home.longitude),
        )?),
    }
}

fn print_search(entries: &[CatalogEntry], query: &str) {
    let hits = search(entries, query, SEARCH_LIMIT);
    if hits.is_empty() {
        println!("No stars match '{query}'");
        return;
    }
    println!(
        "{:<24} {:<18} {:>6} {:>9} {:>9}",
        "Name", "Constellation", "Mag", "RA (h)", "Dec (°)"
    );
    for entry in hits {
        println!(
            "{:<24} {:<18} {:>6.2} {:>9.4} {:>9.4}",
            entry.name, entry.constellation, entry.magnitude, entry.ra_hours, entry.dec_deg
        );
    }
}

fn print_table(stars: &[RenderableObject], deep_sky: &[RenderableDeepSky]) {
    println!(
        "{:<24} {:>8} {:>8} {:>8} {:>8} {:>8} {:>6}",
        "Name", "Az", "Alt", "X", "Y", "Color", "Size"
    );
    for star in stars {
        println!(
            "{:<24} {:>8.2} {:>8.2} {:>8.1} {:>8.1} {:>8} {:>6.2}",
            star.entry.name,
            star.horizontal.azimuth,
            star.horizontal.altitude,
            star.screen.x,
            star.screen.y,
            star.color.hex(),
            star.size
        );
    }

    if deep_sky.is_empty() {
        return;
    }
    println!();
    println!(
        "{:<24} {:<16} {:>8} {:>8} {:>8} {:>8}",
        "Deep sky", "Type", "Az", "Alt", "X", "Y"
    );
    for dso in deep_sky {
        println!(
            "{:<24} {:<16} {:>8.2} {:>8.2} {:>8.1} {:>8.1}",
            dso.object.name,
            dso.object.object_type.to_string(),
            dso.horizontal.azimuth,
            dso.horizontal.altitude,
            dso.screen.x,
            dso.screen.y
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SkyMapConfig::load_from_file(path)?,
        None => SkyMapConfig::default(),
    };

    let stars: Vec<CatalogEntry> = match &args.hyg {
        Some(path) => load_hyg_csv(path, &HygQuery::default())?,
        None => bright_stars().to_vec(),
    };
    info!("Loaded {} stars", stars.len());

    if let Some(query) = &args.search {
        print_search(&stars, query);
        return Ok(());
    }

    let location = observer_location(args.lat, args.lon)?;
    let time = args.time.unwrap_or_else(Utc::now);
    let context = ObserverContext::new(location, time).shifted_hours(args.offset_hours)?;
    let lst = context.local_sidereal_time();
    info!(
        "Observer {} at {}, LST {:.4}°",
        context.location.label(),
        context.time.to_rfc3339(),
        lst
    );

    let viewport = Viewport::new(
        args.width.unwrap_or(config.viewport.width),
        args.height.unwrap_or(config.viewport.height),
    );
    let magnitude_limit = args.magnitude.unwrap_or(config.star_magnitude_limit);

    let visible_stars = process_catalog_with(
        &config.projection,
        &stars,
        &context,
        viewport,
        magnitude_limit,
    );

    let visible_deep_sky = match &args.deep_sky {
        Some(path) => {
            let query = if args.galaxies_only {
                OpenNgcQuery::galaxies()
            } else {
                OpenNgcQuery::default()
            };
            let objects = load_open_ngc(path, &query)?;
            info!("Loaded {} deep-sky objects", objects.len());
            process_deep_sky_with(
                &config.projection,
                &objects,
                &context,
                viewport,
                config.deep_sky_magnitude_limit,
            )
        }
        None => Vec::new(),
    };
    info!(
        "{} stars and {} deep-sky objects visible",
        visible_stars.len(),
        visible_deep_sky.len()
    );

    if args.json {
        let report = SkyReport {
            context: &context,
            lst_deg: lst,
            stars: &visible_stars,
            deep_sky: &visible_deep_sky,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&visible_stars, &visible_deep_sky);
    }

    Ok(())
}
