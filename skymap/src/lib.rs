//! Celestial coordinate pipeline for an interactive star map.
//!
//! This crate turns star and deep-sky catalog records into screen positions
//! for a given observer location and time. The stages, leaf first:
//!
//! - [`time`] - UTC to Julian Day, Greenwich and local sidereal time
//! - [`coordinates`] - equatorial (RA/Dec) to horizontal (azimuth/altitude)
//! - [`projection`] - horizontal to a panoramic 2D viewport with visibility
//! - [`appearance`] - spectral class to color, magnitude to marker size
//! - [`processor`] - runs the stages over a catalog and keeps what is visible
//!
//! Supporting modules hold the observer context ([`observer`]), catalog
//! records and parsers ([`catalogs`]) and persisted settings ([`config`]).
//!
//! Everything is synchronous and pure: the same catalog, observer, viewport
//! and projection constants always produce the same output.

pub mod appearance;
pub mod catalogs;
pub mod config;
pub mod coordinates;
pub mod observer;
pub mod processor;
pub mod projection;
pub mod time;

pub use appearance::{color_for, size_for, SpectralClass, StarColor};
pub use catalogs::{CatalogEntry, CatalogError, CelestialTarget, DeepSkyObject, DeepSkyType};
pub use config::SkyMapConfig;
pub use coordinates::{equatorial_to_horizontal, Equatorial, Horizontal};
pub use observer::{Location, ObserverContext, ObserverError};
pub use processor::{
    process_catalog, process_catalog_with, process_deep_sky, process_deep_sky_with,
    RenderableDeepSky, RenderableObject, StarFilter,
};
pub use projection::{project, ProjectionConfig, ScreenPosition, Viewport};
pub use time::{greenwich_mean_sidereal_time, julian_day, local_sidereal_time};
