//! Catalog processing: turn catalog records into renderable sky objects.
//!
//! For every record the pipeline runs
//!
//! 1. magnitude filter (`magnitude <= limit` is kept)
//! 2. RA hours to degrees, then equatorial to horizontal using one LST per call
//! 3. panoramic projection onto the viewport
//! 4. color and marker size from the appearance mapper
//!
//! Only objects the projector marks visible are returned, in input order.
//! Non-finite coordinates are not rejected up front; NaN flows through the
//! transform and the visibility test drops it.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::appearance::{color_for, size_for, SpectralClass, StarColor};
use crate::catalogs::{CatalogEntry, CelestialTarget, DeepSkyObject};
use crate::coordinates::{Equatorial, Horizontal};
use crate::observer::ObserverContext;
use crate::projection::{ProjectionConfig, ScreenPosition, Viewport};

/// A star placed on screen, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableObject {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub horizontal: Horizontal,
    pub screen: ScreenPosition,
    pub color: StarColor,
    /// Marker size in pixels
    pub size: f64,
}

/// A deep-sky object placed on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableDeepSky {
    #[serde(flatten)]
    pub object: DeepSkyObject,
    pub horizontal: Horizontal,
    pub screen: ScreenPosition,
}

/// Place one target on the viewport.
///
/// This is the per-object step shared by the star and deep-sky pipelines.
///
/// # Arguments
/// * `target` - Anything with RA (hours) and Dec (degrees)
/// * `lst_deg` - Local sidereal time in degrees
/// * `latitude_deg` - Observer latitude in degrees
/// * `viewport` - Canvas size
/// * `config` - Projection constants
///
/// # Returns
/// Horizontal position and screen placement (which may be invisible)
pub fn place<T: CelestialTarget>(
    target: &T,
    lst_deg: f64,
    latitude_deg: f64,
    viewport: &Viewport,
    config: &ProjectionConfig,
) -> (Horizontal, ScreenPosition) {
    let equatorial = Equatorial::from_hours_degrees(target.ra_hours(), target.dec_degrees());
    if !equatorial.is_finite() {
        debug!(
            "{} has non-finite coordinates (ra {}h, dec {}°), it will not be visible",
            target.label(),
            target.ra_hours(),
            target.dec_degrees()
        );
    }

    let horizontal = equatorial.to_horizontal(lst_deg, latitude_deg);
    let screen = config.project_horizontal(&horizontal, viewport);
    (horizontal, screen)
}

/// Process star catalog entries with the default projection constants.
///
/// See [`process_catalog_with`].
pub fn process_catalog(
    entries: &[CatalogEntry],
    context: &ObserverContext,
    viewport: Viewport,
    magnitude_limit: f64,
) -> Vec<RenderableObject> {
    process_catalog_with(
        &ProjectionConfig::default(),
        entries,
        context,
        viewport,
        magnitude_limit,
    )
}

/// Process star catalog entries into the visible renderable list.
///
/// Entries fainter than `magnitude_limit` are dropped before any placement.
/// The result keeps the relative order of `entries` and holds only objects
/// with `screen.visible == true`.
pub fn process_catalog_with(
    config: &ProjectionConfig,
    entries: &[CatalogEntry],
    context: &ObserverContext,
    viewport: Viewport,
    magnitude_limit: f64,
) -> Vec<RenderableObject> {
    let lst = context.local_sidereal_time();
    let latitude = context.location.latitude;

    let visible: Vec<RenderableObject> = entries
        .iter()
        .filter(|entry| entry.magnitude <= magnitude_limit)
        .filter_map(|entry| {
            let (horizontal, screen) = place(entry, lst, latitude, &viewport, config);
            screen.visible.then(|| RenderableObject {
                entry: entry.clone(),
                horizontal,
                screen,
                color: color_for(&entry.spectral_class),
                size: size_for(entry.magnitude),
            })
        })
        .collect();

    debug!(
        "{} of {} stars visible at LST {:.4}°",
        visible.len(),
        entries.len(),
        lst
    );
    visible
}

/// Process deep-sky objects with the default projection constants.
///
/// See [`process_deep_sky_with`].
pub fn process_deep_sky(
    objects: &[DeepSkyObject],
    context: &ObserverContext,
    viewport: Viewport,
    magnitude_limit: f64,
) -> Vec<RenderableDeepSky> {
    process_deep_sky_with(
        &ProjectionConfig::default(),
        objects,
        context,
        viewport,
        magnitude_limit,
    )
}

/// Process deep-sky objects into the visible renderable list.
///
/// Objects without a magnitude count as magnitude 99 for the limit test.
pub fn process_deep_sky_with(
    config: &ProjectionConfig,
    objects: &[DeepSkyObject],
    context: &ObserverContext,
    viewport: Viewport,
    magnitude_limit: f64,
) -> Vec<RenderableDeepSky> {
    let lst = context.local_sidereal_time();
    let latitude = context.location.latitude;

    let visible: Vec<RenderableDeepSky> = objects
        .iter()
        .filter(|object| object.filter_magnitude() <= magnitude_limit)
        .filter_map(|object| {
            let (horizontal, screen) = place(object, lst, latitude, &viewport, config);
            screen.visible.then(|| RenderableDeepSky {
                object: object.clone(),
                horizontal,
                screen,
            })
        })
        .collect();

    debug!(
        "{} of {} deep-sky objects visible at LST {:.4}°",
        visible.len(),
        objects.len(),
        lst
    );
    visible
}

/// User-facing filter over already processed stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarFilter {
    /// Faintest magnitude shown
    pub magnitude_limit: f64,
    /// Spectral classes shown
    pub spectral_classes: Vec<SpectralClass>,
}

impl Default for StarFilter {
    fn default() -> Self {
        Self {
            magnitude_limit: 6.0,
            spectral_classes: SpectralClass::ALL.to_vec(),
        }
    }
}

impl StarFilter {
    /// Objects passing both the magnitude and the spectral class test.
    ///
    /// A star whose spectral letter is not one of O, B, A, F, G, K, M never
    /// passes.
    pub fn apply<'a>(&self, objects: &'a [RenderableObject]) -> Vec<&'a RenderableObject> {
        objects
            .iter()
            .filter(|object| object.entry.magnitude <= self.magnitude_limit)
            .filter(|object| {
                SpectralClass::from_designation(&object.entry.spectral_class)
                    .is_some_and(|class| self.spectral_classes.contains(&class))
            })
            .collect()
    }
}
