//! Panoramic projection of horizontal coordinates onto a 2D viewport.
//!
//! The sky is unrolled into a cylinder: azimuth spans the full viewport width
//! and a fixed altitude band spans the full height. This is not a dome
//! projection; it is chosen so that panning is a plain horizontal scroll, and
//! the renderer depends on exactly this mapping.
//!
//! # Mapping
//!
//! ```text
//! x = (az mod 360) / 360 * width
//! y = height - (clamp(alt, -30, 90) + 30) / 120 * height
//! visible = alt > -25  &&  (x, y) inside the viewport grown by 100 px
//! ```
//!
//! The altitude band, margin and visibility threshold are carried by
//! [`ProjectionConfig`]. Changing them changes what the renderer shows.

use serde::{Deserialize, Serialize};

use crate::coordinates::Horizontal;
use crate::time::normalize_degrees;

/// Lowest altitude mapped onto the viewport (bottom edge)
pub const DEFAULT_MIN_ALTITUDE_DEG: f64 = -30.0;

/// Highest altitude mapped onto the viewport (top edge)
pub const DEFAULT_MAX_ALTITUDE_DEG: f64 = 90.0;

/// Objects at or below this altitude are never visible
pub const DEFAULT_MIN_VISIBLE_ALTITUDE_DEG: f64 = -25.0;

/// Pixels by which the viewport is grown on every side for the visibility test
pub const DEFAULT_VISIBILITY_MARGIN_PX: f64 = 100.0;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when `(x, y)` lies within the viewport grown by `margin` on every side
    pub fn contains_with_margin(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}

impl Default for Viewport {
    /// Full HD canvas, the size assumed before the first resize event
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Screen placement of a projected object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
    /// Sole authority on whether the object is drawn
    pub visible: bool,
}

/// Tunable constants of the panoramic projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Altitude at the bottom edge of the viewport in degrees
    pub min_altitude_deg: f64,
    /// Altitude at the top edge of the viewport in degrees
    pub max_altitude_deg: f64,
    /// Objects must be strictly above this altitude to be visible
    pub min_visible_altitude_deg: f64,
    /// Extra pixels around the viewport still counted as on screen
    pub visibility_margin_px: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            min_altitude_deg: DEFAULT_MIN_ALTITUDE_DEG,
            max_altitude_deg: DEFAULT_MAX_ALTITUDE_DEG,
            min_visible_altitude_deg: DEFAULT_MIN_VISIBLE_ALTITUDE_DEG,
            visibility_margin_px: DEFAULT_VISIBILITY_MARGIN_PX,
        }
    }
}

impl ProjectionConfig {
    /// Span of the altitude band in degrees (120 with the defaults)
    pub fn altitude_span(&self) -> f64 {
        self.max_altitude_deg - self.min_altitude_deg
    }

    /// Project azimuth/altitude in degrees onto the viewport.
    ///
    /// NaN input yields NaN coordinates and `visible = false`, since every
    /// comparison against NaN is false.
    pub fn project(&self, azimuth: f64, altitude: f64, viewport: &Viewport) -> ScreenPosition {
        let x = normalize_degrees(azimuth) / 360.0 * viewport.width;

        let clamped_alt = if altitude.is_nan() {
            altitude
        } else {
            altitude.clamp(self.min_altitude_deg, self.max_altitude_deg)
        };
        let y = viewport.height
            - (clamped_alt - self.min_altitude_deg) / self.altitude_span() * viewport.height;

        let visible = altitude > self.min_visible_altitude_deg
            && viewport.contains_with_margin(x, y, self.visibility_margin_px);

        ScreenPosition { x, y, visible }
    }

    /// Project a [`Horizontal`] position onto the viewport.
    pub fn project_horizontal(&self, position: &Horizontal, viewport: &Viewport) -> ScreenPosition {
        self.project(position.azimuth, position.altitude, viewport)
    }
}

/// Project azimuth/altitude in degrees with the default projection constants.
///
/// # Examples
/// ```rust
/// use skymap::projection::{project, Viewport};
///
/// let viewport = Viewport::new(1200.0, 600.0);
/// let zenith_south = project(180.0, 90.0, &viewport);
/// assert_eq!(zenith_south.x, 600.0);
/// assert_eq!(zenith_south.y, 0.0);
/// assert!(zenith_south.visible);
/// ```
pub fn project(azimuth: f64, altitude: f64, viewport: &Viewport) -> ScreenPosition {
    ProjectionConfig::default().project(azimuth, altitude, viewport)
}
