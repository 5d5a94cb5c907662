//! Display attributes derived from catalog data: color from spectral class
//! and marker size from apparent magnitude.
//!
//! # Spectral Classification
//!
//! Stars are bucketed by the first letter of their Morgan-Keenan designation
//! (`"G2V"`, `"M1-2Ia"`, `"B0.5IV"`, ...). The seven main classes run from hot
//! and blue (O) to cool and red (M). A designation starting with any other
//! character falls back to a neutral white.
//!
//! # Examples
//!
//! ```rust
//! use skymap::appearance::{color_for, size_for, StarColor};
//!
//! assert_eq!(color_for("G2V"), StarColor::Yellow);
//! assert_eq!(color_for("G2V").hex(), "#fff4ea");
//! assert_eq!(size_for(20.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest marker size in pixels
pub const MAX_SIZE: f64 = 12.0;

/// Smallest marker size in pixels
pub const MIN_SIZE: f64 = 1.0;

/// The spectral classification system for stars, known as the Morgan-Keenan system.
///
/// The main classes from hottest to coolest are: O, B, A, F, G, K, M.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    /// Very hot blue stars, above 30,000K
    O,
    /// Blue-white stars, 10,000-30,000K
    B,
    /// White stars with strong hydrogen lines, 7,500-10,000K
    A,
    /// Yellow-white stars, 6,000-7,500K
    F,
    /// Yellow stars like our Sun, 5,200-6,000K
    G,
    /// Orange stars, 3,700-5,200K
    K,
    /// Red stars, below 3,700K
    M,
}

impl SpectralClass {
    /// All classes, hottest first
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Parse the class from a full designation by its first character,
    /// ignoring case. Returns `None` for empty or unrecognized designations.
    pub fn from_designation(designation: &str) -> Option<Self> {
        let first = designation.chars().next()?;
        match first.to_ascii_uppercase() {
            'O' => Some(SpectralClass::O),
            'B' => Some(SpectralClass::B),
            'A' => Some(SpectralClass::A),
            'F' => Some(SpectralClass::F),
            'G' => Some(SpectralClass::G),
            'K' => Some(SpectralClass::K),
            'M' => Some(SpectralClass::M),
            _ => None,
        }
    }

    /// Display color for this class
    pub fn color(&self) -> StarColor {
        match self {
            SpectralClass::O => StarColor::Blue,
            SpectralClass::B => StarColor::BlueWhite,
            SpectralClass::A => StarColor::White,
            SpectralClass::F => StarColor::YellowWhite,
            SpectralClass::G => StarColor::Yellow,
            SpectralClass::K => StarColor::Orange,
            SpectralClass::M => StarColor::Red,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SpectralClass::O => 'O',
            SpectralClass::B => 'B',
            SpectralClass::A => 'A',
            SpectralClass::F => 'F',
            SpectralClass::G => 'G',
            SpectralClass::K => 'K',
            SpectralClass::M => 'M',
        };
        write!(f, "{letter}")
    }
}

/// Color token handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarColor {
    Blue,
    BlueWhite,
    White,
    YellowWhite,
    Yellow,
    Orange,
    Red,
    /// Unknown or missing spectral class
    Default,
}

impl StarColor {
    /// CSS hex string for this token
    pub fn hex(&self) -> &'static str {
        match self {
            StarColor::Blue => "#9bb0ff",
            StarColor::BlueWhite => "#aabfff",
            StarColor::White => "#cad7ff",
            StarColor::YellowWhite => "#f8f7ff",
            StarColor::Yellow => "#fff4ea",
            StarColor::Orange => "#ffcc6f",
            StarColor::Red => "#ffaa77",
            StarColor::Default => "#ffffff",
        }
    }
}

impl fmt::Display for StarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Map a spectral designation to its display color.
///
/// Only the first character matters and case is ignored.
pub fn color_for(spectral_class: &str) -> StarColor {
    SpectralClass::from_designation(spectral_class)
        .map(|class| class.color())
        .unwrap_or(StarColor::Default)
}

/// Marker size in pixels for an apparent magnitude.
///
/// ```text
/// size = clamp(8 - 1.2 * magnitude, 1, 12)
/// ```
///
/// Brighter (lower, including negative) magnitudes get larger markers.
pub fn size_for(magnitude: f64) -> f64 {
    (8.0 - magnitude * 1.2).max(MIN_SIZE).min(MAX_SIZE)
}
