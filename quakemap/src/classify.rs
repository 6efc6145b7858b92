//! Magnitude classification.
//!
//! Maps an earthquake magnitude onto one of six color bands and onto a
//! marker radius. Bands are held in an ordered table of exclusive lower
//! bounds; a magnitude sitting exactly on a bound belongs to the band below.
//!
//! | Band | Range        | Color     |
//! |------|--------------|-----------|
//! | 0-1  | m <= 1       | `#DAF7A6` |
//! | 1-2  | 1 < m <= 2   | `#FFC300` |
//! | 2-3  | 2 < m <= 3   | `#FF5733` |
//! | 3-4  | 3 < m <= 4   | `#C70039` |
//! | 4-5  | 4 < m <= 5   | `#900C3F` |
//! | 5+   | m > 5        | `#581845` |

use serde::Serialize;
use std::fmt;

/// Multiplier applied to a magnitude to obtain the marker radius in pixels.
pub const RADIUS_SCALE: f64 = 5.0;

/// A CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    /// Creates a color from a static CSS color string.
    pub const fn new(css: &'static str) -> Self {
        Self(css)
    }

    /// Returns the CSS representation (`#RRGGBB` or a named color).
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A half-open magnitude range with its display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeBand {
    /// Exclusive lower bound. `None` for the lowest band, which is unbounded below.
    pub lower_exclusive: Option<f64>,
    /// Display color for magnitudes in this band.
    pub color: Color,
    /// Legend label.
    pub label: &'static str,
}

impl MagnitudeBand {
    /// Returns true if `magnitude` is above this band's lower bound.
    ///
    /// The lowest band admits everything, including NaN.
    fn admits(&self, magnitude: f64) -> bool {
        match self.lower_exclusive {
            Some(bound) => magnitude > bound,
            None => true,
        }
    }
}

/// Band table in ascending magnitude order.
pub const BANDS: [MagnitudeBand; 6] = [
    MagnitudeBand {
        lower_exclusive: None,
        color: Color::new("#DAF7A6"),
        label: "0-1",
    },
    MagnitudeBand {
        lower_exclusive: Some(1.0),
        color: Color::new("#FFC300"),
        label: "1-2",
    },
    MagnitudeBand {
        lower_exclusive: Some(2.0),
        color: Color::new("#FF5733"),
        label: "2-3",
    },
    MagnitudeBand {
        lower_exclusive: Some(3.0),
        color: Color::new("#C70039"),
        label: "3-4",
    },
    MagnitudeBand {
        lower_exclusive: Some(4.0),
        color: Color::new("#900C3F"),
        label: "4-5",
    },
    MagnitudeBand {
        lower_exclusive: Some(5.0),
        color: Color::new("#581845"),
        label: "5+",
    },
];

/// Returns the band a magnitude falls into.
///
/// The table is scanned from the highest band down and the first band whose
/// lower bound is strictly exceeded wins.
pub fn band_for_magnitude(magnitude: f64) -> &'static MagnitudeBand {
    BANDS
        .iter()
        .rev()
        .find(|band| band.admits(magnitude))
        .unwrap_or(&BANDS[0])
}

/// Returns the display color for a magnitude.
#[inline]
pub fn color_for_magnitude(magnitude: f64) -> Color {
    band_for_magnitude(magnitude).color
}

/// Returns the marker radius for a magnitude. Not clamped.
#[inline]
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    magnitude * RADIUS_SCALE
}

/// Color for a magnitude that may be absent from the feed.
///
/// An unknown magnitude lands in the lowest band.
pub fn color_for_optional_magnitude(magnitude: Option<f64>) -> Color {
    magnitude.map_or(BANDS[0].color, color_for_magnitude)
}

/// Radius for a magnitude that may be absent from the feed. Unknown is zero.
pub fn radius_for_optional_magnitude(magnitude: Option<f64>) -> f64 {
    magnitude.map_or(0.0, radius_for_magnitude)
}
