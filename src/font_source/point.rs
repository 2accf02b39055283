//! Raw outline points as they come out of a font source
//!
//! TrueType-style outlines store a contour as a cyclic list of points, each
//! flagged as lying on the curve or acting as a quadratic control point.

use serde::{Deserialize, Serialize};

/// A single outline point in font design units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontPoint {
    pub x: i32,
    pub y: i32,
    /// `true` for points on the outline, `false` for quadratic control points
    pub on_curve: bool,
}

impl FontPoint {
    pub fn new(x: i32, y: i32, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    /// Create a point lying on the outline
    pub fn on(x: i32, y: i32) -> Self {
        Self::new(x, y, true)
    }

    /// Create an off-curve control point
    pub fn off(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }

    /// The implied on-curve point halfway between `self` and `other`.
    ///
    /// Halves round away from zero, so (1, -1) and (2, -2) meet at (2, -2).
    pub fn midpoint(&self, other: &FontPoint) -> FontPoint {
        FontPoint::on(
            round_half(self.x as i64 + other.x as i64),
            round_half(self.y as i64 + other.y as i64),
        )
    }
}

fn round_half(sum: i64) -> i32 {
    (sum as f64 / 2.0).round() as i32
}

/// A reference from a composite glyph to a base glyph, with a design-unit offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub base: String,
    #[serde(default)]
    pub x_offset: i32,
    #[serde(default)]
    pub y_offset: i32,
}
