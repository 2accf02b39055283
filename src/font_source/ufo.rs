//! UFO sources read through norad
//!
//! UFO stores quadratic outlines as `offcurve` control points followed by a
//! `qcurve` point, which maps directly onto the on/off-curve stream the
//! curve builder expects. Cubic `curve` segments are read the same way and
//! come out as quadratic approximations through the implied midpoint rule.
//! Components keep only their offset. Both losses are logged per glyph.
//! UFO glyphs store no bounding box; the alphabet builder measures the
//! reconstructed outline instead.

use crate::font_source::{ComponentRef, FontMetrics, FontPoint, OutlineSource, RawGlyph};
use anyhow::{Context, Result};
use norad::Font;
use std::path::Path;
use tracing::warn;

/// A loaded UFO, default layer only
pub struct UfoSource {
    font: Font,
}

impl UfoSource {
    /// Load a UFO font directory from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let font = Font::load(path)
            .with_context(|| format!("Failed to load UFO from {}", path.display()))?;
        Ok(Self { font })
    }

    pub fn from_font(font: Font) -> Self {
        Self { font }
    }

    /// Convert a norad glyph to the source-neutral representation
    pub fn raw_glyph(glyph: &norad::Glyph) -> RawGlyph {
        if has_cubic_segments(glyph) {
            warn!(
                "Glyph {} has cubic curves, drawing them as quadratic approximations",
                glyph.name()
            );
        }
        let distorted = distorted_components(glyph);
        if !distorted.is_empty() {
            warn!(
                "Glyph {} scales or skews components {:?}, only their offsets are kept",
                glyph.name(),
                distorted
            );
        }

        let contours: Vec<Vec<FontPoint>> = glyph
            .contours
            .iter()
            .map(|contour| contour.points.iter().map(point_from_norad).collect())
            .collect();

        let components = glyph
            .components
            .iter()
            .map(|component| ComponentRef {
                base: component.base.to_string(),
                x_offset: component.transform.x_offset.round() as i32,
                y_offset: component.transform.y_offset.round() as i32,
            })
            .collect();

        RawGlyph {
            name: glyph.name().to_string(),
            bbox: None,
            codepoints: glyph.codepoints.iter().collect(),
            contours,
            components,
        }
    }
}

impl OutlineSource for UfoSource {
    fn glyph_names(&self) -> Vec<String> {
        self.font
            .default_layer()
            .iter()
            .map(|glyph| glyph.name().to_string())
            .collect()
    }

    fn glyph(&self, name: &str) -> Option<RawGlyph> {
        self.font
            .default_layer()
            .get_glyph(name)
            .map(Self::raw_glyph)
    }

    fn metrics(&self) -> Option<FontMetrics> {
        Some(FontMetrics::from_ufo(&self.font))
    }
}

/// `true` when any contour uses a cubic `curve` point
pub fn has_cubic_segments(glyph: &norad::Glyph) -> bool {
    glyph
        .contours
        .iter()
        .flat_map(|contour| contour.points.iter())
        .any(|point| matches!(point.typ, norad::PointType::Curve))
}

/// Bases of components whose transform is more than a translation
pub fn distorted_components(glyph: &norad::Glyph) -> Vec<String> {
    glyph
        .components
        .iter()
        .filter(|component| {
            let t = &component.transform;
            t.x_scale != 1.0 || t.y_scale != 1.0 || t.xy_scale != 0.0 || t.yx_scale != 0.0
        })
        .map(|component| component.base.to_string())
        .collect()
}

fn point_from_norad(point: &norad::ContourPoint) -> FontPoint {
    FontPoint::new(
        point.x.round() as i32,
        point.y.round() as i32,
        !matches!(point.typ, norad::PointType::OffCurve),
    )
}
