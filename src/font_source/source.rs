//! The interface between font parsers and the alphabet builder

use crate::font_source::{ComponentRef, FontPoint};
use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// One glyph as a font source hands it over: raw points, no curves yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGlyph {
    pub name: String,
    /// Design-unit bounds; computed from the outline when the source has none
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub codepoints: Vec<char>,
    #[serde(default)]
    pub contours: Vec<Vec<FontPoint>>,
    #[serde(default)]
    pub components: Vec<ComponentRef>,
}

impl RawGlyph {
    pub fn is_composite(&self) -> bool {
        !self.components.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty() && self.components.is_empty()
    }
}

/// Anything that can list glyphs and hand out their raw outlines.
pub trait OutlineSource {
    /// Glyph names in source order
    fn glyph_names(&self) -> Vec<String>;

    fn glyph(&self, name: &str) -> Option<RawGlyph>;

    /// Vertical metrics of the font, when the format carries them
    fn metrics(&self) -> Option<crate::font_source::FontMetrics> {
        None
    }
}
