//! Raw point dumps in JSON
//!
//! A flat, parser-free outline format: one record per glyph with its box,
//! codepoints, point lists and component references. Handy for feeding
//! outlines extracted by other tools and for tests.
//!
//! ```json
//! { "units_per_em": 1000,
//!   "glyphs": [ { "name": "l", "bbox": [80, 0, 180, 700], "codepoints": ["l"],
//!                 "contours": [[{"x": 80, "y": 0, "on_curve": true}, ...]] } ] }
//! ```

use crate::font_source::{FontMetrics, OutlineSource, RawGlyph};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JsonOutlineSource {
    #[serde(default)]
    pub units_per_em: Option<f64>,
    pub glyphs: Vec<RawGlyph>,
}

impl JsonOutlineSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read outline dump {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse outline dump {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

impl OutlineSource for JsonOutlineSource {
    fn glyph_names(&self) -> Vec<String> {
        self.glyphs.iter().map(|glyph| glyph.name.clone()).collect()
    }

    fn glyph(&self, name: &str) -> Option<RawGlyph> {
        self.glyphs.iter().find(|glyph| glyph.name == name).cloned()
    }

    fn metrics(&self) -> Option<FontMetrics> {
        self.units_per_em.map(FontMetrics::from_units_per_em)
    }
}
