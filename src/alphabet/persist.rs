//! Alphabet export and import
//!
//! Rebuilding an alphabet from a large UFO is the slow part of a run, so a
//! built alphabet can be written to JSON and loaded back without touching
//! the font again. Instructions are stored as `{command, coordinates}`
//! pairs, the same shape they have in SVG path data.

use crate::alphabet::Alphabet;
use crate::core::errors::LayoutResult;
use crate::geometry::{BoundingBox, Contour, Glyph, PathInstruction, PathStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlphabetRecord {
    pub glyphs: Vec<GlyphRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub name: String,
    pub bbox: BoundingBox,
    #[serde(default)]
    pub codepoints: Vec<char>,
    pub contours: Vec<ContourRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContourRecord {
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
    pub instructions: Vec<InstructionRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstructionRecord {
    pub command: String,
    #[serde(default)]
    pub coordinates: Vec<i32>,
}

fn default_fill() -> String {
    PathStyle::default().fill
}

fn default_stroke() -> String {
    PathStyle::default().stroke
}

fn default_stroke_width() -> u32 {
    PathStyle::default().stroke_width
}

impl From<&PathInstruction> for InstructionRecord {
    fn from(instruction: &PathInstruction) -> Self {
        Self {
            command: instruction.command().to_string(),
            coordinates: instruction.coordinates(),
        }
    }
}

impl From<&Contour> for ContourRecord {
    fn from(contour: &Contour) -> Self {
        Self {
            fill: contour.style.fill.clone(),
            stroke: contour.style.stroke.clone(),
            stroke_width: contour.style.stroke_width,
            instructions: contour.instructions().iter().map(InstructionRecord::from).collect(),
        }
    }
}

impl ContourRecord {
    fn to_contour(&self) -> LayoutResult<Contour> {
        let instructions = self
            .instructions
            .iter()
            .map(|record| PathInstruction::from_parts(&record.command, &record.coordinates))
            .collect::<LayoutResult<Vec<_>>>()?;
        let mut contour = Contour::new(instructions)?;
        contour.style = PathStyle {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
        };
        Ok(contour)
    }
}

impl GlyphRecord {
    fn to_glyph(&self) -> LayoutResult<Glyph> {
        let contours = self
            .contours
            .iter()
            .map(ContourRecord::to_contour)
            .collect::<LayoutResult<Vec<_>>>()?;
        Ok(Glyph::new(self.name.clone(), self.bbox, contours))
    }
}

impl AlphabetRecord {
    pub fn from_alphabet(alphabet: &Alphabet) -> Self {
        let glyphs = alphabet
            .glyphs()
            .map(|glyph| GlyphRecord {
                name: glyph.name.clone(),
                bbox: glyph.initial_bbox(),
                codepoints: alphabet.codepoints_for(&glyph.name),
                contours: glyph.contours().iter().map(ContourRecord::from).collect(),
            })
            .collect();
        Self { glyphs }
    }

    pub fn to_alphabet(&self) -> LayoutResult<Alphabet> {
        let mut alphabet = Alphabet::new();
        for record in &self.glyphs {
            alphabet.insert(record.to_glyph()?, &record.codepoints);
        }
        Ok(alphabet)
    }
}

impl Alphabet {
    /// Write the alphabet's templates to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let record = AlphabetRecord::from_alphabet(self);
        let contents =
            serde_json::to_string_pretty(&record).context("Failed to serialize alphabet")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write alphabet to {}", path.display()))?;
        info!("Saved {} glyphs to {}", self.len(), path.display());
        Ok(())
    }

    /// Load an alphabet written by [`Alphabet::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read alphabet {}", path.display()))?;
        let record: AlphabetRecord = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse alphabet {}", path.display()))?;
        let alphabet = record
            .to_alphabet()
            .with_context(|| format!("Invalid glyph data in {}", path.display()))?;
        info!("Loaded {} glyphs from {}", alphabet.len(), path.display());
        Ok(alphabet)
    }
}
