//! Layout settings
//!
//! One flat record holds every tunable number of a run. Page sizes are in
//! millimetres; spacing values are in page units, `scale` units per mm.

use crate::alphabet::LoadOptions;
use crate::layout::{ColorMode, WeightStyle};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub page_width_mm: u32,
    pub page_height_mm: u32,
    /// Page units per millimetre
    pub scale: u32,
    /// Margin on every side of the page
    pub padding_mm: u32,
    /// Space after every glyph
    pub letter_spacing: i32,
    /// Distance between baselines
    pub line_height: i32,
    /// Default space between words before justification
    pub word_gap: i32,
    /// Sampling density of the backing image
    pub pixels_per_mm: u32,
    /// Contrast factor applied to the image, 1.0 leaves it unchanged
    pub contrast: f32,
    pub min_stroke_width: u32,
    pub max_stroke_width: u32,
    pub mode: ColorMode,
    pub stroke_color: String,
    pub fill: String,
    /// Negate Y at load time, converting font Y-up to page Y-down
    pub flip_horizontal: bool,
    /// Negate X at load time
    pub flip_vertical: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page_width_mm: 210,
            page_height_mm: 297,
            scale: 400,
            padding_mm: 10,
            letter_spacing: 150,
            line_height: 1200,
            word_gap: 350,
            pixels_per_mm: 1,
            contrast: 1.5,
            min_stroke_width: 50,
            max_stroke_width: 200,
            mode: ColorMode::Stroke,
            stroke_color: "black".to_string(),
            fill: "none".to_string(),
            flip_horizontal: true,
            flip_vertical: false,
        }
    }
}

impl LayoutSettings {
    /// Read a settings file; keys it omits keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;
        debug!("Loaded layout settings from {:?}", path);
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings {}", path.display()))?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Reject values that make the page empty or the layout loop endless
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 || self.pixels_per_mm == 0 {
            bail!("scale and pixels_per_mm must be positive");
        }
        if 2 * self.padding_mm >= self.page_width_mm || 2 * self.padding_mm >= self.page_height_mm {
            bail!(
                "Padding of {} mm leaves no room on a {}x{} mm page",
                self.padding_mm,
                self.page_width_mm,
                self.page_height_mm
            );
        }
        if self.line_height <= 0 {
            bail!("line_height must be positive, got {}", self.line_height);
        }
        if self.min_stroke_width > self.max_stroke_width {
            bail!(
                "min_stroke_width {} exceeds max_stroke_width {}",
                self.min_stroke_width,
                self.max_stroke_width
            );
        }
        Ok(())
    }

    pub fn min_x(&self) -> i64 {
        self.padding_mm as i64 * self.scale as i64
    }

    pub fn max_x(&self) -> i64 {
        (self.page_width_mm as i64 - self.padding_mm as i64) * self.scale as i64
    }

    pub fn min_y(&self) -> i64 {
        self.padding_mm as i64 * self.scale as i64
    }

    pub fn max_y(&self) -> i64 {
        (self.page_height_mm as i64 - self.padding_mm as i64) * self.scale as i64
    }

    pub fn usable_width(&self) -> i64 {
        self.max_x() - self.min_x()
    }

    /// Size of the sampling grid in pixels
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (
            self.page_width_mm * self.pixels_per_mm,
            self.page_height_mm * self.pixels_per_mm,
        )
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            flip_horizontal: self.flip_horizontal,
            flip_vertical: self.flip_vertical,
        }
    }

    pub fn weight_style(&self) -> WeightStyle {
        WeightStyle {
            mode: self.mode,
            min_stroke_width: self.min_stroke_width,
            max_stroke_width: self.max_stroke_width,
            stroke_color: self.stroke_color.clone(),
            fill: self.fill.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_bounds() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.min_x(), 4_000);
        assert_eq!(settings.max_x(), 80_000);
        assert_eq!(settings.max_y(), 114_800);
        assert_eq!(settings.usable_width(), 76_000);
        assert_eq!(settings.pixel_dimensions(), (210, 297));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: LayoutSettings =
            serde_json::from_str(r#"{"scale": 100, "mode": "color"}"#).unwrap();
        assert_eq!(settings.scale, 100);
        assert_eq!(settings.mode, ColorMode::Color);
        assert_eq!(settings.line_height, 1200);
    }

    #[test]
    fn test_validate_rejects_oversized_padding() {
        let settings = LayoutSettings {
            padding_mm: 105,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = LayoutSettings {
            word_gap: 500,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(LayoutSettings::load(&path).unwrap(), settings);
    }
}
