//! Visual weight derived from the backing image

use crate::geometry::Glyph;
use serde::{Deserialize, Serialize};

/// How a sampled pixel is turned into glyph presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Darker pixels draw thicker strokes
    #[default]
    Stroke,
    /// Stroke color is the pixel's gray value
    Grayscale,
    /// Stroke color is the pixel's RGB value
    Color,
}

/// Pixel data at one glyph's sampling point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub brightness: u8,
    pub rgb: [u8; 3],
}

/// Stroke range and fixed presentation for weighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightStyle {
    pub mode: ColorMode,
    pub min_stroke_width: u32,
    pub max_stroke_width: u32,
    pub stroke_color: String,
    pub fill: String,
}

impl WeightStyle {
    /// Linear from `max_stroke_width` at black to `min_stroke_width` at white
    pub fn stroke_width_for(&self, brightness: u8) -> u32 {
        let max = self.max_stroke_width as f64;
        let min = self.min_stroke_width as f64;
        let t = brightness as f64 / 255.0;
        (max + (min - max) * t).round().max(0.0) as u32
    }

    /// Apply the weight for `sample` to every contour of `glyph`
    pub fn apply(&self, glyph: &mut Glyph, sample: Sample) {
        glyph.set_fill(&self.fill);
        match self.mode {
            ColorMode::Stroke => {
                glyph.set_color(&self.stroke_color);
                glyph.set_stroke_width(self.stroke_width_for(sample.brightness));
            }
            ColorMode::Grayscale => {
                let v = sample.brightness;
                glyph.set_color(&format!("rgb({v},{v},{v})"));
                glyph.set_stroke_width(self.max_stroke_width);
            }
            ColorMode::Color => {
                let [r, g, b] = sample.rgb;
                glyph.set_color(&format!("rgb({r},{g},{b})"));
                glyph.set_stroke_width(self.max_stroke_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BoundingBox, Contour, PathInstruction};

    fn style(mode: ColorMode) -> WeightStyle {
        WeightStyle {
            mode,
            min_stroke_width: 50,
            max_stroke_width: 200,
            stroke_color: "black".to_string(),
            fill: "none".to_string(),
        }
    }

    fn dot() -> Glyph {
        let contour = Contour::new(vec![
            PathInstruction::MoveTo { x: 0, y: 0 },
            PathInstruction::RelLineTo { dx: 10, dy: 0 },
            PathInstruction::Close,
        ])
        .unwrap();
        Glyph::new("dot", BoundingBox::new(0, 0, 10, 10), vec![contour])
    }

    #[test]
    fn test_stroke_width_interpolates_between_bounds() {
        let style = style(ColorMode::Stroke);
        assert_eq!(style.stroke_width_for(0), 200);
        assert_eq!(style.stroke_width_for(255), 50);
        assert_eq!(style.stroke_width_for(170), 100);
    }

    #[test]
    fn test_grayscale_sets_gray_color() {
        let mut glyph = dot();
        style(ColorMode::Grayscale).apply(&mut glyph, Sample { brightness: 42, rgb: [1, 2, 3] });
        assert_eq!(glyph.contours()[0].style.stroke, "rgb(42,42,42)");
        assert_eq!(glyph.contours()[0].style.stroke_width, 200);
    }

    #[test]
    fn test_color_uses_sampled_rgb() {
        let mut glyph = dot();
        style(ColorMode::Color).apply(&mut glyph, Sample { brightness: 42, rgb: [1, 2, 3] });
        assert_eq!(glyph.contours()[0].style.stroke, "rgb(1,2,3)");
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let mode: ColorMode = serde_json::from_str("\"grayscale\"").unwrap();
        assert_eq!(mode, ColorMode::Grayscale);
    }
}
