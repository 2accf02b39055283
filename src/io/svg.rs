//! SVG output
//!
//! The document is sized in millimetres while the viewBox is in page units,
//! `scale` units per millimetre, so glyph coordinates are written unchanged.

use crate::geometry::Glyph;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Receives glyphs as the layout places them
pub trait GlyphSink {
    fn add_glyph(&mut self, glyph: &Glyph);
}

#[derive(Debug, Clone)]
pub struct SvgDocument {
    width_mm: u32,
    height_mm: u32,
    scale: u32,
    body: String,
    paths: usize,
}

impl SvgDocument {
    pub fn new(width_mm: u32, height_mm: u32, scale: u32) -> Self {
        Self {
            width_mm,
            height_mm,
            scale,
            body: String::new(),
            paths: 0,
        }
    }

    /// Number of `<path>` elements written so far
    pub fn path_count(&self) -> usize {
        self.paths
    }

    /// Small filled circle, used to mark glyph origins on specimen sheets
    pub fn add_marker(&mut self, x: i32, y: i32, radius: u32, color: &str) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{x}" cy="{y}" r="{radius}" fill="{color}"/>"#
        );
    }

    pub fn add_label(&mut self, x: i32, y: i32, size: u32, text: &str) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{x}" y="{y}" font-size="{size}" font-family="monospace">{}</text>"#,
            escape(text)
        );
    }

    fn header(&self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" standalone=\"no\"?>\n",
                "<svg version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {vw} {vh}\">\n"
            ),
            w = self.width_mm,
            h = self.height_mm,
            vw = self.width_mm as u64 * self.scale as u64,
            vh = self.height_mm as u64 * self.scale as u64,
        )
    }

    pub fn render(&self) -> String {
        let mut out = self.header();
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        info!("Wrote {} paths to {}", self.paths, path.display());
        Ok(())
    }
}

impl GlyphSink for SvgDocument {
    fn add_glyph(&mut self, glyph: &Glyph) {
        for contour in glyph.contours() {
            let _ = writeln!(
                self.body,
                r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                contour.path_data(),
                escape(&contour.style.fill),
                escape(&contour.style.stroke),
                contour.style.stroke_width
            );
            self.paths += 1;
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
