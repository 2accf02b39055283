//! The glyph table consulted during layout
//!
//! An alphabet is built once, eagerly: every contour is reconstructed,
//! composites are flattened and the outlines are flipped into page
//! orientation before the first lookup. After construction the templates
//! are read-only and every placement works on `Glyph::instance()`.

pub mod names;
pub mod persist;

use crate::core::errors::{LayoutError, LayoutResult};
use crate::font_source::{OutlineSource, RawGlyph};
use crate::geometry::{build_instructions, BoundingBox, Contour, Glyph};
use kurbo::BezPath;
use names::{canonical_name, NameRule, RESOLUTION_ORDER};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Orientation applied to every glyph at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Negate Y, turning font Y-up outlines into page Y-down ones
    pub flip_horizontal: bool,
    /// Negate X
    pub flip_vertical: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            flip_vertical: false,
        }
    }
}

/// What had to be dropped while building an alphabet
#[derive(Debug, Default)]
pub struct LoadReport {
    pub issues: Vec<LayoutError>,
    /// Glyphs without any drawable outline, such as `space`
    pub empty_glyphs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alphabet {
    glyphs: Vec<Glyph>,
    by_name: HashMap<String, usize>,
    cmap: HashMap<char, String>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every glyph the source offers.
    pub fn from_source(source: &dyn OutlineSource, options: LoadOptions) -> (Self, LoadReport) {
        let mut alphabet = Alphabet::new();
        let mut report = LoadReport::default();

        for name in source.glyph_names() {
            let Some(raw) = source.glyph(&name) else {
                continue;
            };
            match build_glyph(source, &raw, options, &mut report.issues) {
                Some(glyph) => alphabet.insert(glyph, &raw.codepoints),
                None => {
                    debug!("Glyph '{}' has no outline, skipping", name);
                    report.empty_glyphs.push(name);
                }
            }
        }

        for issue in &report.issues {
            warn!("{}", issue);
        }
        info!(
            "Built alphabet with {} glyphs ({} without outline, {} issues)",
            alphabet.len(),
            report.empty_glyphs.len(),
            report.issues.len()
        );
        (alphabet, report)
    }

    /// Add or replace a glyph template, mapping the given codepoints to it
    pub fn insert(&mut self, glyph: Glyph, codepoints: &[char]) {
        for ch in codepoints {
            self.cmap.insert(*ch, glyph.name.clone());
        }
        match self.by_name.get(&glyph.name) {
            Some(&idx) => self.glyphs[idx] = glyph,
            None => {
                self.by_name.insert(glyph.name.clone(), self.glyphs.len());
                self.glyphs.push(glyph);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Templates in insertion order
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Glyph> {
        self.by_name.get(name).map(|&idx| &self.glyphs[idx])
    }

    /// Characters mapped to `glyph_name` by the font's codepoint table
    pub fn codepoints_for(&self, glyph_name: &str) -> Vec<char> {
        let mut chars: Vec<char> = self
            .cmap
            .iter()
            .filter(|(_, name)| name.as_str() == glyph_name)
            .map(|(ch, _)| *ch)
            .collect();
        chars.sort_unstable();
        chars
    }

    /// Resolve a character to its glyph template
    pub fn lookup(&self, ch: char) -> LayoutResult<&Glyph> {
        RESOLUTION_ORDER
            .iter()
            .find_map(|rule| self.apply_rule(*rule, ch))
            .ok_or(LayoutError::GlyphNotFound(ch))
    }

    /// Resolve a character and hand out an independent copy for placement
    pub fn instance(&self, ch: char) -> LayoutResult<Glyph> {
        self.lookup(ch).map(Glyph::instance)
    }

    fn apply_rule(&self, rule: NameRule, ch: char) -> Option<&Glyph> {
        match rule {
            NameRule::Exact => {
                let mut buf = [0u8; 4];
                self.get_by_name(ch.encode_utf8(&mut buf))
            }
            NameRule::Canonical => canonical_name(ch).and_then(|name| self.get_by_name(name)),
            NameRule::Codepoint => self.cmap.get(&ch).and_then(|name| self.get_by_name(name)),
        }
    }

    /// Drawn width of a character, or `None` when it has no glyph
    pub fn glyph_width(&self, ch: char) -> Option<i32> {
        self.lookup(ch).ok().map(Glyph::width)
    }
}

/// Reconstruct one glyph, flattening single-level components.
fn build_glyph(
    source: &dyn OutlineSource,
    raw: &RawGlyph,
    options: LoadOptions,
    issues: &mut Vec<LayoutError>,
) -> Option<Glyph> {
    let mut contours = build_contours(raw, issues);

    for component in &raw.components {
        let Some(base) = source.glyph(&component.base) else {
            issues.push(LayoutError::MissingComponent {
                glyph: raw.name.clone(),
                base: component.base.clone(),
            });
            continue;
        };
        if base.is_composite() {
            issues.push(LayoutError::NestedComponent {
                glyph: raw.name.clone(),
                base: component.base.clone(),
            });
            continue;
        }
        for mut contour in build_contours(&base, issues) {
            contour.move_to(component.x_offset, component.y_offset);
            contour.re_anchor();
            contours.push(contour);
        }
    }

    if contours.is_empty() {
        return None;
    }

    let bbox = match raw.bbox {
        Some(bbox) => bbox,
        None => {
            let paths: Vec<BezPath> = contours.iter().map(Contour::to_bezpath).collect();
            BoundingBox::from_bezpaths(&paths)?
        }
    };
    let mut glyph = Glyph::new(raw.name.clone(), bbox, contours);

    if options.flip_horizontal {
        glyph.flip_horizontal();
    }
    if options.flip_vertical {
        glyph.flip_vertical();
    }
    glyph.re_anchor();
    Some(glyph)
}

/// Relative contours of a glyph's own outline; malformed ones are recorded and dropped.
fn build_contours(raw: &RawGlyph, issues: &mut Vec<LayoutError>) -> Vec<Contour> {
    let mut contours = Vec::with_capacity(raw.contours.len());
    for points in &raw.contours {
        let built = build_instructions(points).and_then(|instructions| {
            if instructions.is_empty() {
                Ok(None)
            } else {
                Contour::new(instructions).map(Some)
            }
        });
        match built {
            Ok(Some(mut contour)) => {
                contour.to_relative();
                contours.push(contour);
            }
            Ok(None) => {}
            Err(e) => issues.push(e.in_glyph(&raw.name)),
        }
    }
    contours
}
