//! Page layout driver
//!
//! Walks the page row by row. Each row packs words from the cyclic word
//! list, places copies of their glyphs left to right, weights every glyph
//! from the image pixel under its center and hands it to the sink. The pass
//! ends when the next baseline would fall below the bottom margin.

use crate::alphabet::Alphabet;
use crate::core::config::LayoutSettings;
use crate::io::{GlyphSink, PageSampler};
use crate::layout::packer::{pack_line, wrapped_slice};
use crate::layout::weight::{Sample, WeightStyle};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Counters collected during one layout pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub rows: usize,
    pub glyphs_placed: usize,
    pub glyphs_skipped: usize,
    /// Rows whose single word was wider than the usable width
    pub overflow_lines: usize,
    /// Characters without a glyph, each listed once
    pub missing: BTreeSet<char>,
}

pub struct LayoutEngine<'a> {
    alphabet: &'a Alphabet,
    settings: &'a LayoutSettings,
    style: WeightStyle,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(alphabet: &'a Alphabet, settings: &'a LayoutSettings) -> Self {
        Self {
            alphabet,
            settings,
            style: settings.weight_style(),
        }
    }

    /// Visible width of a word in page units.
    ///
    /// Letter spacing sits between glyphs only, so a justified row ends
    /// exactly at the right margin. Characters without a glyph take no space.
    pub fn word_width(&self, word: &[char]) -> i64 {
        let widths: Vec<i64> = word
            .iter()
            .filter_map(|ch| self.alphabet.glyph_width(*ch))
            .map(i64::from)
            .collect();
        let spacing = i64::from(self.settings.letter_spacing);
        widths.iter().sum::<i64>() + spacing * (widths.len() as i64 - 1).max(0)
    }

    /// Fill the page with `text`, repeating it as often as needed
    pub fn run(
        &self,
        text: &str,
        sampler: &dyn PageSampler,
        sink: &mut dyn GlyphSink,
    ) -> LayoutStats {
        let mut stats = LayoutStats::default();
        let words: Vec<Vec<char>> = text
            .split_whitespace()
            .map(|w| w.chars().collect())
            .collect();
        if words.is_empty() {
            warn!("Text contains no words, nothing to lay out");
            return stats;
        }
        let widths: Vec<i64> = words.iter().map(|word| self.word_width(word)).collect();

        let usable_width = self.settings.usable_width();
        let default_gap = i64::from(self.settings.word_gap);
        let line_height = i64::from(self.settings.line_height.max(1));
        let spacing = i64::from(self.settings.letter_spacing);

        let mut current_y = self.settings.min_y() + line_height;
        let mut start = 0;

        while current_y <= self.settings.max_y() {
            let line = pack_line(&widths, start, usable_width, default_gap);
            if line.overflow {
                stats.overflow_lines += 1;
            }

            let mut pen = self.settings.min_x();
            for word in wrapped_slice(&words, start, line.word_count) {
                let mut placed_in_word = false;
                for ch in word {
                    let left = if placed_in_word { pen + spacing } else { pen };
                    if let Some(width) =
                        self.place_char(ch, left, current_y, sampler, sink, &mut stats)
                    {
                        pen = left + width;
                        placed_in_word = true;
                    }
                }
                pen += line.gap;
            }

            start = (start + line.word_count) % words.len();
            stats.rows += 1;
            current_y += line_height;
        }

        if !stats.missing.is_empty() {
            let missing: String = stats.missing.iter().collect();
            warn!(
                "No glyphs for {:?}, skipped {} characters",
                missing, stats.glyphs_skipped
            );
        }
        info!(
            "Laid out {} rows, {} glyphs placed, {} overflowing lines",
            stats.rows, stats.glyphs_placed, stats.overflow_lines
        );
        stats
    }

    /// Place one character with its left edge at `pen` and return its width
    fn place_char(
        &self,
        ch: char,
        pen: i64,
        baseline: i64,
        sampler: &dyn PageSampler,
        sink: &mut dyn GlyphSink,
        stats: &mut LayoutStats,
    ) -> Option<i64> {
        let mut glyph = match self.alphabet.instance(ch) {
            Ok(glyph) => glyph,
            Err(e) => {
                if stats.missing.insert(ch) {
                    debug!("{}", e);
                }
                stats.glyphs_skipped += 1;
                return None;
            }
        };

        glyph.place_at(pen as i32, baseline as i32);
        let (x, y) = self.pixel_at(glyph.abs_center(), sampler.dimensions());
        let sample = Sample {
            brightness: sampler.brightness(x, y),
            rgb: sampler.color(x, y),
        };
        self.style.apply(&mut glyph, sample);
        sink.add_glyph(&glyph);
        stats.glyphs_placed += 1;

        Some(i64::from(glyph.width()))
    }

    /// Project a page point into the sampling grid, wrapping at its edges
    pub fn pixel_at(&self, (x, y): (i32, i32), (width, height): (u32, u32)) -> (u32, u32) {
        let per_unit = self.settings.pixels_per_mm as f64 / self.settings.scale as f64;
        let project = |value: i32, size: u32| -> u32 {
            let size = i64::from(size.max(1));
            ((value as f64 * per_unit).round() as i64).rem_euclid(size) as u32
        };
        (project(x, width), project(y, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BoundingBox, Contour, Glyph, PathInstruction};

    struct Flat(u8);

    impl PageSampler for Flat {
        fn dimensions(&self) -> (u32, u32) {
            (210, 297)
        }
        fn brightness(&self, _x: u32, _y: u32) -> u8 {
            self.0
        }
        fn color(&self, _x: u32, _y: u32) -> [u8; 3] {
            [self.0; 3]
        }
    }

    #[derive(Default)]
    struct Collect(Vec<Glyph>);

    impl GlyphSink for Collect {
        fn add_glyph(&mut self, glyph: &Glyph) {
            self.0.push(glyph.clone());
        }
    }

    fn block(name: &str, width: i32) -> Glyph {
        let contour = Contour::new(vec![
            PathInstruction::MoveTo { x: 0, y: 0 },
            PathInstruction::RelLineTo { dx: width, dy: 0 },
            PathInstruction::RelLineTo { dx: 0, dy: -700 },
            PathInstruction::RelLineTo { dx: -width, dy: 0 },
            PathInstruction::Close,
        ])
        .unwrap();
        Glyph::new(name, BoundingBox::new(0, -700, width, 0), vec![contour])
    }

    fn alphabet() -> Alphabet {
        let mut alphabet = Alphabet::new();
        alphabet.insert(block("a", 500), &[]);
        alphabet.insert(block("b", 1000), &[]);
        alphabet
    }

    #[test]
    fn test_word_width_skips_missing_glyphs() {
        let alphabet = alphabet();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        assert_eq!(engine.word_width(&['a', 'b', '#']), 500 + 150 + 1000);
        assert_eq!(engine.word_width(&['a']), 500, "no spacing after the last glyph");
        assert_eq!(engine.word_width(&['#', '#']), 0);
    }

    #[test]
    fn test_fills_page_rows() {
        let alphabet = alphabet();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        let mut sink = Collect::default();
        let stats = engine.run("ab ba a", &Flat(0), &mut sink);

        // baselines from 5200 to 114400 in steps of 1200
        assert_eq!(stats.rows, 92);
        assert_eq!(stats.glyphs_placed, sink.0.len());
        assert_eq!(stats.glyphs_skipped, 0);
        assert_eq!(stats.overflow_lines, 0);

        let first = &sink.0[0];
        assert_eq!(first.bbox().x_min, 4_000, "first glyph starts at the left margin");
        assert_eq!(
            first.bbox().y_max,
            5_200,
            "first baseline is one line below the top margin"
        );
        assert_eq!(
            first.contours()[0].style.stroke_width,
            200,
            "black pixel draws the widest stroke"
        );
    }

    #[test]
    fn test_rows_are_justified_to_right_margin() {
        let alphabet = alphabet();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        let mut sink = Collect::default();
        engine.run("ab ba a", &Flat(255), &mut sink);

        let first_row: Vec<&Glyph> = sink
            .0
            .iter()
            .filter(|g| g.bbox().y_max == 5_200)
            .collect();
        let names: Vec<&str> = first_row.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "b", "a", "a"]);

        // words of 1650, 1650 and 500 share 76000 units through two gaps of 36100
        let last = first_row.last().unwrap();
        assert_eq!(i64::from(last.bbox().x_max), settings.max_x());
        assert_eq!(first_row[1].bbox().x_max, 4_000 + 500 + 150 + 1_000);
        assert_eq!(first_row[2].bbox().x_min - first_row[1].bbox().x_max, 36_100);
        assert!(first_row.iter().all(|g| g.contours()[0].style.stroke_width == 50));
    }

    #[test]
    fn test_missing_characters_are_counted_once() {
        let alphabet = alphabet();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        let mut sink = Collect::default();
        let stats = engine.run("a# #b", &Flat(128), &mut sink);
        assert_eq!(stats.missing.len(), 1);
        assert!(stats.glyphs_skipped > 0);
    }

    #[test]
    fn test_empty_text_places_nothing() {
        let alphabet = alphabet();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        let mut sink = Collect::default();
        assert_eq!(engine.run("  \n ", &Flat(0), &mut sink), LayoutStats::default());
    }

    #[test]
    fn test_pixel_projection_wraps() {
        let alphabet = Alphabet::new();
        let settings = LayoutSettings::default();
        let engine = LayoutEngine::new(&alphabet, &settings);
        assert_eq!(engine.pixel_at((4_200, 800), (210, 297)), (11, 2));
        assert_eq!(engine.pixel_at((84_000, -400), (210, 297)), (0, 296));
    }
}
