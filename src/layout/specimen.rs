//! Alphabet specimen sheet
//!
//! Every glyph of an alphabet on a grid, with its origin marked by a red
//! dot and its name printed underneath. Handy for checking that a font was
//! read and flipped the way the layout expects.

use crate::alphabet::Alphabet;
use crate::core::config::LayoutSettings;
use crate::font_source::FontMetrics;
use crate::io::{GlyphSink, SvgDocument};
use tracing::info;

/// Lay the whole alphabet out on one sheet, growing the page downwards as needed
pub fn specimen_sheet(
    alphabet: &Alphabet,
    metrics: &FontMetrics,
    settings: &LayoutSettings,
) -> SvgDocument {
    let scale = i64::from(settings.scale.max(1));
    let cell_width = alphabet
        .glyphs()
        .map(|glyph| i64::from(glyph.width()))
        .max()
        .unwrap_or(0)
        + i64::from(settings.letter_spacing);
    let row_height =
        (metrics.line_height.round() as i64).max(1) + i64::from(settings.line_height) / 2;
    let label_size = (row_height / 8).max(1);

    let columns = (settings.usable_width() / cell_width.max(1)).max(1) as usize;
    let rows = alphabet.len().div_ceil(columns);
    let content_height = settings.min_y() * 2 + rows as i64 * row_height;
    let height_mm = (content_height + scale - 1) / scale;

    let page_height_mm = (height_mm as u32).max(settings.page_height_mm);
    let mut doc = SvgDocument::new(settings.page_width_mm, page_height_mm, settings.scale);
    let style = settings.weight_style();

    for (idx, template) in alphabet.glyphs().enumerate() {
        let column = (idx % columns) as i64;
        let row = (idx / columns) as i64;
        let left = settings.min_x() + column * cell_width;
        let baseline = settings.min_y() + (row + 1) * row_height - label_size * 2;

        let mut glyph = template.instance();
        glyph.place_at(left as i32, baseline as i32);
        glyph.set_fill(&style.fill);
        glyph.set_color(&style.stroke_color);
        glyph.set_stroke_width(style.min_stroke_width);
        doc.add_glyph(&glyph);

        let (origin_x, origin_y) = glyph.offset();
        doc.add_marker(origin_x, origin_y, (style.max_stroke_width).max(1), "red");
        let label_y = (baseline + label_size * 3 / 2) as i32;
        doc.add_label(left as i32, label_y, label_size as u32, &glyph.name);
    }

    info!(
        "Specimen sheet with {} glyphs in {} columns and {} rows",
        alphabet.len(),
        columns,
        rows
    );
    doc
}
