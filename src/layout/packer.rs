//! Greedy justified line packing over a cyclic word list
//!
//! The text is treated as an endless loop of words. Each line starts where
//! the previous one stopped and takes words, at most one full cycle, until
//! the next one would cross the usable width. The leftover space is then
//! spread evenly over the gaps between the words that were taken.

use crate::core::errors::{LayoutError, LayoutResult};
use tracing::debug;

/// Result of packing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedLine {
    /// Words on the line, always at least one for a non-empty word list
    pub word_count: usize,
    /// Space between neighbouring words, in page units
    pub gap: i64,
    /// Width of the words plus default gaps
    pub natural_width: i64,
    /// The first word alone was wider than the line
    pub overflow: bool,
}

/// Pack words from `start`, wrapping around the end of `widths`.
///
/// An empty word list packs to an empty line with the default gap.
pub fn pack_line(widths: &[i64], start: usize, usable_width: i64, default_gap: i64) -> PackedLine {
    if widths.is_empty() {
        return PackedLine {
            word_count: 0,
            gap: default_gap,
            natural_width: 0,
            overflow: false,
        };
    }

    let mut word_count = 0;
    let mut natural_width = 0;
    for width in widths.iter().cycle().skip(start % widths.len()).take(widths.len()) {
        let candidate = if word_count == 0 {
            *width
        } else {
            natural_width + default_gap + width
        };
        if candidate > usable_width && word_count > 0 {
            break;
        }
        natural_width = candidate;
        word_count += 1;
    }

    let overflow = natural_width > usable_width;
    if overflow {
        let err = LayoutError::EmptyLineOverflow {
            word_width: natural_width,
            usable_width,
        };
        debug!("{}", err);
    }

    let gap = justified_gap(natural_width, word_count, usable_width, default_gap)
        .unwrap_or_else(|err| {
            debug!("{}", err);
            default_gap
        });

    PackedLine {
        word_count,
        gap,
        natural_width,
        overflow,
    }
}

/// Gap that makes `word_count` words of total `natural_width` span `usable_width` exactly.
///
/// `natural_width` already includes one default gap between each pair of
/// words; the remaining slack is shared between those gaps.
pub fn justified_gap(
    natural_width: i64,
    word_count: usize,
    usable_width: i64,
    default_gap: i64,
) -> LayoutResult<i64> {
    if word_count < 2 {
        return Err(LayoutError::ZeroGapDivision);
    }
    let slack = (usable_width - natural_width) as f64;
    let gaps = (word_count - 1) as f64;
    Ok(default_gap + (slack / gaps).round() as i64)
}

/// The `count` items starting at `start`, continuing from the front when the end is reached
pub fn wrapped_slice<T: Clone>(items: &[T], start: usize, count: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let start = start % items.len();
    let count = count.min(items.len());
    let tail_len = count.min(items.len() - start);

    let mut slice = Vec::with_capacity(count);
    slice.extend_from_slice(&items[start..start + tail_len]);
    slice.extend_from_slice(&items[..count - tail_len]);
    slice
}
