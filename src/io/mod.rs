//! Page input and output
//!
//! Pixel sampling for glyph weights and SVG serialization of placed glyphs.

pub mod sampler;
pub mod svg;

// Explicit re-exports for public API
pub use sampler::{ImageSampler, PageSampler};
pub use svg::{GlyphSink, SvgDocument};
