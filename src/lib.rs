//! letterart
//!
//! Lays text out over a page in justified rows of glyph outlines, with each
//! glyph weighted by the image pixel beneath it.
pub mod alphabet;
pub mod core;
pub mod font_source;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod logging;
#[cfg(test)]
mod tests;
