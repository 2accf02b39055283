//! Font source data structures
//!
//! Everything that reads outlines out of font files lives here. Sources
//! deliver raw point lists; turning them into curves is the job of
//! `geometry` and `alphabet`.

pub mod json;
pub mod metrics;
pub mod point;
pub mod source;
pub mod ufo;

// Explicit re-exports for public API
pub use json::JsonOutlineSource;
pub use metrics::FontMetrics;
pub use point::{ComponentRef, FontPoint};
pub use source::{OutlineSource, RawGlyph};
pub use ufo::UfoSource;
