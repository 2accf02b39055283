//! Text flow over the page
//!
//! Line packing, visual weighting and the layout pass that ties them to the
//! alphabet and the page sampler.

pub mod engine;
pub mod packer;
pub mod specimen;
pub mod weight;

// Explicit re-exports for public API
pub use engine::{LayoutEngine, LayoutStats};
pub use packer::{justified_gap, pack_line, wrapped_slice, PackedLine};
pub use specimen::specimen_sheet;
pub use weight::{ColorMode, Sample, WeightStyle};
