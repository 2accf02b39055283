//! Geometric Primitives and Operations

pub mod bounds;
pub mod contour;
pub mod curve;
pub mod glyph;
pub mod instruction;

// Re-export commonly used items
pub use bounds::BoundingBox;
pub use contour::{Contour, PathStyle};
pub use curve::build_instructions;
pub use glyph::Glyph;
pub use instruction::PathInstruction;
