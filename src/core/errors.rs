//! Error taxonomy for outline extraction and text flow
//!
//! None of these errors is fatal to a layout pass. Each one names a unit of
//! work (a contour, a glyph, a line) that is skipped or degraded, and callers
//! log it and carry on. Failures of the outside world (unreadable font, image
//! or output file) travel as `anyhow::Error` instead.

use thiserror::Error;

/// Recoverable errors raised by the glyph and layout core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A character has no glyph in the alphabet.
    #[error("No glyph for {0:?} in alphabet")]
    GlyphNotFound(char),

    /// A contour has no on-curve point and no synthetic start can be built.
    #[error("Malformed contour in glyph '{glyph}': {reason}")]
    MalformedContour { glyph: String, reason: String },

    /// A component points at a glyph that is itself a composite.
    #[error("Glyph '{glyph}' references composite '{base}', nested components are unsupported")]
    NestedComponent { glyph: String, base: String },

    /// A component points at a glyph the font source does not contain.
    #[error("Glyph '{glyph}' references missing base glyph '{base}'")]
    MissingComponent { glyph: String, base: String },

    /// A single word is wider than the usable line width.
    #[error("Word of width {word_width} overflows usable line width {usable_width}")]
    EmptyLineOverflow { word_width: i64, usable_width: i64 },

    /// A line holding one word has no gap to stretch.
    #[error("Cannot justify a single-word line, falling back to the default gap")]
    ZeroGapDivision,

    /// A persisted instruction record could not be decoded.
    #[error("Invalid instruction '{command}' with {count} coordinates")]
    InvalidInstruction { command: String, count: usize },
}

impl LayoutError {
    /// Attach a glyph name to contour errors raised before the glyph was known
    pub fn in_glyph(self, name: &str) -> Self {
        match self {
            LayoutError::MalformedContour { reason, .. } => LayoutError::MalformedContour {
                glyph: name.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Result alias for the layout core.
pub type LayoutResult<T> = Result<T, LayoutError>;
