//! A single closed sub-path of a glyph
//!
//! Contours are built in absolute coordinates and usually converted to
//! relative form right after, so that moving the opening `MoveTo` moves the
//! whole outline. Moves are always computed from the cached anchor, never
//! from the current position.

use crate::core::errors::{LayoutError, LayoutResult};
use crate::geometry::PathInstruction;
use kurbo::{BezPath, Point};
use std::fmt::Write;

/// Presentation attributes handed to the serializer with each path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "black".to_string(),
            stroke_width: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    instructions: Vec<PathInstruction>,
    /// Target of the opening `MoveTo` before any placement
    anchor: (i32, i32),
    pub style: PathStyle,
}

impl Contour {
    /// Wrap an instruction list. The first instruction must be a `MoveTo`.
    pub fn new(instructions: Vec<PathInstruction>) -> LayoutResult<Self> {
        let anchor = match instructions.first() {
            Some(PathInstruction::MoveTo { x, y }) => (*x, *y),
            Some(other) => {
                return Err(LayoutError::MalformedContour {
                    glyph: String::new(),
                    reason: format!("contour starts with '{}' instead of a move", other.command()),
                })
            }
            None => {
                return Err(LayoutError::MalformedContour {
                    glyph: String::new(),
                    reason: "contour has no instructions".to_string(),
                })
            }
        };
        Ok(Self {
            instructions,
            anchor,
            style: PathStyle::default(),
        })
    }

    pub fn instructions(&self) -> &[PathInstruction] {
        &self.instructions
    }

    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    /// Current target of the opening `MoveTo`
    pub fn start(&self) -> (i32, i32) {
        match self.instructions.first() {
            Some(PathInstruction::MoveTo { x, y }) => (*x, *y),
            _ => self.anchor,
        }
    }

    /// `true` once every instruction after the opening move is a delta or a close
    pub fn is_relative(&self) -> bool {
        !self.instructions.iter().skip(1).any(|i| i.is_absolute())
    }

    /// Rewrite every instruction after the first as a delta against the
    /// previous end point. Does nothing on an already relative contour.
    pub fn to_relative(&mut self) {
        if self.is_relative() {
            return;
        }
        let mut previous_end = self.start();
        let mut converted = Vec::with_capacity(self.instructions.len());
        for (idx, instruction) in self.instructions.iter().enumerate() {
            if idx == 0 {
                converted.push(*instruction);
                continue;
            }
            converted.push(instruction.relative_to(previous_end));
            previous_end = match *instruction {
                PathInstruction::RelLineTo { dx, dy }
                | PathInstruction::RelQuadTo { dx, dy, .. } => {
                    (previous_end.0 + dx, previous_end.1 + dy)
                }
                other => other.absolute_end().unwrap_or(previous_end),
            };
        }
        self.instructions = converted;
    }

    /// Place the contour so its start sits at `anchor + (x, y)`.
    ///
    /// Absolute instructions travel by the same delta, relative ones follow
    /// the start automatically.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let (sx, sy) = self.start();
        let dx = self.anchor.0 + x - sx;
        let dy = self.anchor.1 + y - sy;
        if dx == 0 && dy == 0 {
            return;
        }
        for instruction in &mut self.instructions {
            *instruction = instruction.translated(dx, dy);
        }
    }

    /// Make the current position the new untranslated origin
    pub fn re_anchor(&mut self) {
        self.anchor = self.start();
    }

    /// Negate all Y coordinates (mirror across the X axis)
    pub fn flip_horizontal(&mut self) {
        for instruction in &mut self.instructions {
            *instruction = instruction.negated_y();
        }
        self.anchor.1 = -self.anchor.1;
    }

    /// Negate all X coordinates (mirror across the Y axis)
    pub fn flip_vertical(&mut self) {
        for instruction in &mut self.instructions {
            *instruction = instruction.negated_x();
        }
        self.anchor.0 = -self.anchor.0;
    }

    /// SVG path data, e.g. `M 0 0 l 100 0 q 0 50 -50 50 Z`
    pub fn path_data(&self) -> String {
        let mut data = String::new();
        for (idx, instruction) in self.instructions.iter().enumerate() {
            if idx > 0 {
                data.push(' ');
            }
            let _ = write!(data, "{instruction}");
        }
        data
    }

    /// Absolute kurbo path, used for bounds computation
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut current = Point::ZERO;
        let pt = |x: i32, y: i32| Point::new(x as f64, y as f64);

        for instruction in &self.instructions {
            match *instruction {
                PathInstruction::MoveTo { x, y } => {
                    current = pt(x, y);
                    path.move_to(current);
                }
                PathInstruction::LineTo { x, y } => {
                    current = pt(x, y);
                    path.line_to(current);
                }
                PathInstruction::QuadTo { cx, cy, x, y } => {
                    current = pt(x, y);
                    path.quad_to(pt(cx, cy), current);
                }
                PathInstruction::RelLineTo { dx, dy } => {
                    current = Point::new(current.x + dx as f64, current.y + dy as f64);
                    path.line_to(current);
                }
                PathInstruction::RelQuadTo { dcx, dcy, dx, dy } => {
                    let control = Point::new(current.x + dcx as f64, current.y + dcy as f64);
                    current = Point::new(current.x + dx as f64, current.y + dy as f64);
                    path.quad_to(control, current);
                }
                PathInstruction::Close => path.close_path(),
            }
        }
        path
    }
}
