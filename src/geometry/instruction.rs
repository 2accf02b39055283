//! Path instructions in the SVG command vocabulary
//!
//! Quadratic outlines only ever need moves, lines, quadratic curves and a
//! close. After relative conversion, lines and curves use the lowercase
//! delta forms.

use crate::core::errors::{LayoutError, LayoutResult};
use std::fmt;

/// One drawing command of a contour, in integer units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathInstruction {
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
    QuadTo { cx: i32, cy: i32, x: i32, y: i32 },
    /// Line relative to the previous end point
    RelLineTo { dx: i32, dy: i32 },
    /// Quadratic curve whose control and end are relative to the previous end point
    RelQuadTo { dcx: i32, dcy: i32, dx: i32, dy: i32 },
    Close,
}

impl PathInstruction {
    /// The SVG command letter
    pub fn command(&self) -> char {
        match self {
            PathInstruction::MoveTo { .. } => 'M',
            PathInstruction::LineTo { .. } => 'L',
            PathInstruction::QuadTo { .. } => 'Q',
            PathInstruction::RelLineTo { .. } => 'l',
            PathInstruction::RelQuadTo { .. } => 'q',
            PathInstruction::Close => 'Z',
        }
    }

    /// Flat coordinate list in SVG argument order
    pub fn coordinates(&self) -> Vec<i32> {
        match *self {
            PathInstruction::MoveTo { x, y } | PathInstruction::LineTo { x, y } => vec![x, y],
            PathInstruction::QuadTo { cx, cy, x, y } => vec![cx, cy, x, y],
            PathInstruction::RelLineTo { dx, dy } => vec![dx, dy],
            PathInstruction::RelQuadTo { dcx, dcy, dx, dy } => vec![dcx, dcy, dx, dy],
            PathInstruction::Close => Vec::new(),
        }
    }

    /// Rebuild an instruction from its command letter and coordinates.
    pub fn from_parts(command: &str, coordinates: &[i32]) -> LayoutResult<Self> {
        let instruction = match (command, coordinates) {
            ("M", &[x, y]) => PathInstruction::MoveTo { x, y },
            ("L", &[x, y]) => PathInstruction::LineTo { x, y },
            ("Q", &[cx, cy, x, y]) => PathInstruction::QuadTo { cx, cy, x, y },
            ("l", &[dx, dy]) => PathInstruction::RelLineTo { dx, dy },
            ("q", &[dcx, dcy, dx, dy]) => PathInstruction::RelQuadTo { dcx, dcy, dx, dy },
            ("Z" | "z", &[]) => PathInstruction::Close,
            _ => {
                return Err(LayoutError::InvalidInstruction {
                    command: command.to_string(),
                    count: coordinates.len(),
                })
            }
        };
        Ok(instruction)
    }

    /// Uppercase commands carry absolute coordinates. `Close` counts as neither.
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            PathInstruction::MoveTo { .. }
                | PathInstruction::LineTo { .. }
                | PathInstruction::QuadTo { .. }
        )
    }

    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            PathInstruction::RelLineTo { .. } | PathInstruction::RelQuadTo { .. }
        )
    }

    /// End point of an absolute instruction
    pub fn absolute_end(&self) -> Option<(i32, i32)> {
        match *self {
            PathInstruction::MoveTo { x, y }
            | PathInstruction::LineTo { x, y }
            | PathInstruction::QuadTo { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Rewrite an absolute line or curve as a delta against `from`.
    /// Other instructions are returned unchanged.
    pub fn relative_to(&self, from: (i32, i32)) -> PathInstruction {
        let (px, py) = from;
        match *self {
            PathInstruction::LineTo { x, y } => PathInstruction::RelLineTo {
                dx: x - px,
                dy: y - py,
            },
            PathInstruction::QuadTo { cx, cy, x, y } => PathInstruction::RelQuadTo {
                dcx: cx - px,
                dcy: cy - py,
                dx: x - px,
                dy: y - py,
            },
            other => other,
        }
    }

    /// Shift absolute coordinates. Deltas are translation invariant and stay put.
    pub fn translated(&self, dx: i32, dy: i32) -> PathInstruction {
        match *self {
            PathInstruction::MoveTo { x, y } => PathInstruction::MoveTo {
                x: x + dx,
                y: y + dy,
            },
            PathInstruction::LineTo { x, y } => PathInstruction::LineTo {
                x: x + dx,
                y: y + dy,
            },
            PathInstruction::QuadTo { cx, cy, x, y } => PathInstruction::QuadTo {
                cx: cx + dx,
                cy: cy + dy,
                x: x + dx,
                y: y + dy,
            },
            other => other,
        }
    }

    /// Negate every Y component, control points included
    pub fn negated_y(&self) -> PathInstruction {
        self.map_xy(|x| x, |y| -y)
    }

    /// Negate every X component, control points included
    pub fn negated_x(&self) -> PathInstruction {
        self.map_xy(|x| -x, |y| y)
    }

    fn map_xy(&self, fx: impl Fn(i32) -> i32, fy: impl Fn(i32) -> i32) -> PathInstruction {
        match *self {
            PathInstruction::MoveTo { x, y } => PathInstruction::MoveTo { x: fx(x), y: fy(y) },
            PathInstruction::LineTo { x, y } => PathInstruction::LineTo { x: fx(x), y: fy(y) },
            PathInstruction::QuadTo { cx, cy, x, y } => PathInstruction::QuadTo {
                cx: fx(cx),
                cy: fy(cy),
                x: fx(x),
                y: fy(y),
            },
            PathInstruction::RelLineTo { dx, dy } => PathInstruction::RelLineTo {
                dx: fx(dx),
                dy: fy(dy),
            },
            PathInstruction::RelQuadTo { dcx, dcy, dx, dy } => PathInstruction::RelQuadTo {
                dcx: fx(dcx),
                dcy: fy(dcy),
                dx: fx(dx),
                dy: fy(dy),
            },
            PathInstruction::Close => PathInstruction::Close,
        }
    }
}

impl fmt::Display for PathInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())?;
        for value in self.coordinates() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
