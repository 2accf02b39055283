//! Quadratic curve reconstruction from on/off-curve point streams
//!
//! A TrueType contour is a cyclic list of points. Two consecutive off-curve
//! points imply an on-curve point halfway between them, which is how fonts
//! encode runs of smooth quadratic segments without storing every knot.

use crate::core::errors::{LayoutError, LayoutResult};
use crate::font_source::FontPoint;
use crate::geometry::PathInstruction;

/// Convert one contour's points into absolute path instructions.
///
/// The output opens with `MoveTo` and ends with `Close`; an empty input gives
/// an empty list, which callers must skip rather than draw. A contour made
/// of a single off-curve point has no start and is `MalformedContour`; the
/// glyph name is left empty for the caller to fill in.
pub fn build_instructions(points: &[FontPoint]) -> LayoutResult<Vec<PathInstruction>> {
    let Some(ring) = start_ring(points)? else {
        return Ok(Vec::new());
    };

    let start = ring[0];
    let mut instructions = vec![PathInstruction::MoveTo {
        x: start.x,
        y: start.y,
    }];
    let mut pending: Option<FontPoint> = None;

    for point in &ring[1..] {
        match (pending, point.on_curve) {
            (None, true) => instructions.push(line(point)),
            (Some(control), true) => {
                instructions.push(quad(&control, point));
                pending = None;
            }
            (None, false) => pending = Some(*point),
            (Some(control), false) => {
                let implied = control.midpoint(point);
                instructions.push(quad(&control, &implied));
                pending = Some(*point);
            }
        }
    }

    // Close draws the final straight edge back to the start itself
    let returns_to_start = matches!(
        instructions.last(),
        Some(PathInstruction::LineTo { x, y }) if (*x, *y) == (start.x, start.y)
    );
    if returns_to_start {
        instructions.pop();
    }
    instructions.push(PathInstruction::Close);
    Ok(instructions)
}

/// Rotate the cyclic point list so it begins and ends on the same on-curve point.
fn start_ring(points: &[FontPoint]) -> LayoutResult<Option<Vec<FontPoint>>> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(None),
    };

    let mut ring = Vec::with_capacity(points.len() + 2);
    if first.on_curve {
        ring.extend_from_slice(points);
        ring.push(first);
    } else if last.on_curve {
        ring.push(last);
        ring.extend_from_slice(&points[..points.len() - 1]);
        ring.push(last);
    } else if points.len() >= 2 {
        let start = last.midpoint(&first);
        ring.push(start);
        ring.extend_from_slice(points);
        ring.push(start);
    } else {
        return Err(LayoutError::MalformedContour {
            glyph: String::new(),
            reason: format!(
                "no on-curve point to start from among {} off-curve point(s)",
                points.len()
            ),
        });
    }
    Ok(Some(ring))
}

fn line(end: &FontPoint) -> PathInstruction {
    PathInstruction::LineTo { x: end.x, y: end.y }
}

fn quad(control: &FontPoint, end: &FontPoint) -> PathInstruction {
    PathInstruction::QuadTo {
        cx: control.x,
        cy: control.y,
        x: end.x,
        y: end.y,
    }
}
