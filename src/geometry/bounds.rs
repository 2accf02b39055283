//! Integer bounding boxes for glyphs

use kurbo::{BezPath, Shape};
use serde::{Deserialize, Serialize};

/// Axis-aligned box in design or page units.
///
/// Serialized as `[x_min, y_min, x_max, y_max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    /// Build a box from two corners in any order, keeping `min <= max`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            x_max: x0.max(x1),
            y_max: y0.max(y1),
        }
    }

    /// Tight bounds of a kurbo path, rounded outward to whole units.
    pub fn from_bezpaths<'a>(paths: impl IntoIterator<Item = &'a BezPath>) -> Option<Self> {
        paths
            .into_iter()
            .filter(|path| !path.elements().is_empty())
            .map(|path| path.bounding_box())
            .reduce(|a, b| a.union(b))
            .map(|rect| {
                Self::new(
                    rect.x0.floor() as i32,
                    rect.y0.floor() as i32,
                    rect.x1.ceil() as i32,
                    rect.y1.ceil() as i32,
                )
            })
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Midpoint, rounded to the nearest unit
    pub fn center(&self) -> (i32, i32) {
        let cx = (self.x_min as f64 + self.x_max as f64) / 2.0;
        let cy = (self.y_min as f64 + self.y_max as f64) / 2.0;
        (cx.round() as i32, cy.round() as i32)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Mirror across the X axis: `[y_min, y_max]` becomes `[-y_max, -y_min]`
    pub fn negated_y(&self) -> Self {
        Self {
            y_min: -self.y_max,
            y_max: -self.y_min,
            ..*self
        }
    }

    /// Mirror across the Y axis: `[x_min, x_max]` becomes `[-x_max, -x_min]`
    pub fn negated_x(&self) -> Self {
        Self {
            x_min: -self.x_max,
            x_max: -self.x_min,
            ..*self
        }
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from(values: [i32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_new_orders_corners() {
        let bbox = BoundingBox::new(10, 20, -5, 0);
        assert_eq!(bbox, BoundingBox { x_min: -5, y_min: 0, x_max: 10, y_max: 20 });
        assert_eq!(bbox.width(), 15);
        assert_eq!(bbox.height(), 20);
    }

    #[test]
    fn test_flip_keeps_min_below_max() {
        let bbox = BoundingBox::new(0, -200, 500, 700);
        let flipped = bbox.negated_y();
        assert_eq!(flipped, BoundingBox::new(0, -700, 500, 200));
        assert!(flipped.y_min <= flipped.y_max);
        assert_eq!(bbox.negated_x(), BoundingBox::new(-500, -200, 0, 700));
    }

    #[test]
    fn test_center_rounds() {
        assert_eq!(BoundingBox::new(0, 0, 5, 3).center(), (3, 2));
    }

    #[test]
    fn test_bounds_from_quadratic_path() {
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.quad_to(Point::new(50.0, 100.0), Point::new(100.0, 0.0));
        path.close_path();

        let bbox = BoundingBox::from_bezpaths([&path]).expect("path has bounds");
        // The curve peaks halfway to its control point
        assert_eq!(bbox, BoundingBox::new(0, 0, 100, 50));
    }
}
