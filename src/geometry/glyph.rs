//! Glyph outlines with placement state
//!
//! A glyph keeps its untranslated bounding box next to the current one.
//! Every `move_to` is applied to the original, so placing a glyph twice at
//! different positions lands it exactly where a single placement would.

use crate::geometry::{BoundingBox, Contour};
use kurbo::BezPath;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub name: String,
    contours: Vec<Contour>,
    bbox: BoundingBox,
    initial_bbox: BoundingBox,
    offset: (i32, i32),
}

impl Glyph {
    pub fn new(name: impl Into<String>, bbox: BoundingBox, contours: Vec<Contour>) -> Self {
        Self {
            name: name.into(),
            contours,
            bbox,
            initial_bbox: bbox,
            offset: (0, 0),
        }
    }

    /// Independent copy for one placement.
    ///
    /// Weighting and moving the copy never reaches the template it came from.
    pub fn instance(&self) -> Glyph {
        self.clone()
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn initial_bbox(&self) -> BoundingBox {
        self.initial_bbox
    }

    /// Translation currently applied relative to the untranslated outline
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    pub fn width(&self) -> i32 {
        self.bbox.width()
    }

    pub fn height(&self) -> i32 {
        self.bbox.height()
    }

    /// Center of the current box, the point sampled for visual weight
    pub fn abs_center(&self) -> (i32, i32) {
        self.bbox.center()
    }

    /// Place the glyph at `initial + (x, y)`
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.offset = (x, y);
        self.bbox = self.initial_bbox.translated(x, y);
        for contour in &mut self.contours {
            contour.move_to(x, y);
        }
    }

    /// Place the glyph with its left edge at `left` and its origin line at `baseline`
    pub fn place_at(&mut self, left: i32, baseline: i32) {
        self.move_to(left - self.initial_bbox.x_min, baseline);
    }

    /// Mirror across the X axis (negates Y)
    pub fn flip_horizontal(&mut self) {
        for contour in &mut self.contours {
            contour.flip_horizontal();
        }
        self.bbox = self.bbox.negated_y();
        self.initial_bbox = self.initial_bbox.negated_y();
        self.offset.1 = -self.offset.1;
    }

    /// Mirror across the Y axis (negates X)
    pub fn flip_vertical(&mut self) {
        for contour in &mut self.contours {
            contour.flip_vertical();
        }
        self.bbox = self.bbox.negated_x();
        self.initial_bbox = self.initial_bbox.negated_x();
        self.offset.0 = -self.offset.0;
    }

    pub fn to_relative(&mut self) {
        for contour in &mut self.contours {
            contour.to_relative();
        }
    }

    /// Freeze the current outline as the untranslated template
    pub fn re_anchor(&mut self) {
        for contour in &mut self.contours {
            contour.re_anchor();
        }
        self.initial_bbox = self.bbox;
        self.offset = (0, 0);
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        for contour in &mut self.contours {
            contour.style.stroke_width = width;
        }
    }

    pub fn set_color(&mut self, color: &str) {
        for contour in &mut self.contours {
            contour.style.stroke = color.to_string();
        }
    }

    pub fn set_fill(&mut self, fill: &str) {
        for contour in &mut self.contours {
            contour.style.fill = fill.to_string();
        }
    }

    /// Bounds recomputed from the outline itself
    pub fn outline_bounds(&self) -> Option<BoundingBox> {
        let paths: Vec<BezPath> = self.contours.iter().map(Contour::to_bezpath).collect();
        BoundingBox::from_bezpaths(&paths)
    }
}
