//! Arrowhead: a two-stroke open path drawn at the tip of an arrow shaft.

use super::{points_bounds, ShapeId, ShapeStyle, ShapeTrait};
use crate::geometry::ArrowGeometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two barbs meeting at `tip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowHead {
    pub(crate) id: ShapeId,
    pub tip: Point,
    pub left_barb: Point,
    pub right_barb: Point,
    /// Whether the select tool may pick this shape.
    pub selectable: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl ArrowHead {
    /// Head for the tip of an arrow.
    pub fn new(geometry: &ArrowGeometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            tip: geometry.shaft_end,
            left_barb: geometry.left_barb,
            right_barb: geometry.right_barb,
            selectable: false,
            style: ShapeStyle::default(),
        }
    }

    /// The two strokes, each from the tip to a barb.
    pub fn strokes(&self) -> [(Point, Point); 2] {
        [(self.tip, self.left_barb), (self.tip, self.right_barb)]
    }
}

impl ShapeTrait for ArrowHead {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        points_bounds(&[self.tip, self.left_barb, self.right_barb])
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::arrow_from_drag;

    #[test]
    fn test_strokes_start_at_tip() {
        let head = ArrowHead::new(&arrow_from_drag(Point::ZERO, Point::new(100.0, 0.0)));
        for (from, _) in head.strokes() {
            assert_eq!(from, Point::new(100.0, 0.0));
        }
        let b = head.bounds();
        assert!((b.x1 - 100.0).abs() < 1e-9);
        assert!((b.y0 + 10.0).abs() < 1e-9);
        assert!((b.y1 - 10.0).abs() < 1e-9);
    }
}
