//! Scene objects owned by the render surface.

mod arrow_head;
mod circle;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use arrow_head::ArrowHead;
pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::style::{DrawStyle, TRANSPARENT};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Paint applied to a shape.
///
/// Colors are the strings the toolbar produced; the surface does not
/// interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (`transparent` for outlines).
    pub fill: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            fill: TRANSPARENT.to_string(),
        }
    }
}

impl ShapeStyle {
    /// Outline in the toolbar color with a transparent fill.
    pub fn outline(style: &DrawStyle) -> Self {
        Self {
            stroke: style.color.clone(),
            stroke_width: style.width(),
            fill: TRANSPARENT.to_string(),
        }
    }

    /// Fill in the toolbar color with no stroke (text).
    pub fn filled(style: &DrawStyle) -> Self {
        Self {
            stroke: TRANSPARENT.to_string(),
            stroke_width: 0.0,
            fill: style.color.clone(),
        }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Geometric bounding box, without stroke.
    fn bounds(&self) -> Rect;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    ArrowHead(ArrowHead),
    Freehand(Freehand),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::ArrowHead(s) => s.id(),
            Shape::Freehand(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::ArrowHead(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::ArrowHead(s) => s.style(),
            Shape::Freehand(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Circle(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::ArrowHead(s) => s.style_mut(),
            Shape::Freehand(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.selectable,
            Shape::Circle(s) => s.selectable,
            Shape::Line(s) => s.selectable,
            Shape::ArrowHead(s) => s.selectable,
            Shape::Freehand(s) => s.selectable,
            Shape::Text(s) => s.selectable,
        }
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        match self {
            Shape::Rectangle(s) => s.selectable = selectable,
            Shape::Circle(s) => s.selectable = selectable,
            Shape::Line(s) => s.selectable = selectable,
            Shape::ArrowHead(s) => s.selectable = selectable,
            Shape::Freehand(s) => s.selectable = selectable,
            Shape::Text(s) => s.selectable = selectable,
        }
    }

    /// Bounds grown by half the stroke width, the area a click can land on.
    pub fn hit_bounds(&self) -> Rect {
        let half = self.style().stroke_width / 2.0;
        self.bounds().inflate(half, half)
    }

    /// Whether `point` falls inside [`Shape::hit_bounds`], edges included.
    pub fn contains_point(&self, point: Point) -> bool {
        let r = self.hit_bounds();
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }

    /// Short lowercase name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
            Shape::ArrowHead(_) => "arrow-head",
            Shape::Freehand(_) => "freehand",
            Shape::Text(_) => "text",
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Bounding box of a set of points; `Rect::ZERO` when empty.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_includes_stroke() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        rect.style.stroke_width = 4.0;
        let shape = Shape::Rectangle(rect);
        assert!(shape.contains_point(Point::new(5.0, 5.0)));
        assert!(shape.contains_point(Point::new(12.0, 10.0)));
        assert!(!shape.contains_point(Point::new(12.5, 5.0)));
    }

    #[test]
    fn test_selectable_toggle() {
        let mut shape = Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0)));
        assert!(!shape.is_selectable());
        shape.set_selectable(true);
        assert!(shape.is_selectable());
    }

    #[test]
    fn test_points_bounds() {
        let r = points_bounds(&[Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(0.0, 0.0)]);
        assert_eq!(r, Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(points_bounds(&[]), Rect::ZERO);
    }

    #[test]
    fn test_style_constructors() {
        let style = DrawStyle::new("#ff0000", 5);
        let outline = ShapeStyle::outline(&style);
        assert_eq!(outline.stroke, "#ff0000");
        assert_eq!(outline.stroke_width, 5.0);
        assert_eq!(outline.fill, TRANSPARENT);
        let filled = ShapeStyle::filled(&style);
        assert_eq!(filled.fill, "#ff0000");
    }
}
