//! Outlined rectangles drawn with the rectangle tool.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::geometry::DragRect;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Whether the select tool may pick this shape.
    pub selectable: bool,
    pub style: ShapeStyle,
}

impl Rectangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            selectable: false,
            style: ShapeStyle::default(),
        }
    }

    /// Move and resize to a drag box.
    pub fn set_frame(&mut self, frame: DragRect) {
        self.position = frame.origin();
        self.width = frame.width;
        self.height = frame.height;
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
