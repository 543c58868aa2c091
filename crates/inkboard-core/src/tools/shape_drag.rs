//! Rectangle and circle tools.
//!
//! Both share one session shape: pointer-down drops a zero-size preview at
//! the anchor, every move reshapes it in place, pointer-up leaves it on the
//! surface as the finished shape.

use super::{Tool, ToolHandler};
use crate::geometry::{circle_from_drag, rect_from_drag};
use crate::shapes::{Circle, Rectangle, Shape, ShapeId, ShapeStyle};
use crate::style::DrawStyle;
use crate::surface::RenderSurface;
use kurbo::Point;

/// Which shape a drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragShape {
    Rectangle,
    Circle,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    anchor: Point,
    preview: ShapeId,
}

#[derive(Debug)]
pub struct ShapeDragTool {
    kind: DragShape,
    style: DrawStyle,
    session: Option<DragSession>,
}

impl ShapeDragTool {
    pub fn new(kind: DragShape, style: DrawStyle) -> Self {
        Self {
            kind,
            style,
            session: None,
        }
    }

    fn preview_at(&self, anchor: Point) -> Shape {
        let style = ShapeStyle::outline(&self.style);
        match self.kind {
            DragShape::Rectangle => {
                let mut rect = Rectangle::new(anchor, 0.0, 0.0);
                rect.style = style;
                Shape::Rectangle(rect)
            }
            DragShape::Circle => {
                let mut circle = Circle::new(anchor, 0.0);
                circle.style = style;
                Shape::Circle(circle)
            }
        }
    }
}

impl ToolHandler for ShapeDragTool {
    fn tool(&self) -> Tool {
        match self.kind {
            DragShape::Rectangle => Tool::Rectangle,
            DragShape::Circle => Tool::Circle,
        }
    }

    fn pointer_down(&mut self, surface: &mut dyn RenderSurface, point: Point) {
        if self.session.is_some() {
            log::debug!("{} drag restarted before pointer-up", self.tool());
        }
        let preview = surface.add(self.preview_at(point));
        self.session = Some(DragSession {
            anchor: point,
            preview,
        });
    }

    fn pointer_move(&mut self, surface: &mut dyn RenderSurface, point: Point) {
        let Some(session) = self.session else {
            return;
        };
        let found = surface.modify(session.preview, &mut |shape| match shape {
            Shape::Rectangle(rect) => rect.set_frame(rect_from_drag(session.anchor, point)),
            Shape::Circle(circle) => circle.set_geometry(circle_from_drag(session.anchor, point)),
            _ => {}
        });
        if !found {
            log::trace!("preview {} vanished, ending drag", session.preview);
            self.session = None;
            return;
        }
        surface.request_redraw();
    }

    fn pointer_up(&mut self, _surface: &mut dyn RenderSurface, _point: Point) {
        self.session = None;
    }

    fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    fn reset(&mut self) {
        self.session = None;
    }
}
