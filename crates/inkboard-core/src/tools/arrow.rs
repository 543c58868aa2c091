//! Arrow tool.
//!
//! Pointer-down only records the anchor. Each move throws the previous
//! preview away and adds a fresh shaft and head from the anchor to the
//! pointer. With [`ArrowPreview::KeepStrayHeads`] only the shaft is thrown
//! away, so every move leaves an arrowhead behind.

use super::{ArrowPreview, Tool, ToolHandler, ToolOptions};
use crate::geometry::arrow_geometry;
use crate::shapes::{ArrowHead, Line, Shape, ShapeId, ShapeStyle};
use crate::style::DrawStyle;
use crate::surface::RenderSurface;
use kurbo::Point;

#[derive(Debug, Clone, Copy)]
struct ArrowSession {
    anchor: Point,
    shaft: Option<ShapeId>,
    head: Option<ShapeId>,
}

#[derive(Debug)]
pub struct ArrowTool {
    style: DrawStyle,
    head_length: f64,
    head_angle: f64,
    preview: ArrowPreview,
    session: Option<ArrowSession>,
}

impl ArrowTool {
    pub fn new(style: DrawStyle, options: &ToolOptions) -> Self {
        Self {
            style,
            head_length: options.head_length,
            head_angle: options.head_angle,
            preview: options.arrow_preview,
            session: None,
        }
    }
}

impl ToolHandler for ArrowTool {
    fn tool(&self) -> Tool {
        Tool::Arrow
    }

    fn pointer_down(&mut self, _surface: &mut dyn RenderSurface, point: Point) {
        if self.session.is_some() {
            log::debug!("arrow drag restarted before pointer-up");
        }
        self.session = Some(ArrowSession {
            anchor: point,
            shaft: None,
            head: None,
        });
    }

    fn pointer_move(&mut self, surface: &mut dyn RenderSurface, point: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(shaft) = session.shaft.take() {
            surface.remove(shaft);
        }
        if let Some(head) = session.head.take() {
            if self.preview == ArrowPreview::Replace {
                surface.remove(head);
            }
        }

        let geometry = arrow_geometry(session.anchor, point, self.head_length, self.head_angle);
        let style = ShapeStyle::outline(&self.style);

        let mut shaft = Line::new(geometry.shaft_start, geometry.shaft_end);
        shaft.style = style.clone();
        let mut head = ArrowHead::new(&geometry);
        head.style = style;

        session.shaft = Some(surface.add(Shape::Line(shaft)));
        session.head = Some(surface.add(Shape::ArrowHead(head)));
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
