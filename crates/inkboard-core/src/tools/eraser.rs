//! Eraser tool.

use super::{Tool, ToolHandler};
use crate::shapes::ShapeId;
use crate::surface::RenderSurface;
use kurbo::Point;

/// Removes every shape under the pointer on click.
#[derive(Debug, Default)]
pub struct EraserTool;

impl ToolHandler for EraserTool {
    fn tool(&self) -> Tool {
        Tool::Eraser
    }

    fn pointer_down(&mut self, surface: &mut dyn RenderSurface, point: Point) {
        let hits: Vec<ShapeId> = surface
            .shapes()
            .iter()
            .map(|s| s.id())
            .filter(|id| surface.contains_point(*id, point))
            .collect();
        for id in &hits {
            surface.remove(*id);
        }
        if !hits.is_empty() {
            log::debug!("erased {} shapes at ({:.1}, {:.1})", hits.len(), point.x, point.y);
        }
        surface.request_redraw();
    }
}
