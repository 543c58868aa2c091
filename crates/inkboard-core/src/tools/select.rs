//! Select tool.

use super::{Tool, ToolHandler};
use crate::surface::RenderSurface;
use kurbo::Point;

/// Hands clicks to the surface's own selection after making every shape
/// selectable.
#[derive(Debug, Default)]
pub struct SelectTool;

impl ToolHandler for SelectTool {
    fn tool(&self) -> Tool {
        Tool::Select
    }

    fn on_install(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_selection_enabled(true);
    }

    fn on_uninstall(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_selection_enabled(false);
    }

    // Touches every shape on each click; fine for whiteboard-sized scenes.
    fn pointer_down(&mut self, surface: &mut dyn RenderSurface, _point: Point) {
        surface.set_all_selectable(true);
    }
}
