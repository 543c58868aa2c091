//! Pen tool: freehand strokes drawn by the surface itself.

use super::{Tool, ToolHandler};
use crate::style::DrawStyle;
use crate::surface::{Brush, RenderSurface};

#[derive(Debug)]
pub struct PenTool {
    style: DrawStyle,
}

impl PenTool {
    pub fn new(style: DrawStyle) -> Self {
        Self { style }
    }

    fn brush(&self) -> Brush {
        Brush {
            color: self.style.color.clone(),
            width: self.style.width(),
        }
    }
}

impl ToolHandler for PenTool {
    fn tool(&self) -> Tool {
        Tool::Pen
    }

    fn on_install(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_brush(self.brush());
        surface.set_drawing_mode(true);
    }

    /// Leaving drawing mode finishes a stroke in progress.
    fn on_uninstall(&mut self, surface: &mut dyn RenderSurface) {
        surface.set_drawing_mode(false);
    }

    // The stroke belongs to the surface, so a new brush applies to it
    // without leaving drawing mode.
    fn restyle(&mut self, style: &DrawStyle, surface: &mut dyn RenderSurface) -> bool {
        self.style = style.clone();
        surface.set_brush(self.brush());
        true
    }
}
