//! Text tool.

use super::{Tool, ToolHandler, ToolOptions};
use crate::shapes::{Shape, ShapeStyle, Text};
use crate::style::DrawStyle;
use crate::surface::RenderSurface;
use kurbo::Point;

/// Places an editable text box on click, unless something is focused.
#[derive(Debug)]
pub struct TextTool {
    style: DrawStyle,
    placeholder: String,
    font_scale: f64,
}

impl TextTool {
    pub fn new(style: DrawStyle, options: &ToolOptions) -> Self {
        Self {
            style,
            placeholder: options.text_placeholder.clone(),
            font_scale: options.font_scale,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.style.width() * self.font_scale
    }
}

impl ToolHandler for TextTool {
    fn tool(&self) -> Tool {
        Tool::Text
    }

    fn pointer_down(&mut self, surface: &mut dyn RenderSurface, point: Point) {
        // A focused object swallows the click; the user has to deselect first.
        if surface.active_object().is_some() {
            return;
        }
        let mut text = Text::with_placeholder(point, &self.placeholder, self.font_size());
        text.style = ShapeStyle::filled(&self.style);
        let id = surface.add(Shape::Text(text));
        surface.set_active_object(Some(id));
        surface.enter_text_editing(id);
        surface.request_redraw();
    }
}
