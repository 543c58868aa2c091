//! Toolbar state: active tool, color and stroke width.

use crate::style::{DrawStyle, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::tools::Tool;
use serde::{Deserialize, Serialize};

/// Something the user did on the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "value")]
pub enum ToolbarAction {
    SelectTool(Tool),
    SetColor(String),
    SetStrokeWidth(u32),
    Undo,
    Redo,
    /// Placeholder button; there is no export format.
    Export,
}

/// Toolbar state holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarStore {
    tool: Tool,
    style: DrawStyle,
}

impl ToolbarStore {
    pub fn new(tool: Tool, style: DrawStyle) -> Self {
        let mut store = Self { tool, style: DrawStyle::default() };
        store.set_color(style.color);
        store.set_stroke_width(style.stroke_width);
        store
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> &str {
        &self.style.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.style.stroke_width
    }

    /// Style snapshot for the tools.
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Returns true if the tool changed.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if self.tool == tool {
            return false;
        }
        self.tool = tool;
        true
    }

    /// Returns true if the color changed. The value is stored verbatim.
    pub fn set_color(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        if self.style.color == color {
            return false;
        }
        self.style.color = color;
        true
    }

    /// Returns true if the width changed.
    ///
    /// Values are clamped to the slider range, the only place stroke width is
    /// bounded.
    pub fn set_stroke_width(&mut self, width: u32) -> bool {
        let clamped = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if clamped != width {
            log::debug!("stroke width {} clamped to {}", width, clamped);
        }
        if self.style.stroke_width == clamped {
            return false;
        }
        self.style.stroke_width = clamped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = ToolbarStore::default();
        assert_eq!(store.tool(), Tool::Select);
        assert_eq!(store.color(), "#000000");
        assert_eq!(store.stroke_width(), 2);
    }

    #[test]
    fn test_setters_report_change() {
        let mut store = ToolbarStore::default();
        assert!(store.set_tool(Tool::Pen));
        assert!(!store.set_tool(Tool::Pen));
        assert!(store.set_color("#ff0000"));
        assert!(!store.set_color("#ff0000"));
        assert!(store.set_stroke_width(7));
        assert!(!store.set_stroke_width(7));
    }

    #[test]
    fn test_stroke_width_clamped_to_slider() {
        let mut store = ToolbarStore::default();
        store.set_stroke_width(0);
        assert_eq!(store.stroke_width(), 1);
        store.set_stroke_width(99);
        assert_eq!(store.stroke_width(), 20);
        assert!(!store.set_stroke_width(25));
    }

    #[test]
    fn test_color_not_interpreted() {
        let mut store = ToolbarStore::default();
        store.set_color("not a color");
        assert_eq!(store.style().color, "not a color");
    }

    #[test]
    fn test_new_clamps() {
        let store = ToolbarStore::new(Tool::Arrow, DrawStyle::new("#111111", 40));
        assert_eq!(store.tool(), Tool::Arrow);
        assert_eq!(store.stroke_width(), 20);
        assert_eq!(store.color(), "#111111");
    }

    #[test]
    fn test_action_adjacent_tagging() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: ToolbarAction,
        }
        let w: Wrapper =
            toml::from_str(r#"a = { action = "select_tool", value = "circle" }"#).unwrap();
        assert_eq!(w.a, ToolbarAction::SelectTool(Tool::Circle));
    }
}
