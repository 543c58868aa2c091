//! Tool system for the whiteboard.
//!
//! Exactly one [`ToolHandler`] is installed on a surface at a time. The
//! [`ToolController`] tears the previous handler down before installing the
//! next, so pointer events never reach two tools.
//!
//! Handlers receive a [`DrawStyle`] snapshot when they are built. A style
//! change therefore means reinstalling the handler, which is what the
//! whiteboard does whenever the toolbar reports a change. A handler that can
//! take the new style in place (the pen) is restyled instead.

mod arrow;
mod eraser;
mod pen;
mod select;
mod shape_drag;
mod text;

pub use arrow::ArrowTool;
pub use eraser::EraserTool;
pub use pen::PenTool;
pub use select::SelectTool;
pub use shape_drag::{DragShape, ShapeDragTool};
pub use text::TextTool;

use crate::geometry::{DEFAULT_HEAD_ANGLE, DEFAULT_HEAD_LENGTH};
use crate::input::{PointerEvent, PointerEventKind};
use crate::style::DrawStyle;
use crate::surface::RenderSurface;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Pen,
    Rectangle,
    Circle,
    Arrow,
    Text,
    Eraser,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 7] = [
        Tool::Select,
        Tool::Pen,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Arrow,
        Tool::Text,
        Tool::Eraser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Pen => "pen",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Arrow => "arrow",
            Tool::Text => "text",
            Tool::Eraser => "eraser",
        }
    }

    /// Toolbar button label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pen => "Pen",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Arrow => "Arrow",
            Tool::Text => "Text",
            Tool::Eraser => "Eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// How the arrow tool treats the head of its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowPreview {
    /// Shaft and head are replaced together on every move.
    #[default]
    Replace,
    /// Only the shaft is replaced; every move leaves its head behind.
    KeepStrayHeads,
}

/// Tool settings that are not part of the toolbar style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOptions {
    pub head_length: f64,
    /// Barb angle in radians.
    pub head_angle: f64,
    pub arrow_preview: ArrowPreview,
    /// Content of a freshly placed text box.
    pub text_placeholder: String,
    /// Font size per unit of stroke width.
    pub font_scale: f64,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            head_length: DEFAULT_HEAD_LENGTH,
            head_angle: DEFAULT_HEAD_ANGLE,
            arrow_preview: ArrowPreview::default(),
            text_placeholder: "Type here".to_string(),
            font_scale: 5.0,
        }
    }
}

/// Pointer bindings of one tool.
///
/// Every method has a no-op default so tools implement only the events they
/// react to.
pub trait ToolHandler {
    fn tool(&self) -> Tool;

    /// Called when the handler becomes the active one.
    fn on_install(&mut self, _surface: &mut dyn RenderSurface) {}

    /// Called right before the handler is replaced.
    fn on_uninstall(&mut self, _surface: &mut dyn RenderSurface) {}

    fn pointer_down(&mut self, _surface: &mut dyn RenderSurface, _point: Point) {}

    fn pointer_move(&mut self, _surface: &mut dyn RenderSurface, _point: Point) {}

    fn pointer_up(&mut self, _surface: &mut dyn RenderSurface, _point: Point) {}

    /// Whether a drag session is open.
    fn is_dragging(&self) -> bool {
        false
    }

    /// Forget the session without touching the surface.
    fn reset(&mut self) {}

    /// Take a new style while staying installed. Returns false if the
    /// handler has to be rebuilt instead.
    fn restyle(&mut self, _style: &DrawStyle, _surface: &mut dyn RenderSurface) -> bool {
        false
    }
}

/// Build the handler for `tool` with a style snapshot.
pub fn handler_for(tool: Tool, style: &DrawStyle, options: &ToolOptions) -> Box<dyn ToolHandler> {
    let style = style.clone();
    match tool {
        Tool::Select => Box::new(SelectTool),
        Tool::Pen => Box::new(PenTool::new(style)),
        Tool::Rectangle => Box::new(ShapeDragTool::new(DragShape::Rectangle, style)),
        Tool::Circle => Box::new(ShapeDragTool::new(DragShape::Circle, style)),
        Tool::Arrow => Box::new(ArrowTool::new(style, options)),
        Tool::Text => Box::new(TextTool::new(style, options)),
        Tool::Eraser => Box::new(EraserTool),
    }
}

/// Owns the installed handler and routes pointer events to it.
pub struct ToolController {
    handler: Option<Box<dyn ToolHandler>>,
    options: ToolOptions,
    installs: u64,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(ToolOptions::default())
    }
}

impl ToolController {
    pub fn new(options: ToolOptions) -> Self {
        Self {
            handler: None,
            options,
            installs: 0,
        }
    }

    pub fn options(&self) -> &ToolOptions {
        &self.options
    }

    /// Tool whose handler is installed.
    pub fn active_tool(&self) -> Option<Tool> {
        self.handler.as_ref().map(|h| h.tool())
    }

    /// Number of installs so far.
    pub fn install_count(&self) -> u64 {
        self.installs
    }

    pub fn is_dragging(&self) -> bool {
        self.handler.as_ref().is_some_and(|h| h.is_dragging())
    }

    /// Bind `tool` with `style`. Returns true if the handler was replaced,
    /// false if the installed one took the new style in place.
    pub fn install(&mut self, tool: Tool, style: &DrawStyle, surface: &mut dyn RenderSurface) -> bool {
        if let Some(handler) = self.handler.as_mut() {
            if handler.tool() == tool && handler.restyle(style, surface) {
                self.installs += 1;
                log::debug!(
                    "restyled {} tool (color {}, width {})",
                    tool,
                    style.color,
                    style.stroke_width
                );
                return false;
            }
        }
        self.teardown(surface);
        let mut handler = handler_for(tool, style, &self.options);
        handler.on_install(surface);
        self.handler = Some(handler);
        self.installs += 1;
        log::debug!(
            "installed {} tool (color {}, width {})",
            tool,
            style.color,
            style.stroke_width
        );
        true
    }

    /// Remove the installed handler, if any.
    ///
    /// A drag in progress is abandoned: its preview stays on the surface as a
    /// finished shape.
    pub fn teardown(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(mut handler) = self.handler.take() {
            if handler.is_dragging() {
                log::debug!("{} tool removed mid-drag, keeping its preview", handler.tool());
            }
            handler.on_uninstall(surface);
        }
    }

    /// Drop any session handle, e.g. after undo removed the preview.
    pub fn reset_session(&mut self) {
        if let Some(handler) = self.handler.as_mut() {
            handler.reset();
        }
    }

    /// Route a raw pointer event to the installed handler, then to the
    /// surface's built-in behavior.
    pub fn dispatch(&mut self, event: &PointerEvent, surface: &mut dyn RenderSurface) {
        let point = surface.pointer(event);
        let kind = event.kind();
        if let Some(handler) = self.handler.as_mut() {
            match kind {
                PointerEventKind::Down => handler.pointer_down(surface, point),
                PointerEventKind::Move => handler.pointer_move(surface, point),
                PointerEventKind::Up => handler.pointer_up(surface, point),
            }
        }
        surface.native_pointer(kind, point);
    }
}
