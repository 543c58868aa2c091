//! Render surface abstraction.
//!
//! The surface owns every shape, draws them, and provides the built-in
//! pointer behaviors (freehand drawing, click selection, text editing). Tools
//! only hold shape ids borrowed from it.

mod scene;

pub use scene::Scene;

use crate::input::{PointerEvent, PointerEventKind};
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Freehand brush configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: String,
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            width: 1.0,
        }
    }
}

/// Operations a tool may perform on the drawing surface.
pub trait RenderSurface {
    /// Add a shape on top of the scene.
    fn add(&mut self, shape: Shape) -> ShapeId;

    /// Remove a shape, returning it if it was present.
    fn remove(&mut self, id: ShapeId) -> Option<Shape>;

    /// All shapes, back to front.
    fn shapes(&self) -> &[Shape];

    /// Look up a shape by id.
    fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes().iter().find(|s| s.id() == id)
    }

    /// Mutate a shape in place. Returns false if the id is unknown.
    fn modify(&mut self, id: ShapeId, edit: &mut dyn FnMut(&mut Shape)) -> bool;

    /// Hit-test `point` against a shape's bounds.
    fn contains_point(&self, id: ShapeId, point: Point) -> bool {
        self.get(id).is_some_and(|s| s.contains_point(point))
    }

    /// Ask for the scene to be drawn again.
    fn request_redraw(&mut self);

    /// Surface coordinates of a raw pointer event.
    fn pointer(&self, event: &PointerEvent) -> Point;

    /// Toggle the built-in freehand drawing mode.
    fn set_drawing_mode(&mut self, enabled: bool);

    fn is_drawing_mode(&self) -> bool;

    /// Configure the freehand brush.
    fn set_brush(&mut self, brush: Brush);

    /// Toggle built-in click selection.
    fn set_selection_enabled(&mut self, enabled: bool);

    /// Set the `selectable` flag on every shape.
    fn set_all_selectable(&mut self, selectable: bool);

    /// Currently focused shape.
    fn active_object(&self) -> Option<ShapeId>;

    /// Focus a shape, or clear focus with `None`.
    fn set_active_object(&mut self, id: Option<ShapeId>);

    /// Start keyboard editing of a text shape. Returns false if `id` is not text.
    fn enter_text_editing(&mut self, id: ShapeId) -> bool;

    /// Built-in pointer behavior, run after the installed tool handler.
    fn native_pointer(&mut self, kind: PointerEventKind, point: Point);

    /// Follow a window resize.
    fn resize(&mut self, window: Size);
}
