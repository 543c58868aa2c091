//! In-memory render surface.

use super::{Brush, RenderSurface};
use crate::history::{History, SceneCommand, Transaction};
use crate::input::{PointerEvent, PointerEventKind, Viewport};
use crate::shapes::{Freehand, Shape, ShapeId, ShapeStyle};
use crate::style::TRANSPARENT;
use kurbo::{Point, Size};

/// Shape list in z-order with the surface's built-in behaviors and an
/// undo history of everything that changed it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Shapes, back to front.
    shapes: Vec<Shape>,
    viewport: Viewport,
    redraws: u64,
    drawing_mode: bool,
    brush: Brush,
    /// Pen stroke being built in drawing mode.
    stroke: Option<Freehand>,
    selection_enabled: bool,
    active: Option<ShapeId>,
    editing: Option<ShapeId>,
    /// Transaction collecting the commands of the current gesture.
    pending: Option<Transaction>,
    history: History,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(viewport: Viewport, history_depth: usize) -> Self {
        Self {
            viewport,
            history: History::new(history_depth),
            ..Self::default()
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of redraws requested so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Text shape receiving keyboard input.
    pub fn editing(&self) -> Option<ShapeId> {
        self.editing
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Z position of a shape.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// Shapes whose hit area contains `point`, front to back.
    pub fn shapes_at(&self, point: Point) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.contains_point(point))
            .map(Shape::id)
            .collect()
    }

    // --- History --------------------------------------------------------

    /// Start grouping mutations into one undo step. Commits any open group.
    pub fn begin_transaction(&mut self) {
        self.commit_transaction();
        self.pending = Some(Transaction::new());
    }

    /// Close the current group. Returns true if it recorded anything.
    pub fn commit_transaction(&mut self) -> bool {
        match self.pending.take() {
            Some(tx) => self.history.commit(tx),
            None => false,
        }
    }

    pub fn in_transaction(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the last transaction. Focus and editing are cleared.
    pub fn undo(&mut self) -> bool {
        self.commit_transaction();
        let Some(tx) = self.history.undo().cloned() else {
            return false;
        };
        log::debug!("undo: reverting {} commands", tx.len());
        for command in tx.commands().iter().rev() {
            self.apply(command.inverse());
        }
        self.after_history_jump();
        true
    }

    /// Re-apply the last undone transaction.
    pub fn redo(&mut self) -> bool {
        self.commit_transaction();
        let Some(tx) = self.history.redo().cloned() else {
            return false;
        };
        log::debug!("redo: applying {} commands", tx.len());
        for command in tx.commands() {
            self.apply(command.clone());
        }
        self.after_history_jump();
        true
    }

    fn after_history_jump(&mut self) {
        self.active = None;
        self.editing = None;
        self.stroke = None;
        self.request_redraw();
    }

    fn record(&mut self, command: SceneCommand) {
        match self.pending.as_mut() {
            Some(tx) => tx.record(command),
            None => {
                let mut tx = Transaction::new();
                tx.record(command);
                self.history.commit(tx);
            }
        }
    }

    /// Apply a command without recording it.
    fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Create { index, shape } => {
                let index = index.min(self.shapes.len());
                self.shapes.insert(index, shape);
            }
            SceneCommand::Delete { shape, .. } => {
                let id = shape.id();
                self.shapes.retain(|s| s.id() != id);
            }
            SceneCommand::Modify { after, .. } => {
                let id = after.id();
                match self.shapes.iter_mut().find(|s| s.id() == id) {
                    Some(slot) => *slot = after,
                    None => log::warn!("history refers to missing shape {}", id),
                }
            }
        }
    }

    // --- Text editing ---------------------------------------------------

    /// Type into the text being edited. Returns false when not editing.
    pub fn insert_text(&mut self, s: &str) -> bool {
        let Some(id) = self.editing else {
            return false;
        };
        let changed = self.modify(id, &mut |shape| {
            if let Some(text) = shape.as_text_mut() {
                text.insert(s);
            }
        });
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Delete the last character of the text being edited.
    pub fn backspace(&mut self) -> bool {
        let Some(id) = self.editing else {
            return false;
        };
        let mut deleted = false;
        self.modify(id, &mut |shape| {
            if let Some(text) = shape.as_text_mut() {
                deleted = text.backspace();
            }
        });
        if deleted {
            self.request_redraw();
        }
        deleted
    }

    pub fn exit_text_editing(&mut self) {
        self.editing = None;
    }

    /// Drop focus and leave text editing.
    pub fn clear_focus(&mut self) {
        self.editing = None;
        self.active = None;
    }

    // --- Built-in pointer behaviors --------------------------------------

    fn freehand_pointer(&mut self, kind: PointerEventKind, point: Point) {
        match kind {
            PointerEventKind::Down => {
                self.stroke = Some(Freehand::from_points(vec![point]));
            }
            PointerEventKind::Move => {
                if let Some(stroke) = self.stroke.as_mut() {
                    stroke.add_point(point);
                    self.request_redraw();
                }
            }
            PointerEventKind::Up => {
                if let Some(stroke) = self.stroke.as_mut() {
                    if stroke.points.last() != Some(&point) {
                        stroke.add_point(point);
                    }
                }
                self.finish_stroke();
            }
        }
    }

    /// Add the stroke being drawn, painted with the current brush.
    fn finish_stroke(&mut self) {
        let Some(mut stroke) = self.stroke.take() else {
            return;
        };
        stroke.style = ShapeStyle {
            stroke: self.brush.color.clone(),
            stroke_width: self.brush.width,
            fill: TRANSPARENT.to_string(),
        };
        log::trace!("pen stroke finished with {} points", stroke.len());
        self.add(Shape::Freehand(stroke));
        self.request_redraw();
    }

    fn click_select(&mut self, point: Point) {
        let hit = self
            .shapes
            .iter()
            .rev()
            .find(|s| s.is_selectable() && s.contains_point(point))
            .map(Shape::id);
        self.set_active_object(hit);
    }
}

impl RenderSurface for Scene {
    fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        log::trace!("add {} {}", shape.kind_name(), id);
        self.record(SceneCommand::Create {
            index: self.shapes.len(),
            shape: shape.clone(),
        });
        self.shapes.push(shape);
        id
    }

    fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let shape = self.shapes.remove(index);
        log::trace!("remove {} {}", shape.kind_name(), id);
        self.record(SceneCommand::Delete {
            index,
            shape: shape.clone(),
        });
        if self.active == Some(id) {
            self.active = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(shape)
    }

    fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn modify(&mut self, id: ShapeId, edit: &mut dyn FnMut(&mut Shape)) -> bool {
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id() == id) else {
            return false;
        };
        let before = slot.clone();
        edit(slot);
        if *slot != before {
            let after = slot.clone();
            self.record(SceneCommand::Modify { before, after });
        }
        true
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn pointer(&self, event: &PointerEvent) -> Point {
        self.viewport.client_to_surface(event.position())
    }

    fn set_drawing_mode(&mut self, enabled: bool) {
        if !enabled {
            self.finish_stroke();
        }
        self.drawing_mode = enabled;
    }

    fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    fn set_all_selectable(&mut self, selectable: bool) {
        for shape in &mut self.shapes {
            shape.set_selectable(selectable);
        }
    }

    fn active_object(&self) -> Option<ShapeId> {
        self.active
    }

    fn set_active_object(&mut self, id: Option<ShapeId>) {
        let id = id.filter(|id| self.index_of(*id).is_some());
        if self.editing.is_some() && self.editing != id {
            self.editing = None;
        }
        self.active = id;
    }

    fn enter_text_editing(&mut self, id: ShapeId) -> bool {
        if self.get(id).and_then(Shape::as_text).is_none() {
            return false;
        }
        self.active = Some(id);
        self.editing = Some(id);
        true
    }

    fn native_pointer(&mut self, kind: PointerEventKind, point: Point) {
        if self.drawing_mode {
            self.freehand_pointer(kind, point);
        } else if self.selection_enabled && kind == PointerEventKind::Down {
            self.click_select(point);
        }
    }

    fn resize(&mut self, window: Size) {
        self.viewport.resize(window);
        log::debug!("surface resized to {}x{}", self.viewport.size.width, self.viewport.size.height);
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Text};

    fn scene() -> Scene {
        Scene::new(Viewport::default(), 50)
    }

    fn rect_at(x: f64, y: f64, size: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x, y), size, size))
    }

    #[test]
    fn test_add_remove_keeps_order() {
        let mut s = scene();
        let a = s.add(rect_at(0.0, 0.0, 10.0));
        let b = s.add(rect_at(5.0, 5.0, 10.0));
        assert_eq!(s.index_of(a), Some(0));
        assert_eq!(s.index_of(b), Some(1));
        assert_eq!(s.shapes_at(Point::new(7.0, 7.0)), vec![b, a]);
        assert!(s.remove(a).is_some());
        assert!(s.remove(a).is_none());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_modify_unknown_id() {
        let mut s = scene();
        let other = rect_at(0.0, 0.0, 1.0).id();
        assert!(!s.modify(other, &mut |_| {}));
    }

    #[test]
    fn test_ungrouped_mutations_are_separate_undo_steps() {
        let mut s = scene();
        s.add(rect_at(0.0, 0.0, 10.0));
        s.add(rect_at(20.0, 0.0, 10.0));
        assert!(s.undo());
        assert_eq!(s.len(), 1);
        assert!(s.undo());
        assert!(s.is_empty());
        assert!(!s.undo());
        assert!(s.redo());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_transaction_groups_mutations() {
        let mut s = scene();
        s.begin_transaction();
        let id = s.add(rect_at(0.0, 0.0, 0.0));
        s.modify(id, &mut |shape| {
            if let Shape::Rectangle(r) = shape {
                r.width = 30.0;
            }
        });
        assert!(s.commit_transaction());
        assert!(s.undo());
        assert!(s.is_empty());
        assert!(s.redo());
        match s.get(id) {
            Some(Shape::Rectangle(r)) => assert_eq!(r.width, 30.0),
            other => panic!("expected rectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_undo_delete_restores_z_position() {
        let mut s = scene();
        let a = s.add(rect_at(0.0, 0.0, 10.0));
        let b = s.add(rect_at(0.0, 0.0, 10.0));
        let c = s.add(rect_at(0.0, 0.0, 10.0));
        s.remove(b);
        s.undo();
        assert_eq!(s.index_of(a), Some(0));
        assert_eq!(s.index_of(b), Some(1));
        assert_eq!(s.index_of(c), Some(2));
    }

    #[test]
    fn test_freehand_mode_builds_stroke() {
        let mut s = scene();
        s.set_drawing_mode(true);
        s.set_brush(Brush { color: "#ff0000".to_string(), width: 3.0 });
        s.native_pointer(PointerEventKind::Down, Point::new(0.0, 0.0));
        s.native_pointer(PointerEventKind::Move, Point::new(5.0, 5.0));
        assert!(s.is_empty());
        s.native_pointer(PointerEventKind::Up, Point::new(10.0, 5.0));
        match s.shapes() {
            [Shape::Freehand(f)] => {
                assert_eq!(f.len(), 3);
                assert_eq!(f.style.stroke, "#ff0000");
                assert_eq!(f.style.stroke_width, 3.0);
            }
            other => panic!("expected one stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_leaving_drawing_mode_keeps_partial_stroke() {
        let mut s = scene();
        s.set_drawing_mode(true);
        s.begin_transaction();
        s.native_pointer(PointerEventKind::Down, Point::new(0.0, 0.0));
        s.native_pointer(PointerEventKind::Move, Point::new(5.0, 5.0));
        s.set_drawing_mode(false);
        s.native_pointer(PointerEventKind::Up, Point::new(9.0, 9.0));
        match s.shapes() {
            [Shape::Freehand(f)] => assert_eq!(f.points, vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]),
            other => panic!("expected the partial stroke, got {:?}", other),
        }
        assert!(s.commit_transaction());
        assert!(s.undo());
        assert!(s.is_empty());
    }

    #[test]
    fn test_stroke_takes_brush_at_finish() {
        let mut s = scene();
        s.set_drawing_mode(true);
        s.native_pointer(PointerEventKind::Down, Point::new(0.0, 0.0));
        s.set_brush(Brush { color: "#00ff00".to_string(), width: 7.0 });
        s.native_pointer(PointerEventKind::Up, Point::new(4.0, 0.0));
        match s.shapes() {
            [Shape::Freehand(f)] => {
                assert_eq!(f.style.stroke, "#00ff00");
                assert_eq!(f.style.stroke_width, 7.0);
            }
            other => panic!("expected one stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_click_select_picks_topmost_selectable() {
        let mut s = scene();
        let a = s.add(rect_at(0.0, 0.0, 10.0));
        let b = s.add(rect_at(0.0, 0.0, 10.0));
        s.set_selection_enabled(true);
        s.native_pointer(PointerEventKind::Down, Point::new(5.0, 5.0));
        assert_eq!(s.active_object(), None);
        s.modify(a, &mut |shape| shape.set_selectable(true));
        s.native_pointer(PointerEventKind::Down, Point::new(5.0, 5.0));
        assert_eq!(s.active_object(), Some(a));
        s.set_all_selectable(true);
        s.native_pointer(PointerEventKind::Down, Point::new(5.0, 5.0));
        assert_eq!(s.active_object(), Some(b));
        s.native_pointer(PointerEventKind::Down, Point::new(500.0, 500.0));
        assert_eq!(s.active_object(), None);
    }

    #[test]
    fn test_text_editing() {
        let mut s = scene();
        let id = s.add(Shape::Text(Text::with_placeholder(Point::ZERO, "Type here", 10.0)));
        assert!(!s.insert_text("x"));
        assert!(s.enter_text_editing(id));
        assert_eq!(s.active_object(), Some(id));
        assert!(s.insert_text("hello"));
        assert!(s.backspace());
        assert_eq!(s.get(id).and_then(Shape::as_text).map(|t| t.content.as_str()), Some("hell"));
        s.exit_text_editing();
        assert!(!s.insert_text("x"));
    }

    #[test]
    fn test_enter_editing_rejects_non_text() {
        let mut s = scene();
        let id = s.add(rect_at(0.0, 0.0, 10.0));
        assert!(!s.enter_text_editing(id));
        assert_eq!(s.editing(), None);
    }

    #[test]
    fn test_pointer_maps_through_viewport() {
        let s = scene();
        let p = s.pointer(&PointerEvent::Down { position: Point::new(10.0, 74.0) });
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut s = scene();
        let before = s.redraw_count();
        s.resize(Size::new(640.0, 480.0));
        assert_eq!(s.redraw_count(), before + 1);
        assert_eq!(s.viewport().size, Size::new(640.0, 416.0));
    }
}
