//! The whiteboard: toolbar state, the installed tool and the scene wired
//! together.

use crate::config::BoardConfig;
use crate::input::{PointerEvent, PointerEventKind};
use crate::store::{ToolbarAction, ToolbarStore};
use crate::surface::{RenderSurface, Scene};
use crate::tools::{Tool, ToolController};
use kurbo::Size;

/// Toolbar, tool controller and scene of one canvas.
pub struct Whiteboard {
    store: ToolbarStore,
    controller: ToolController,
    scene: Scene,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl Whiteboard {
    /// Create a board and install the configured starting tool.
    pub fn new(config: &BoardConfig) -> Self {
        let mut board = Self {
            store: ToolbarStore::new(config.defaults.tool, config.default_style()),
            controller: ToolController::new(config.tool_options()),
            scene: Scene::new(config.viewport(), config.history.max_depth),
        };
        board.rebind();
        board
    }

    pub fn store(&self) -> &ToolbarStore {
        &self.store
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tool(&self) -> Tool {
        self.store.tool()
    }

    /// Tool whose handler is currently installed.
    pub fn installed_tool(&self) -> Option<Tool> {
        self.controller.active_tool()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.store.set_tool(tool) {
            self.rebind();
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        if self.store.set_color(color) {
            self.rebind();
        }
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        if self.store.set_stroke_width(width) {
            self.rebind();
        }
    }

    /// Apply a toolbar action.
    pub fn apply(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::SelectTool(tool) => self.set_tool(tool),
            ToolbarAction::SetColor(color) => self.set_color(color),
            ToolbarAction::SetStrokeWidth(width) => self.set_stroke_width(width),
            ToolbarAction::Undo => {
                self.undo();
            }
            ToolbarAction::Redo => {
                self.redo();
            }
            ToolbarAction::Export => log::warn!("export is not supported"),
        }
    }

    /// Reinstall the tool handler with the current toolbar snapshot.
    ///
    /// When the handler is replaced, a gesture in progress is closed: its
    /// shapes stay as they are and its history entry is committed. A handler
    /// restyled in place keeps its gesture open.
    fn rebind(&mut self) {
        let replaced = self
            .controller
            .install(self.store.tool(), self.store.style(), &mut self.scene);
        if replaced {
            self.scene.commit_transaction();
        }
    }

    /// Feed a raw pointer event through the installed tool.
    ///
    /// Everything between pointer-down and pointer-up becomes one undo step.
    pub fn pointer(&mut self, event: PointerEvent) {
        let kind = event.kind();
        if kind == PointerEventKind::Down {
            self.scene.begin_transaction();
        }
        self.controller.dispatch(&event, &mut self.scene);
        if kind == PointerEventKind::Up {
            self.scene.commit_transaction();
        }
    }

    pub fn resize(&mut self, window: Size) {
        self.scene.resize(window);
    }

    /// Type into the text being edited.
    pub fn type_text(&mut self, s: &str) -> bool {
        self.scene.insert_text(s)
    }

    pub fn backspace(&mut self) -> bool {
        self.scene.backspace()
    }

    /// Drop focus and leave text editing.
    pub fn escape(&mut self) {
        self.scene.clear_focus();
    }

    pub fn can_undo(&self) -> bool {
        self.scene.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.scene.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.controller.reset_session();
        self.scene.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.controller.reset_session();
        self.scene.redo()
    }
}
