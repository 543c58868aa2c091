//! Inkboard Core Library
//!
//! Tool state machine, pointer geometry and shape scene for a freehand
//! whiteboard. Rendering is left to whoever implements [`RenderSurface`];
//! [`Scene`] is the in-memory implementation used by the app and the tests.

pub mod board;
pub mod config;
pub mod geometry;
pub mod history;
pub mod input;
pub mod shapes;
pub mod store;
pub mod style;
pub mod surface;
pub mod tools;

pub use board::Whiteboard;
pub use config::{BoardConfig, ConfigError};
pub use geometry::{arrow_from_drag, circle_from_drag, rect_from_drag, ArrowGeometry, DragCircle, DragRect};
pub use history::{History, SceneCommand, Transaction};
pub use input::{PointerEvent, PointerEventKind, Viewport};
pub use shapes::{Shape, ShapeId, ShapeStyle, ShapeTrait};
pub use store::{ToolbarAction, ToolbarStore};
pub use style::{DrawStyle, Rgba};
pub use surface::{Brush, RenderSurface, Scene};
pub use tools::{ArrowPreview, Tool, ToolController, ToolHandler, ToolOptions};
