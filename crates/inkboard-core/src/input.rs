//! Pointer events and the mapping from client to surface coordinates.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Height of the toolbar strip above the surface, in client pixels.
pub const DEFAULT_TOOLBAR_HEIGHT: f64 = 64.0;

/// Which phase of a pointer gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Raw pointer event in client (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Down { .. } => PointerEventKind::Down,
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Up { .. } => PointerEventKind::Up,
        }
    }

    /// Client coordinates of the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

/// Where the surface sits inside the window and how large it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Client position of the surface's top-left corner.
    pub origin: Vec2,
    /// Surface size.
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::below_toolbar(Size::new(1280.0, 800.0), DEFAULT_TOOLBAR_HEIGHT)
    }
}

impl Viewport {
    /// Surface filling a window of `window` size under a toolbar strip.
    pub fn below_toolbar(window: Size, toolbar_height: f64) -> Self {
        Self {
            origin: Vec2::new(0.0, toolbar_height),
            size: Size::new(window.width, (window.height - toolbar_height).max(0.0)),
        }
    }

    /// Convert a client point to surface coordinates.
    pub fn client_to_surface(&self, client: Point) -> Point {
        client - self.origin
    }

    /// Convert a surface point to client coordinates.
    pub fn surface_to_client(&self, surface: Point) -> Point {
        surface + self.origin
    }

    /// Follow a window resize, keeping the toolbar strip.
    pub fn resize(&mut self, window: Size) {
        self.size = Size::new(window.width, (window.height - self.origin.y).max(0.0));
    }
}
