//! Editable text shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum bounds width so an empty text box can still be clicked.
const MIN_WIDTH: f64 = 20.0;

/// Filled text placed by the text tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Top-left of the first line.
    pub position: Point,
    pub content: String,
    /// In surface units.
    pub font_size: f64,
    /// Content is still the hint shown on creation; the first keystroke
    /// replaces it.
    pub placeholder: bool,
    /// Whether the select tool may pick this shape.
    pub selectable: bool,
    pub style: ShapeStyle,
}

impl Text {
    pub fn new(position: Point, content: String, font_size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size,
            placeholder: false,
            selectable: false,
            style: ShapeStyle::default(),
        }
    }

    /// Text showing `hint` until the user types.
    pub fn with_placeholder(position: Point, hint: &str, font_size: f64) -> Self {
        let mut text = Self::new(position, hint.to_string(), font_size);
        text.placeholder = true;
        text
    }

    /// Insert typed characters at the end of the content.
    pub fn insert(&mut self, s: &str) {
        if self.placeholder {
            self.content.clear();
            self.placeholder = false;
        }
        self.content.push_str(s);
    }

    /// Delete the last character. Returns false if there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.placeholder {
            self.content.clear();
            self.placeholder = false;
            return true;
        }
        self.content.pop().is_some()
    }

    fn approximate_width(&self) -> f64 {
        let widest = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        widest as f64 * self.font_size * 0.6
    }

    fn approximate_height(&self) -> f64 {
        let mut lines = self.content.lines().count().max(1);
        if self.content.ends_with('\n') {
            lines += 1;
        }
        lines as f64 * self.font_size * 1.2
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let width = self.approximate_width().max(MIN_WIDTH);
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + self.approximate_height(),
        )
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
