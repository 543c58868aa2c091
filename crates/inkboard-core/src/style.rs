//! Draw style shared by the toolbar and the tools.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest stroke width the toolbar slider allows.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Largest stroke width the toolbar slider allows.
pub const MAX_STROKE_WIDTH: u32 = 20;

/// Color string meaning "no paint".
pub const TRANSPARENT: &str = "transparent";

/// Color and stroke width as set on the toolbar.
///
/// The color is kept as the string the user picked and handed to the surface
/// untouched. Use [`Rgba::parse`] when a consumer needs channel values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub color: String,
    pub stroke_width: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            stroke_width: 2,
        }
    }
}

impl DrawStyle {
    pub fn new(color: impl Into<String>, stroke_width: u32) -> Self {
        Self {
            color: color.into(),
            stroke_width,
        }
    }

    /// Stroke width as a surface length.
    pub fn width(&self) -> f64 {
        f64::from(self.stroke_width)
    }
}

/// Errors from interpreting a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("expected 3, 6 or 8 hex digits: {0}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0}")]
    BadDigit(String),
}

/// RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or the keyword `transparent`.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(TRANSPARENT) {
            return Ok(Self::new(0, 0, 0, 0));
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
                    v * 17
                };
                Ok(Self::new(nib(0), nib(1), nib(2), 255))
            }
            6 => Ok(Self::new(byte(0), byte(2), byte(4), 255)),
            8 => Ok(Self::new(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
