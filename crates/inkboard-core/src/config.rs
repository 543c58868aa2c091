//! Board configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```toml
//! [canvas]
//! width = 1280.0
//! height = 800.0
//! toolbar_height = 64.0
//!
//! [defaults]
//! tool = "select"
//! color = "#000000"
//! stroke_width = 2
//!
//! [arrow]
//! head_length = 20.0
//! head_angle_degrees = 30.0
//! keep_stray_heads = false
//!
//! [text]
//! placeholder = "Type here"
//! font_scale = 5.0
//!
//! [history]
//! max_depth = 100
//! ```

use crate::history::DEFAULT_MAX_DEPTH;
use crate::input::{Viewport, DEFAULT_TOOLBAR_HEIGHT};
use crate::style::{DrawStyle, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::tools::{ArrowPreview, Tool, ToolOptions};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Window and surface placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub toolbar_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
        }
    }
}

/// Toolbar state at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub tool: Tool,
    pub color: String,
    pub stroke_width: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let style = DrawStyle::default();
        Self {
            tool: Tool::default(),
            color: style.color,
            stroke_width: style.stroke_width,
        }
    }
}

/// Arrowhead shape and preview behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    pub head_length: f64,
    pub head_angle_degrees: f64,
    /// Leave one arrowhead per pointer move on the surface, as older
    /// whiteboards did.
    pub keep_stray_heads: bool,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length: 20.0,
            head_angle_degrees: 30.0,
            keep_stray_heads: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub placeholder: String,
    /// Font size per unit of stroke width.
    pub font_scale: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type here".to_string(),
            font_scale: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Complete board configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub canvas: CanvasConfig,
    pub defaults: DefaultsConfig,
    pub arrow: ArrowConfig,
    pub text: TextConfig,
    pub history: HistoryConfig,
}

impl BoardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values no surface can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, value: value.to_string() })
            }
        }

        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        if !(self.canvas.toolbar_height >= 0.0 && self.canvas.toolbar_height < self.canvas.height) {
            return Err(ConfigError::OutOfRange {
                field: "canvas.toolbar_height",
                value: self.canvas.toolbar_height.to_string(),
            });
        }
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.defaults.stroke_width) {
            return Err(ConfigError::OutOfRange {
                field: "defaults.stroke_width",
                value: self.defaults.stroke_width.to_string(),
            });
        }
        positive("arrow.head_length", self.arrow.head_length)?;
        if !(self.arrow.head_angle_degrees > 0.0 && self.arrow.head_angle_degrees < 90.0) {
            return Err(ConfigError::OutOfRange {
                field: "arrow.head_angle_degrees",
                value: self.arrow.head_angle_degrees.to_string(),
            });
        }
        positive("text.font_scale", self.text.font_scale)?;
        if self.history.max_depth == 0 {
            return Err(ConfigError::OutOfRange {
                field: "history.max_depth",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::below_toolbar(
            Size::new(self.canvas.width, self.canvas.height),
            self.canvas.toolbar_height,
        )
    }

    pub fn default_style(&self) -> DrawStyle {
        DrawStyle::new(self.defaults.color.clone(), self.defaults.stroke_width)
    }

    pub fn tool_options(&self) -> ToolOptions {
        ToolOptions {
            head_length: self.arrow.head_length,
            head_angle: self.arrow.head_angle_degrees.to_radians(),
            arrow_preview: if self.arrow.keep_stray_heads {
                ArrowPreview::KeepStrayHeads
            } else {
                ArrowPreview::Replace
            },
            text_placeholder: self.text.placeholder.clone(),
            font_scale: self.text.font_scale,
        }
    }
}
