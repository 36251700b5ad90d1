//! Configuration schema types for `pxs.toml`
//!
//! Defines the structure and validation rules for editor configuration.

use std::path::PathBuf;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::grid::BlockSize;
use crate::preview::DEFAULT_FPS;

/// Initial editor state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Grid resolution new projects start at (cells per side)
    #[serde(default = "default_grid")]
    pub grid: u32,
    /// Initial paint color, any color string the editor accepts
    #[serde(default = "default_color")]
    pub color: String,
    /// Preview playback rate
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { grid: default_grid(), color: default_color(), fps: default_fps() }
    }
}

fn default_grid() -> u32 {
    BlockSize::default().resolution()
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

/// Extra stamps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StampsConfig {
    /// Directory of `*.png` stamps added to the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Complete pxs.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PxsConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub stamps: StampsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "editor.grid")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxs.toml: '{}' {}", self.field, self.message)
    }
}

impl PxsConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if BlockSize::from_resolution(self.editor.grid).is_none() {
            errors.push(ConfigValidationError {
                field: "editor.grid".to_string(),
                message: "must be one of 8, 16, 32, 64".to_string(),
            });
        }

        if let Err(e) = parse_color(&self.editor.color) {
            errors.push(ConfigValidationError {
                field: "editor.color".to_string(),
                message: format!("is not a valid color: {}", e),
            });
        }

        if !(1..=60).contains(&self.editor.fps) {
            errors.push(ConfigValidationError {
                field: "editor.fps".to_string(),
                message: "must be between 1 and 60".to_string(),
            });
        }

        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: "logging.filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Block size new projects start with. Falls back to the default for an
    /// invalid grid.
    pub fn block_size(&self) -> BlockSize {
        BlockSize::from_resolution(self.editor.grid).unwrap_or_default()
    }

    /// Initial paint color. Falls back to opaque black for an invalid color.
    pub fn color(&self) -> Rgba<u8> {
        parse_color(&self.editor.color).unwrap_or(Rgba([0, 0, 0, 255]))
    }
}
