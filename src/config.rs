use std::path::Path;
use std::time::Duration;

use egui::{Color32, Pos2, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use crate::brush::{BrushConfig, MAX_THICKNESS, MIN_THICKNESS};
use crate::error::{ConfigError, ConfigResult};

/// Looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "egui_paint.json";

pub const MIN_FPS: f32 = 1.0;
pub const MAX_FPS: f32 = 1000.0;

/// When the tool panel's claim on the pointer blocks the drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuppressionPolicy {
    /// Skip the active tool on every frame egui wants the pointer, even in
    /// the middle of a drag.
    #[default]
    EveryFrame,
    /// Only refuse to start a drag while egui wants the pointer. A drag that
    /// began on the canvas keeps tracking over the panel.
    PressOnly,
}

/// Startup settings. Every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Repaint cap.
    pub max_fps: f32,
    pub background: [u8; 3],
    pub panel_position: [f32; 2],
    pub panel_size: [f32; 2],
    /// Shrink applied when the tool panel is larger than the canvas.
    pub panel_margin: f32,
    pub suppression: SuppressionPolicy,
    pub brush: BrushConfig,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_title: "egui paint".to_owned(),
            window_size: [1800.0, 900.0],
            max_fps: 60.0,
            background: [0, 0, 0],
            panel_position: [20.0, 60.0],
            panel_size: [260.0, 200.0],
            panel_margin: 25.0,
            suppression: SuppressionPolicy::EveryFrame,
            brush: BrushConfig::default(),
        }
    }
}

impl PaintConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults if there is no such file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        log::info!("Loading config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_FPS..=MAX_FPS).contains(&self.max_fps) {
            return Err(ConfigError::Invalid(format!(
                "max_fps must be within {MIN_FPS}..={MAX_FPS}, got {}",
                self.max_fps
            )));
        }
        if self
            .window_size
            .iter()
            .any(|side| !side.is_finite() || *side <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "window_size must be positive, got {:?}",
                self.window_size
            )));
        }
        if self.panel_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "panel_margin must not be negative, got {}",
                self.panel_margin
            )));
        }
        let thickness = self.brush.thickness();
        if !(MIN_THICKNESS..=MAX_THICKNESS).contains(&thickness) {
            return Err(ConfigError::Invalid(format!(
                "brush thickness must be within {MIN_THICKNESS}..={MAX_THICKNESS}, got {thickness}"
            )));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.max_fps)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn panel_position(&self) -> Pos2 {
        pos2(self.panel_position[0], self.panel_position[1])
    }

    pub fn panel_size(&self) -> Vec2 {
        vec2(self.panel_size[0], self.panel_size[1])
    }
}
