use egui::Color32;
use serde::{Deserialize, Serialize};

pub const MIN_THICKNESS: f32 = 1.0;
pub const MAX_THICKNESS: f32 = 100.0;

/// The four drawing tools offered by the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    FilledRectangle,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::FilledRectangle,
        ToolKind::Circle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::FilledRectangle => "Filled Rectangle",
            Self::Circle => "Circle",
        }
    }
}

/// How a committed line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineColorMode {
    /// Both endpoints use the outline color.
    #[default]
    Solid,
    /// Outline color at the start, fill color at the end.
    Gradient,
}

impl LineColorMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Gradient => "Gradient",
        }
    }
}

/// Converts a `0.0..=1.0` RGB triple, as edited by the color pickers, into an
/// opaque color. Channels are truncated and saturate outside the unit range.
pub fn rgb_to_color32(rgb: [f32; 3]) -> Color32 {
    Color32::from_rgb(
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8,
    )
}

/// Process-wide brush settings, edited through the tool panel and read by
/// every tool when it builds a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub tool: ToolKind,
    pub line_mode: LineColorMode,
    /// Linear RGB in `0.0..=1.0`.
    pub outline: [f32; 3],
    /// Linear RGB in `0.0..=1.0`.
    pub fill: [f32; 3],
    thickness: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::Line,
            line_mode: LineColorMode::Solid,
            outline: [1.0, 0.2, 0.3],
            fill: [0.2, 0.6, 1.0],
            thickness: 12.0,
        }
    }
}

impl BrushConfig {
    pub fn outline_color(&self) -> Color32 {
        rgb_to_color32(self.outline)
    }

    pub fn fill_color(&self) -> Color32 {
        rgb_to_color32(self.fill)
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }

    /// Endpoint colors for a line drawn with the current mode.
    pub fn line_colors(&self) -> (Color32, Color32) {
        match self.line_mode {
            LineColorMode::Solid => (self.outline_color(), self.outline_color()),
            LineColorMode::Gradient => (self.outline_color(), self.fill_color()),
        }
    }
}
