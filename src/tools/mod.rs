use egui::Pos2;

use crate::brush::{BrushConfig, ToolKind};
use crate::input::PointerFrame;
use crate::shape::Shape;

/// Tool trait defines the interface for all drawing tools.
///
/// A tool owns a [`DragState`] and knows how to turn an `(anchor, live)`
/// pair into a shape. Commit and preview both go through
/// [`Tool::build_shape`], so the preview always matches what a release on
/// the same frame would commit.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    fn drag_state(&self) -> &DragState;

    fn drag_state_mut(&mut self) -> &mut DragState;

    /// Geometry shared by preview and commit.
    fn build_shape(&self, anchor: Pos2, live: Pos2, brush: &BrushConfig) -> Shape;

    /// Called when the tool is deselected. Drops any drag in progress.
    fn deactivate(&mut self) {
        self.drag_state_mut().cancel();
    }

    fn is_dragging(&self) -> bool {
        self.drag_state().is_dragging()
    }

    /// Advance the tool by one frame, returning a shape to commit on release.
    fn update(&mut self, frame: &PointerFrame, brush: &BrushConfig) -> Option<Shape> {
        let (anchor, release) = self.drag_state_mut().update(frame)?;
        Some(self.build_shape(anchor, release, brush))
    }

    /// The shape that would be committed if the drag ended now.
    fn preview(&self, brush: &BrushConfig) -> Option<Shape> {
        let (anchor, live) = self.drag_state().span()?;
        Some(self.build_shape(anchor, live, brush))
    }
}

mod circle_tool;
mod drag;
mod line_tool;
mod rectangle_tool;

pub use circle_tool::CircleTool;
pub use drag::DragState;
pub use line_tool::LineTool;
pub use rectangle_tool::RectangleTool;

/// Enum over every available tool, each carrying only its own drag state.
#[derive(Debug, Clone)]
pub enum ToolType {
    Line(LineTool),
    Rectangle(RectangleTool),
    FilledRectangle(RectangleTool),
    Circle(CircleTool),
}

impl ToolType {
    /// Fresh, idle tool of the given kind.
    pub fn new_instance(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Line => Self::Line(LineTool::new()),
            ToolKind::Rectangle => Self::Rectangle(RectangleTool::new(false)),
            ToolKind::FilledRectangle => Self::FilledRectangle(RectangleTool::new(true)),
            ToolKind::Circle => Self::Circle(CircleTool::new()),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Line(_) => ToolKind::Line,
            Self::Rectangle(_) => ToolKind::Rectangle,
            Self::FilledRectangle(_) => ToolKind::FilledRectangle,
            Self::Circle(_) => ToolKind::Circle,
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            Self::Line(tool) => tool,
            Self::Rectangle(tool) | Self::FilledRectangle(tool) => tool,
            Self::Circle(tool) => tool,
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            Self::Line(tool) => tool,
            Self::Rectangle(tool) | Self::FilledRectangle(tool) => tool,
            Self::Circle(tool) => tool,
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::new_instance(ToolKind::default())
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        self.as_tool().name()
    }

    fn drag_state(&self) -> &DragState {
        self.as_tool().drag_state()
    }

    fn drag_state_mut(&mut self) -> &mut DragState {
        self.as_tool_mut().drag_state_mut()
    }

    fn build_shape(&self, anchor: Pos2, live: Pos2, brush: &BrushConfig) -> Shape {
        self.as_tool().build_shape(anchor, live, brush)
    }
}
