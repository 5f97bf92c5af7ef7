use egui::Pos2;

use crate::brush::BrushConfig;
use crate::shape::{Rectangle, Shape};
use crate::tools::{DragState, Tool};

/// Outlined or filled rectangle, spanned between press and release.
#[derive(Debug, Clone, Default)]
pub struct RectangleTool {
    filled: bool,
    drag: DragState,
}

impl RectangleTool {
    pub fn new(filled: bool) -> Self {
        Self {
            filled,
            drag: DragState::Idle,
        }
    }
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        if self.filled { "Filled Rectangle" } else { "Rectangle" }
    }

    fn drag_state(&self) -> &DragState {
        &self.drag
    }

    fn drag_state_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    fn build_shape(&self, anchor: Pos2, live: Pos2, brush: &BrushConfig) -> Shape {
        let fill = self.filled.then(|| brush.fill_color());
        Rectangle::from_corners(anchor, live, fill, brush.outline_color(), brush.thickness())
            .into()
    }
}
