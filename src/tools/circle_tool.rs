use egui::Pos2;

use crate::brush::BrushConfig;
use crate::shape::{Circle, Shape};
use crate::tools::{DragState, Tool};

/// Circle centered on the press point, reaching to the pointer.
#[derive(Debug, Clone, Default)]
pub struct CircleTool {
    drag: DragState,
}

impl CircleTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn drag_state(&self) -> &DragState {
        &self.drag
    }

    fn drag_state_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    fn build_shape(&self, anchor: Pos2, live: Pos2, brush: &BrushConfig) -> Shape {
        Circle::through(anchor, live, brush.outline_color(), brush.thickness()).into()
    }
}
