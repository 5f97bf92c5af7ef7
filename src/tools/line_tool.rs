use egui::Pos2;

use crate::brush::BrushConfig;
use crate::shape::{Line, Shape};
use crate::tools::{DragState, Tool};

#[derive(Debug, Clone, Default)]
pub struct LineTool {
    drag: DragState,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn drag_state(&self) -> &DragState {
        &self.drag
    }

    fn drag_state_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    fn build_shape(&self, anchor: Pos2, live: Pos2, brush: &BrushConfig) -> Shape {
        let (start_color, end_color) = brush.line_colors();
        Line::new(anchor, live, start_color, end_color).into()
    }
}
