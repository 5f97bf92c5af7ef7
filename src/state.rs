use crate::brush::{BrushConfig, ToolKind};
use crate::config::SuppressionPolicy;
use crate::document::Document;
use crate::input::{InputHandler, PointerSample};
use crate::shape::Shape;
use crate::tools::{Tool, ToolType};

/// Everything the frame loop mutates: brush settings, the active tool and its
/// drag, and the committed shapes.
#[derive(Debug, Default)]
pub struct EditorState {
    pub brush: BrushConfig,
    active_tool: ToolType,
    document: Document,
    input: InputHandler,
    suppression: SuppressionPolicy,
}

impl EditorState {
    pub fn new(brush: BrushConfig, suppression: SuppressionPolicy) -> Self {
        let active_tool = ToolType::new_instance(brush.tool);
        Self {
            brush,
            active_tool,
            document: Document::new(),
            input: InputHandler::new(),
            suppression,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active_tool
    }

    /// Switches tools. Any drag in progress on the old tool is dropped.
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        self.brush.tool = kind;
        if self.active_tool.kind() == kind {
            return;
        }
        self.active_tool.deactivate();
        self.active_tool = ToolType::new_instance(kind);
        log::info!("Active tool: {}", self.active_tool.name());
    }

    /// Brings the active tool in line with `brush.tool`, which the tool
    /// panel edits directly.
    pub fn sync_active_tool(&mut self) {
        self.set_active_tool(self.brush.tool);
    }

    /// Runs one frame of input through the active tool. Returns the shape
    /// committed this frame, if any.
    pub fn step(&mut self, sample: PointerSample) -> Option<Shape> {
        let frame = self.input.process(sample);

        let suppressed = frame.ui_wants_pointer
            && match self.suppression {
                SuppressionPolicy::EveryFrame => true,
                SuppressionPolicy::PressOnly => !self.active_tool.is_dragging(),
            };
        if suppressed {
            log::trace!("pointer claimed by UI, skipping {}", self.active_tool.name());
            return None;
        }

        let shape = self.active_tool.update(&frame, &self.brush)?;
        log::info!("Committed {}", shape.kind_name());
        self.document.append(shape);
        Some(shape)
    }

    /// The in-progress shape of the active tool, if it is dragging.
    pub fn preview(&self) -> Option<Shape> {
        self.active_tool.preview(&self.brush)
    }
}
