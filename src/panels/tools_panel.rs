use egui::{Pos2, Rect, Vec2, pos2};

use crate::brush::{LineColorMode, MAX_THICKNESS, MIN_THICKNESS, ToolKind};
use crate::state::EditorState;

/// Placement of the floating tool window.
#[derive(Debug, Clone)]
pub struct ToolsPanel {
    pub open: bool,
    default_pos: Pos2,
    default_size: Vec2,
    margin: f32,
    /// Rect the window occupied on the previous frame.
    last_rect: Option<Rect>,
}

impl ToolsPanel {
    pub fn new(default_pos: Pos2, default_size: Vec2, margin: f32) -> Self {
        Self {
            open: true,
            default_pos,
            default_size,
            margin,
            last_rect: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, bounds: Rect, state: &mut EditorState) {
        let mut open = self.open;
        let mut window = egui::Window::new("Tools")
            .open(&mut open)
            .default_pos(self.default_pos)
            .default_size(self.default_size)
            .max_size(bounds.size());

        if let Some(last) = self.last_rect {
            let clamped = keep_inside(last, bounds, self.margin);
            if clamped != last {
                window = window.current_pos(clamped.min).max_size(clamped.size());
            }
        }

        let response = window.show(ctx, |ui| tool_options(ui, state));
        self.last_rect = response.map(|inner| inner.response.rect);
        self.open = open;
    }
}

fn tool_options(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.heading("Tool Options");
    ui.separator();

    let previous = state.brush.tool;
    for kind in ToolKind::ALL {
        ui.radio_value(&mut state.brush.tool, kind, kind.label());
    }
    if state.brush.tool != previous {
        log::info!("Tool selected from UI: {}", state.brush.tool.label());
        state.sync_active_tool();
    }

    if state.brush.tool == ToolKind::Line {
        ui.horizontal(|ui| {
            for mode in [LineColorMode::Solid, LineColorMode::Gradient] {
                ui.radio_value(&mut state.brush.line_mode, mode, mode.label());
            }
        });
    }

    let mut thickness = state.brush.thickness();
    let slider = egui::Slider::new(&mut thickness, MIN_THICKNESS..=MAX_THICKNESS).text("Brush Size");
    if ui.add(slider).changed() {
        state.brush.set_thickness(thickness);
    }

    ui.horizontal(|ui| {
        egui::color_picker::color_edit_button_rgb(ui, &mut state.brush.outline);
        ui.label("Outline Color");
    });
    ui.horizontal(|ui| {
        egui::color_picker::color_edit_button_rgb(ui, &mut state.brush.fill);
        ui.label("Fill Color");
    });
}

/// Clamps a floating window so it stays within `bounds`.
///
/// An axis larger than the bounds is shrunk to `bounds - margin`; the
/// position is then clamped so the whole window is visible, pinning it to
/// the origin when it still cannot fit.
pub fn keep_inside(window: Rect, bounds: Rect, margin: f32) -> Rect {
    let mut size = window.size();
    if size.x > bounds.width() {
        size.x = (bounds.width() - margin).max(0.0);
    }
    if size.y > bounds.height() {
        size.y = (bounds.height() - margin).max(0.0);
    }

    let max_x = (bounds.max.x - size.x).max(bounds.min.x);
    let max_y = (bounds.max.y - size.y).max(bounds.min.y);
    let min = pos2(
        window.min.x.clamp(bounds.min.x, max_x),
        window.min.y.clamp(bounds.min.y, max_y),
    );
    Rect::from_min_size(min, size)
}
