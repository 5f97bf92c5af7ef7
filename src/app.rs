use std::time::Duration;

use crate::config::PaintConfig;
use crate::input::PointerSample;
use crate::panels::{self, MenuBar, ToolsPanel};
use crate::renderer::Renderer;
use crate::state::EditorState;

pub struct PaintApp {
    state: EditorState,
    renderer: Renderer,
    menu_bar: MenuBar,
    tools_panel: ToolsPanel,
    frame_interval: Duration,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &PaintConfig) -> Self {
        Self {
            state: EditorState::new(config.brush.clone(), config.suppression),
            renderer: Renderer::new(config.background_color()),
            menu_bar: MenuBar::default(),
            tools_panel: ToolsPanel::new(
                config.panel_position(),
                config.panel_size(),
                config.panel_margin,
            ),
            frame_interval: config.frame_interval(),
        }
    }

    /// Builds one frame: menu bar, tool panel, then the canvas below the bar.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.menu_bar.show(ctx, &mut self.tools_panel.open);

        // What the menu bar leaves over is the drawing surface.
        let surface = ctx.available_rect();
        if self.tools_panel.open {
            self.tools_panel.show(ctx, surface, &mut self.state);
        }
        panels::about_window(ctx, &mut self.menu_bar.show_about);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());

                self.state.step(PointerSample::from_egui(&response));
                self.renderer.render(
                    &painter,
                    response.rect,
                    self.state.document(),
                    self.state.preview(),
                );
            });

        ctx.request_repaint_after(self.frame_interval);
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
