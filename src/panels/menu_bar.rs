/// Top menu bar. Holds the visibility flags it toggles.
#[derive(Debug, Default)]
pub struct MenuBar {
    pub show_about: bool,
}

impl MenuBar {
    /// Draws the bar; `show_tools` is the tool panel's visibility.
    pub fn show(&mut self, ctx: &egui::Context, show_tools: &mut bool) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        log::info!("Exit requested from menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.checkbox(show_tools, "Show Tool Options").changed() {
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }
}

pub fn about_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("About")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("egui paint {}", env!("CARGO_PKG_VERSION")));
            ui.label("Drag on the canvas to draw lines, rectangles and circles.");
        });
}
