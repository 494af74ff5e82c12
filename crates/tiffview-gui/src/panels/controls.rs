use crate::app::TiffViewApp;

const LOG_LINES: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut TiffViewApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);

        let button = egui::Button::new(egui::RichText::new("Open TIFF").strong().size(14.0));
        if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
            app.open_dialog(ctx);
        }

        ui.add_space(2.0);

        // Status line
        ui.horizontal(|ui| {
            if let Some(name) = app.ui_state.file_name() {
                ui.label(name);
                ui.separator();
            }
            if let Some(size) = app.viewport.view.bitmap().map(|b| b.size()) {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", app.viewport.view.scale_factor() * 100.0));
                ui.separator();
            }
            ui.label("F1: image info");
        });

        // Most recent log lines, oldest first.
        let start = app.ui_state.log_messages.len().saturating_sub(LOG_LINES);
        for msg in &app.ui_state.log_messages[start..] {
            ui.small(msg);
        }

        ui.add_space(2.0);
    });
}
