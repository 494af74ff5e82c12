use tiffview_core::viewport::wheel_zoom_factor;

use crate::app::TiffViewApp;

pub fn show(ctx: &egui::Context, app: &mut TiffViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        app.viewport.area = rect.size();
        paint_background(ui, rect);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        if let Some(texture_id) = app.viewport.texture.as_ref().map(|t| t.id()) {
            handle_zoom(ui, &response, app);
            handle_pan(ui, &response, app);

            if let Some(img_rect) = app.viewport.view.image_rect([rect.center().x, rect.center().y]) {
                let img_rect = egui::Rect::from_min_size(
                    egui::pos2(img_rect.min[0], img_rect.min[1]),
                    egui::vec2(img_rect.size[0], img_rect.size[1]),
                );
                draw_image(ui, texture_id, img_rect);
            }
        } else {
            show_placeholder(ui, rect);
        }

        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            draw_drop_hint(ui, rect);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// One zoom step per wheel event; only the sign of the delta matters.
fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut TiffViewApp) {
    if !response.contains_pointer() {
        return;
    }
    let wheel_deltas: Vec<f32> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                egui::Event::MouseWheel { delta, .. } => Some(delta.y),
                _ => None,
            })
            .collect()
    });
    for dy in wheel_deltas {
        app.viewport.view.zoom(wheel_zoom_factor(dy));
    }
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut TiffViewApp) {
    let (pressed, held, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.interact_pos(),
        )
    });

    if let Some(pos) = pos {
        if pressed && response.contains_pointer() {
            app.ui_state.drag.press([pos.x, pos.y]);
        } else if let Some(delta) = app.ui_state.drag.drag_to([pos.x, pos.y], held) {
            app.viewport.view.pan(delta[0], delta[1]);
        }
    }
    if !held {
        app.ui_state.drag.release();
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open a TIFF file or drop an image here",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

fn draw_drop_hint(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(120));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drop to open",
        egui::FontId::proportional(22.0),
        egui::Color32::WHITE,
    );
}
