use tiffview_core::config::MetadataView;

const OVERLAY_MARGIN: f32 = 10.0;

/// Presentation of the metadata report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataRenderer {
    /// Black text on a white box painted over the top-left of the window.
    Overlay,
    /// Separate panel to the right of the image.
    Panel,
}

impl From<MetadataView> for MetadataRenderer {
    fn from(view: MetadataView) -> Self {
        match view {
            MetadataView::Overlay => MetadataRenderer::Overlay,
            MetadataView::Panel => MetadataRenderer::Panel,
        }
    }
}

impl MetadataRenderer {
    /// Panels must be laid out before the central viewport.
    pub fn show_side(&self, ctx: &egui::Context, text: &str) {
        if *self != MetadataRenderer::Panel {
            return;
        }
        egui::SidePanel::right("metadata")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.strong("Image Info");
                ui.separator();
                ui.monospace(text);
            });
    }

    /// Overlays are painted after the viewport so they stay on top.
    pub fn show_overlay(&self, ctx: &egui::Context, text: &str) {
        if *self != MetadataRenderer::Overlay {
            return;
        }
        egui::Area::new(egui::Id::new("metadata_overlay"))
            .fixed_pos(egui::pos2(OVERLAY_MARGIN, OVERLAY_MARGIN))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::same(5))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .size(13.0)
                                .color(egui::Color32::BLACK),
                        );
                    });
            });
    }
}
