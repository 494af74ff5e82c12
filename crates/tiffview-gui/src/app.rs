use std::path::PathBuf;

use tiffview_core::config::ViewerConfig;
use tiffview_core::consts::DIALOG_EXTENSIONS;
use tiffview_core::dropped::first_supported;
use tiffview_core::io::loader::{self, LoadedImage};
use tracing::{debug, error, warn};

use crate::convert::bitmap_to_color_image;
use crate::panels;
use crate::panels::metadata::MetadataRenderer;
use crate::states::{UIState, ViewportState};

pub struct TiffViewApp {
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub renderer: MetadataRenderer,
    /// File to open once the display area has been laid out.
    pub pending_open: Option<PathBuf>,
}

impl TiffViewApp {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            ui_state: UIState::default(),
            viewport: ViewportState::new(config.window_size),
            renderer: config.metadata_view.into(),
            pending_open: None,
        }
    }

    /// Decode `path` and show it. On failure the error is reported and the
    /// currently displayed image stays as it is.
    pub fn load_path(&mut self, ctx: &egui::Context, path: PathBuf) {
        match loader::load(&path) {
            Ok(LoadedImage { bitmap, metadata }) => {
                let texture = ctx.load_texture(
                    "viewport",
                    bitmap_to_color_image(&bitmap),
                    egui::TextureOptions::LINEAR,
                );
                self.viewport.set_image(bitmap, texture);
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{}, {} channels)",
                    path.display(),
                    metadata.width,
                    metadata.height,
                    metadata.channel_count
                ));
                self.ui_state.metadata = Some(metadata);
                self.ui_state.file_path = Some(path);
            }
            Err(e) => {
                error!("{e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.error_message = Some(e.to_string());
            }
        }
    }

    /// Ask for a TIFF file and load it.
    pub fn open_dialog(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open TIFF File")
            .add_filter("TIFF Files", &DIALOG_EXTENSIONS)
            .pick_file()
        {
            self.load_path(ctx, path);
        }
    }

    pub fn toggle_metadata(&mut self) {
        self.ui_state.toggle_metadata();
        debug!(visible = self.ui_state.metadata_visible, "Metadata toggled");
    }

    /// Load the first dropped file with an accepted image extension.
    pub fn handle_dropped(&mut self, ctx: &egui::Context, dropped: &[egui::DroppedFile]) {
        let paths: Vec<PathBuf> = dropped.iter().filter_map(|f| f.path.clone()).collect();
        match first_supported(&paths) {
            Some(path) => {
                let path = path.to_path_buf();
                self.load_path(ctx, path);
            }
            None => warn!("Ignored drop of {} file(s): no supported image", dropped.len()),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.toggle_metadata();
        }
        let open = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            self.open_dialog(ctx);
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped(ctx, &dropped);
        }
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui_state.error_message.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        self.ui_state.error_message = None;
                    }
                });
            });
    }

    /// Lay out and run one frame of the window.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_input(ctx);

        panels::controls::show(ctx, self);
        let report = self.ui_state.metadata_text();
        if let Some(ref text) = report {
            self.renderer.show_side(ctx, text);
        }
        panels::viewport::show(ctx, self);
        if let Some(ref text) = report {
            self.renderer.show_overlay(ctx, text);
        }

        // The viewport has now recorded its real area, so the fit is correct.
        if let Some(path) = self.pending_open.take() {
            self.load_path(ctx, path);
            ctx.request_repaint();
        }

        self.show_error_dialog(ctx);
    }
}

impl eframe::App for TiffViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::{Rgb, RgbImage};
    use tiffview_core::config::MetadataView;

    use super::*;

    const SCREEN: [f32; 2] = [640.0, 640.0];
    const IMAGE_POINT: egui::Pos2 = egui::pos2(320.0, 250.0);

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_fn(w, h, |x, y| Rgb([x as u8, y as u8, 40]));
        img.save(&path).unwrap();
        path
    }

    fn run_frame(ctx: &egui::Context, app: &mut TiffViewApp, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(SCREEN[0], SCREEN[1]),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn wheel(dy: f32) -> egui::Event {
        egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Line,
            delta: egui::vec2(0.0, dy),
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn primary(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// App with a square 1000x1000 image loaded and the pointer over it.
    fn app_with_image(ctx: &egui::Context, dir: &Path) -> TiffViewApp {
        let mut app = TiffViewApp::new(&ViewerConfig::default());
        app.load_path(ctx, write_png(dir, "square.png", 1000, 1000));
        run_frame(ctx, &mut app, vec![]);
        run_frame(ctx, &mut app, vec![egui::Event::PointerMoved(IMAGE_POINT)]);
        app
    }

    fn rendered_width(app: &TiffViewApp) -> f32 {
        app.viewport.view.rendered_size().unwrap()[0]
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    #[test]
    fn test_failed_load_keeps_state_and_reports() {
        let ctx = egui::Context::default();
        let mut app = TiffViewApp::new(&ViewerConfig::default());

        app.load_path(&ctx, PathBuf::from("/nonexistent/dir/scan.tif"));

        assert!(!app.viewport.view.has_image());
        assert!(app.viewport.texture.is_none());
        assert!(app.ui_state.metadata.is_none());
        assert!(app.ui_state.error_message.is_some());
        assert!(app.ui_state.log_messages[0].starts_with("ERROR:"));
    }

    #[test]
    fn test_failed_load_keeps_previous_image() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = TiffViewApp::new(&ViewerConfig::default());
        let good = write_png(dir.path(), "good.png", 12, 8);

        app.load_path(&ctx, good.clone());
        let bitmap = app.viewport.view.bitmap().cloned().unwrap();
        let texture_id = app.viewport.texture.as_ref().map(|t| t.id()).unwrap();
        let metadata = app.ui_state.metadata.clone().unwrap();

        app.load_path(&ctx, dir.path().join("missing.tif"));

        assert_eq!(app.viewport.view.bitmap(), Some(&bitmap));
        assert_eq!(app.viewport.texture.as_ref().map(|t| t.id()), Some(texture_id));
        assert_eq!(app.ui_state.metadata.as_ref(), Some(&metadata));
        assert_eq!(app.ui_state.file_path.as_deref(), Some(good.as_path()));
        assert!(app.ui_state.error_message.is_some());
    }

    #[test]
    fn test_startup_file_fits_laid_out_area() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = TiffViewApp::new(&ViewerConfig::default());
        app.pending_open = Some(write_png(dir.path(), "big.png", 1000, 1000));

        run_frame(&ctx, &mut app, vec![]);

        assert!(app.pending_open.is_none());
        let area = app.viewport.area;
        assert!(area.y < SCREEN[1], "controls panel should shrink the area: {area:?}");
        let size = app.viewport.view.rendered_size().unwrap();
        assert_eq!(size[0], area.x.min(area.y).round(), "{size:?} in {area:?}");
        assert!(size[0] <= area.x.round() && size[1] <= area.y.round());
    }

    #[test]
    fn test_drop_without_supported_file_is_ignored() {
        let ctx = egui::Context::default();
        let mut app = TiffViewApp::new(&ViewerConfig::default());
        let dropped = vec![egui::DroppedFile {
            path: Some(PathBuf::from("notes.pdf")),
            ..Default::default()
        }];

        app.handle_dropped(&ctx, &dropped);

        assert!(app.ui_state.error_message.is_none());
        assert!(app.ui_state.log_messages.is_empty());
    }

    // -----------------------------------------------------------------------
    // Wheel zoom and drag pan
    // -----------------------------------------------------------------------

    #[test]
    fn test_each_wheel_event_zooms_once() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = app_with_image(&ctx, dir.path());
        assert_eq!(rendered_width(&app), 640.0);

        run_frame(&ctx, &mut app, vec![wheel(1.0)]);
        assert_eq!(rendered_width(&app), 704.0);

        // Magnitude is ignored, two events are two steps.
        run_frame(&ctx, &mut app, vec![wheel(-5.0), wheel(-0.1)]);
        assert_eq!(rendered_width(&app), 571.0);
    }

    #[test]
    fn test_drag_pans_by_incremental_deltas() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut app = app_with_image(&ctx, dir.path());

        run_frame(&ctx, &mut app, vec![primary(IMAGE_POINT, true)]);
        run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(egui::pos2(330.0, 260.0))]);
        run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(egui::pos2(345.0, 255.0))]);
        assert_eq!(app.viewport.view.offset(), [25.0, 5.0]);

        run_frame(&ctx, &mut app, vec![primary(egui::pos2(345.0, 255.0), false)]);
        run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(egui::pos2(400.0, 300.0))]);
        assert_eq!(app.viewport.view.offset(), [25.0, 5.0]);
        assert_eq!(rendered_width(&app), 640.0);
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    #[test]
    fn test_toggle_before_load_is_noop() {
        let mut app = TiffViewApp::new(&ViewerConfig::default());
        app.toggle_metadata();
        assert!(app.ui_state.metadata_text().is_none());
    }

    #[test]
    fn test_renderer_follows_config() {
        let config = ViewerConfig {
            metadata_view: MetadataView::Panel,
            ..Default::default()
        };
        let app = TiffViewApp::new(&config);
        assert_eq!(app.renderer, MetadataRenderer::Panel);
    }
}
