use tiffview_core::bitmap::DisplayBitmap;
use tiffview_core::viewport::Viewport;

/// Viewport display state.
pub struct ViewportState {
    pub view: Viewport,
    pub texture: Option<egui::TextureHandle>,
    /// Size of the image display area as of the last frame.
    pub area: egui::Vec2,
}

impl ViewportState {
    pub fn new(initial_area: [f32; 2]) -> Self {
        Self {
            view: Viewport::new(),
            texture: None,
            area: egui::vec2(initial_area[0], initial_area[1]),
        }
    }

    /// Swap in a freshly loaded bitmap and its uploaded texture, fitted to the
    /// current display area.
    pub fn set_image(&mut self, bitmap: DisplayBitmap, texture: egui::TextureHandle) {
        self.view.set_image(bitmap, [self.area.x, self.area.y]);
        self.texture = Some(texture);
    }
}
