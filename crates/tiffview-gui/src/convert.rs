use tiffview_core::bitmap::DisplayBitmap;

/// Convert an RGB8 display bitmap to an egui ColorImage.
pub fn bitmap_to_color_image(bitmap: &DisplayBitmap) -> egui::ColorImage {
    egui::ColorImage::from_rgb(bitmap.size(), bitmap.pixels())
}
