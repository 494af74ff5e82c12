/// Zoom factor applied for a single upward wheel event.
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Zoom factor applied for a single downward (or zero) wheel event.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Smallest factor accepted by `Viewport::zoom`; anything below is clamped.
pub const MIN_ZOOM_FACTOR: f32 = 1e-3;

/// Rendered image dimensions never drop below this many pixels.
pub const MIN_RENDERED_SIZE: f32 = 1.0;

/// Zooming in stops once the long side of the rendered image reaches this
/// many pixels (or the bitmap's own size, if larger).
pub const MAX_RENDERED_SIZE: f32 = 32_768.0;

/// Extensions accepted for drag-and-drop loading (compared case-insensitively).
pub const DROP_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif"];

/// Extensions offered by the open-file dialog.
pub const DIALOG_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Upper bound of the display range produced by min-max normalization.
pub const DISPLAY_MAX: f32 = 255.0;

/// Default inner window size in logical points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [640.0, 640.0];
