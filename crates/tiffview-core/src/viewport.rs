use tracing::debug;

use crate::bitmap::DisplayBitmap;
use crate::consts::{
    MAX_RENDERED_SIZE, MIN_RENDERED_SIZE, MIN_ZOOM_FACTOR, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

/// Zoom factor for one mouse wheel event.
///
/// Only the sign matters: positive deltas zoom in, zero or negative zoom out.
pub fn wheel_zoom_factor(delta: f32) -> f32 {
    if delta > 0.0 {
        ZOOM_IN_FACTOR
    } else {
        ZOOM_OUT_FACTOR
    }
}

/// Largest size with the aspect ratio of `src` that fits inside `bounds`,
/// rounded to whole pixels and never smaller than one pixel per side.
pub fn fit_within(src: [f32; 2], bounds: [f32; 2]) -> [f32; 2] {
    let scale = (bounds[0] / src[0]).min(bounds[1] / src[1]);
    scaled(src, scale)
}

fn scaled(src: [f32; 2], scale: f32) -> [f32; 2] {
    [
        (src[0] * scale).round().max(MIN_RENDERED_SIZE),
        (src[1] * scale).round().max(MIN_RENDERED_SIZE),
    ]
}

/// Scale and pan offset of the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Rendered width divided by bitmap width.
    pub current_scale_factor: f32,
    /// Displacement of the image center from the display area center.
    pub position_offset: [f32; 2],
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            current_scale_factor: 1.0,
            position_offset: [0.0, 0.0],
        }
    }
}

/// Screen-space rectangle, top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub min: [f32; 2],
    pub size: [f32; 2],
}

/// Owns the displayed bitmap together with its rendered size and pan offset.
#[derive(Debug, Default)]
pub struct Viewport {
    bitmap: Option<DisplayBitmap>,
    rendered_size: [f32; 2],
    offset: [f32; 2],
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bitmap, fit it to `area` and reset the pan offset.
    ///
    /// A degenerate area (zero, negative or non-finite) shows the bitmap at
    /// its natural size.
    pub fn set_image(&mut self, bitmap: DisplayBitmap, area: [f32; 2]) {
        let src = bitmap_size(&bitmap);
        let area_ok = area.iter().all(|v| v.is_finite() && *v > 0.0);
        self.rendered_size = if area_ok {
            fit_within(src, area)
        } else {
            src
        };
        self.offset = [0.0, 0.0];
        self.bitmap = Some(bitmap);
        debug!(
            "Viewport image set, rendered at {}x{}",
            self.rendered_size[0], self.rendered_size[1]
        );
    }

    pub fn bitmap(&self) -> Option<&DisplayBitmap> {
        self.bitmap.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.bitmap.is_some()
    }

    /// Size at which the bitmap is currently drawn, in whole pixels.
    pub fn rendered_size(&self) -> Option<[f32; 2]> {
        self.bitmap.as_ref().map(|_| self.rendered_size)
    }

    /// Multiply the rendered size by `factor`.
    ///
    /// Successive calls compound against the last rendered size. The bitmap's
    /// aspect ratio is kept, neither side drops below one pixel and the long
    /// side stops growing at `MAX_RENDERED_SIZE`. Factors that are not finite
    /// or below `MIN_ZOOM_FACTOR` are clamped.
    pub fn zoom(&mut self, factor: f32) {
        let Some(ref bitmap) = self.bitmap else {
            return;
        };
        let factor = if factor.is_finite() {
            factor.max(MIN_ZOOM_FACTOR)
        } else {
            MIN_ZOOM_FACTOR
        };

        let src = bitmap_size(bitmap);
        let cur = self.rendered_size;
        // The long side carries the least rounding error, so it drives the scale.
        let long = if src[0] >= src[1] { 0 } else { 1 };
        let max_scale = MAX_RENDERED_SIZE.max(src[long]) / src[long];
        let mut next = scaled(src, (cur[long] * factor / src[long]).min(max_scale));

        // Rounding can swallow a small step on tiny images; grow the long side
        // by a pixel so zooming in always makes progress.
        if factor > 1.0 && next == cur {
            next = scaled(src, ((cur[long] + 1.0) / src[long]).min(max_scale));
        }

        debug!(factor, "Zoom {}x{} -> {}x{}", cur[0], cur[1], next[0], next[1]);
        self.rendered_size = next;
    }

    /// Move the image by (dx, dy). The offset is not clamped to the window.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    pub fn offset(&self) -> [f32; 2] {
        self.offset
    }

    /// Rendered width relative to the bitmap width (1.0 without an image).
    pub fn scale_factor(&self) -> f32 {
        match self.bitmap {
            Some(ref bitmap) => self.rendered_size[0] / bitmap.width() as f32,
            None => 1.0,
        }
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            current_scale_factor: self.scale_factor(),
            position_offset: self.offset,
        }
    }

    /// Where the image lands on screen, centered on `area_center` plus the
    /// pan offset. `None` without an image.
    pub fn image_rect(&self, area_center: [f32; 2]) -> Option<ScreenRect> {
        let size = self.rendered_size()?;
        let center = [
            area_center[0] + self.offset[0],
            area_center[1] + self.offset[1],
        ];
        Some(ScreenRect {
            min: [center[0] - size[0] / 2.0, center[1] - size[1] / 2.0],
            size,
        })
    }
}

fn bitmap_size(bitmap: &DisplayBitmap) -> [f32; 2] {
    [bitmap.width() as f32, bitmap.height() as f32]
}
