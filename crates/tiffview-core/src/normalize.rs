use image::Rgb32FImage;

use crate::bitmap::DisplayBitmap;
use crate::consts::DISPLAY_MAX;
use crate::stats::channel_ranges;

/// Min-max stretch of interleaved `f32` samples into `0..=255`.
///
/// Each channel is stretched independently so its observed minimum maps to 0
/// and its maximum to 255. A channel whose range is zero is passed through
/// unchanged (sample × 255, clamped), matching a plain 8-bit conversion.
/// NaN samples become 0.
pub fn normalize_interleaved(samples: &[f32], channels: usize) -> Vec<u8> {
    if channels == 0 {
        return Vec::new();
    }

    let ranges = channel_ranges(samples, channels);
    let mut out = Vec::with_capacity(samples.len());
    for pixel in samples.chunks_exact(channels) {
        for (range, &v) in ranges.iter().zip(pixel) {
            out.push(stretch(v, range.min as f32, range.max as f32));
        }
    }
    out
}

fn stretch(v: f32, min: f32, max: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    let span = max - min;
    let scaled = if span > f32::EPSILON {
        (v - min) * DISPLAY_MAX / span
    } else {
        v * DISPLAY_MAX
    };
    scaled.round().clamp(0.0, DISPLAY_MAX) as u8
}

/// Contrast-stretch an RGB float image into a display bitmap.
pub fn normalize_rgb(rgb: &Rgb32FImage) -> DisplayBitmap {
    let (w, h) = rgb.dimensions();
    let pixels = normalize_interleaved(rgb.as_raw(), 3);
    DisplayBitmap::from_parts(w, h, pixels)
}
