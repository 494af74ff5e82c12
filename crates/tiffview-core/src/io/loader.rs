use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::{debug, info};

use crate::bitmap::DisplayBitmap;
use crate::error::{Result, ViewerError};
use crate::metadata::{ImageMetadata, SampleFormat};
use crate::normalize::normalize_rgb;
use crate::stats::channel_ranges;

/// A decoded image ready for display, with statistics of its original samples.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub bitmap: DisplayBitmap,
    pub metadata: ImageMetadata,
}

/// Decode `path` keeping its native channel layout and sample depth.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_failed = |source| ViewerError::DecodeFailed {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_failed(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_failed(image::ImageError::IoError(e)))?;
    reader.decode().map_err(decode_failed)
}

/// Dimensions and per-channel min/max of the decoded image, computed on the
/// native samples (no conversion, no normalization).
pub fn inspect(img: &DynamicImage) -> ImageMetadata {
    let (format, channels, stats) = match img {
        DynamicImage::ImageLuma8(b) => (SampleFormat::U8, 1, channel_ranges(b.as_raw(), 1)),
        DynamicImage::ImageLumaA8(b) => (SampleFormat::U8, 2, channel_ranges(b.as_raw(), 2)),
        DynamicImage::ImageRgb8(b) => (SampleFormat::U8, 3, channel_ranges(b.as_raw(), 3)),
        DynamicImage::ImageRgba8(b) => (SampleFormat::U8, 4, channel_ranges(b.as_raw(), 4)),
        DynamicImage::ImageLuma16(b) => (SampleFormat::U16, 1, channel_ranges(b.as_raw(), 1)),
        DynamicImage::ImageLumaA16(b) => (SampleFormat::U16, 2, channel_ranges(b.as_raw(), 2)),
        DynamicImage::ImageRgb16(b) => (SampleFormat::U16, 3, channel_ranges(b.as_raw(), 3)),
        DynamicImage::ImageRgba16(b) => (SampleFormat::U16, 4, channel_ranges(b.as_raw(), 4)),
        DynamicImage::ImageRgb32F(b) => (SampleFormat::F32, 3, channel_ranges(b.as_raw(), 3)),
        DynamicImage::ImageRgba32F(b) => (SampleFormat::F32, 4, channel_ranges(b.as_raw(), 4)),
        other => {
            let rgba = other.to_rgba32f();
            (SampleFormat::F32, 4, channel_ranges(rgba.as_raw(), 4))
        }
    };

    ImageMetadata {
        width: img.width(),
        height: img.height(),
        channel_count: channels,
        sample_format: format,
        channel_stats: stats,
    }
}

/// Contrast-stretched RGB rendition of `img` for display.
///
/// Grayscale is replicated into all three channels and alpha is dropped.
pub fn display_bitmap(img: &DynamicImage) -> DisplayBitmap {
    normalize_rgb(&img.to_rgb32f())
}

/// Decode `path` into a display bitmap plus metadata of the original samples.
pub fn load(path: &Path) -> Result<LoadedImage> {
    let img = decode(path)?;
    let metadata = inspect(&img);
    debug!(sample_format = %metadata.sample_format, "Computed channel statistics");
    let bitmap = display_bitmap(&img);

    info!(
        "Loaded {} ({}x{}, {} channels, {})",
        path.display(),
        metadata.width,
        metadata.height,
        metadata.channel_count,
        metadata.sample_format
    );

    Ok(LoadedImage { bitmap, metadata })
}
