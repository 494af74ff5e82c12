use std::fmt;

/// Native sample type of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    U8,
    U16,
    F32,
}

impl SampleFormat {
    /// Inclusive value range a sample of this format can hold.
    pub fn value_range(&self) -> (f64, f64) {
        match self {
            SampleFormat::U8 => (0.0, u8::MAX as f64),
            SampleFormat::U16 => (0.0, u16::MAX as f64),
            SampleFormat::F32 => (f32::MIN as f64, f32::MAX as f64),
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            SampleFormat::U8 => 8,
            SampleFormat::U16 => 16,
            SampleFormat::F32 => 32,
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFormat::U8 => write!(f, "8-bit unsigned"),
            SampleFormat::U16 => write!(f, "16-bit unsigned"),
            SampleFormat::F32 => write!(f, "32-bit float"),
        }
    }
}

/// Observed minimum and maximum of one channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    pub min: f64,
    pub max: f64,
}

impl ChannelRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Dimensions and per-channel statistics of the original (unconverted) image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub channel_count: usize,
    pub sample_format: SampleFormat,
    /// One entry per channel, in decoder storage order.
    pub channel_stats: Vec<ChannelRange>,
}

/// Render the multi-line metadata report shown to the user.
///
/// Channels are numbered from 1. The last line carries no newline.
pub fn format_metadata(metadata: &ImageMetadata) -> String {
    let mut lines = vec![
        format!("Image Size: {}x{}", metadata.width, metadata.height),
        format!("Number of Channels: {}", metadata.channel_count),
        "Band Min/Max:".to_string(),
    ];
    for (i, range) in metadata.channel_stats.iter().enumerate() {
        lines.push(format!("Channel {}: {}~{}", i + 1, range.min, range.max));
    }
    lines.join("\n")
}

impl fmt::Display for ImageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_metadata(self))
    }
}
