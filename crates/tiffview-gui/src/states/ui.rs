use std::path::PathBuf;

use tiffview_core::drag::DragTracker;
use tiffview_core::metadata::{format_metadata, ImageMetadata};

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    /// Statistics of the most recently loaded image.
    pub metadata: Option<ImageMetadata>,
    /// Toggled with F1.
    pub metadata_visible: bool,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Message for the error dialog, if one is open.
    pub error_message: Option<String>,

    pub drag: DragTracker,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// File name of the displayed image, for the status line.
    pub fn file_name(&self) -> Option<String> {
        let name = self.file_path.as_deref()?.file_name()?;
        Some(name.to_string_lossy().into_owned())
    }

    pub fn toggle_metadata(&mut self) {
        self.metadata_visible = !self.metadata_visible;
    }

    /// Report text to render this frame: `None` while hidden or before any
    /// image has been loaded.
    pub fn metadata_text(&self) -> Option<String> {
        if !self.metadata_visible {
            return None;
        }
        self.metadata.as_ref().map(format_metadata)
    }
}

#[cfg(test)]
mod tests {
    use tiffview_core::metadata::{ChannelRange, SampleFormat};

    use super::*;

    fn gray_metadata() -> ImageMetadata {
        ImageMetadata {
            width: 4,
            height: 2,
            channel_count: 1,
            sample_format: SampleFormat::U16,
            channel_stats: vec![ChannelRange::new(12.0, 4000.0)],
        }
    }

    #[test]
    fn test_file_name_for_status_line() {
        let mut state = UIState::default();
        assert!(state.file_name().is_none());
        state.file_path = Some(PathBuf::from("/scans/plate_07.tif"));
        assert_eq!(state.file_name().as_deref(), Some("plate_07.tif"));
    }

    #[test]
    fn test_toggle_without_image_shows_nothing() {
        let mut state = UIState::default();
        state.toggle_metadata();
        assert!(state.metadata_visible);
        assert!(state.metadata_text().is_none());
    }

    #[test]
    fn test_toggle_twice_hides() {
        let mut state = UIState {
            metadata: Some(gray_metadata()),
            ..Default::default()
        };
        state.toggle_metadata();
        assert!(state.metadata_text().is_some());
        state.toggle_metadata();
        assert!(state.metadata_text().is_none());
    }

    #[test]
    fn test_visible_text_is_formatted_report() {
        let mut state = UIState {
            metadata: Some(gray_metadata()),
            ..Default::default()
        };
        state.toggle_metadata();
        assert_eq!(
            state.metadata_text().unwrap(),
            "Image Size: 4x2\nNumber of Channels: 1\nBand Min/Max:\nChannel 1: 12~4000"
        );
    }
}
