use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_WINDOW_SIZE;
use crate::error::Result;

/// How the metadata report is presented in the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataView {
    /// Painted over the top-left corner of the window.
    #[default]
    Overlay,
    /// Shown in a separate side panel.
    Panel,
}

impl fmt::Display for MetadataView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataView::Overlay => write!(f, "Overlay"),
            MetadataView::Panel => write!(f, "Panel"),
        }
    }
}

/// Viewer settings, read from a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub metadata_view: MetadataView,
    /// Initial inner window size in logical points.
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            metadata_view: MetadataView::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
