//! Image resources referenced from runs.

use serde::{Deserialize, Serialize};

/// A picture placed in a run, with layout values already resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    /// Where the image bytes live, absent when the relationship did not resolve
    #[serde(default)]
    pub source: Option<ImageSource>,

    /// Width in pixels
    #[serde(default)]
    pub width_px: Option<u32>,

    /// Height in pixels
    #[serde(default)]
    pub height_px: Option<u32>,

    /// Rotation in degrees
    #[serde(default)]
    pub rotate: Option<f32>,
}

impl Image {
    /// Create an image pointing at an external URI.
    pub fn external(uri: impl Into<String>) -> Self {
        Self {
            source: Some(ImageSource::External { uri: uri.into() }),
            ..Default::default()
        }
    }

    /// Create an image from embedded bytes.
    pub fn embedded(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            source: Some(ImageSource::Embedded {
                filename: filename.into(),
                data,
            }),
            ..Default::default()
        }
    }

    /// Set pixel dimensions.
    pub fn with_size(mut self, width_px: u32, height_px: u32) -> Self {
        self.width_px = Some(width_px);
        self.height_px = Some(height_px);
        self
    }

    /// Set rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Image byte location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageSource {
    /// Linked image outside the package
    External {
        /// Absolute URI
        uri: String,
    },

    /// Image part inside the package
    Embedded {
        /// Part file name, e.g. `image1.png`
        filename: String,
        /// Raw bytes
        #[serde(default)]
        data: Vec<u8>,
    },
}

impl ImageSource {
    /// Lowercased extension of an embedded part's file name.
    pub fn extension(&self) -> Option<String> {
        match self {
            ImageSource::External { .. } => None,
            ImageSource::Embedded { filename, .. } => filename
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase()),
        }
    }
}
