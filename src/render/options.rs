//! Transfer-object options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for reducing a document to its transfer object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoOptions {
    /// Move the template paragraphs into metadata
    pub extract_metadata: bool,

    /// Text cleanup applied to spans before metadata extraction
    pub cleanup: Option<CleanupOptions>,
}

impl DtoOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable metadata extraction.
    pub fn with_metadata(mut self, extract: bool) -> Self {
        self.extract_metadata = extract;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, options: CleanupOptions) -> Self {
        self.cleanup = Some(options);
        self
    }

    /// Set cleanup from a preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for DtoOptions {
    fn default() -> Self {
        Self {
            extract_metadata: true,
            cleanup: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DtoOptions::default();
        assert!(options.extract_metadata);
        assert!(options.cleanup.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let options = DtoOptions::new()
            .with_metadata(false)
            .with_cleanup_preset(CleanupPreset::Minimal);

        assert!(!options.extract_metadata);
        assert_eq!(options.cleanup, Some(CleanupOptions::minimal()));
    }
}
