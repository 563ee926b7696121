//! Text cleanup applied to transfer-object spans.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::dto::DocumentDto;
use crate::error::{Error, Result};

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization only
    Minimal,
    /// Standard cleanup: NFC + ligatures + replacement chars + space runs
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Collapse runs of spaces and tabs into one space
    pub collapse_spaces: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            remove_replacement_char: false,
            collapse_spaces: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            collapse_spaces: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),  // ﬀ
    ("\u{FB01}", "fi"),  // ﬁ
    ("\u{FB02}", "fl"),  // ﬂ
    ("\u{FB03}", "ffi"), // ﬃ
    ("\u{FB04}", "ffl"), // ﬄ
    ("\u{FB05}", "st"),  // ﬅ (long s + t)
    ("\u{FB06}", "st"),  // ﬆ
];

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    space_run_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Result<Self> {
        let space_run_regex = Regex::new(r"[ \t]{2,}")
            .map_err(|e| Error::Render(format!("cleanup pattern: {}", e)))?;
        Ok(Self {
            options,
            space_run_regex,
        })
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Result<Self> {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process one piece of text.
    ///
    /// Leading and trailing whitespace is kept so that adjacent spans
    /// still join into the same words.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.collapse_spaces {
            result = self.space_run_regex.replace_all(&result, " ").into_owned();
        }

        result
    }

    /// Clean every span of the document in place.
    pub fn apply(&self, doc: &mut DocumentDto) {
        let spans = doc
            .paragraphs
            .iter_mut()
            .flat_map(|paragraph| paragraph.spans.iter_mut());
        for span in spans {
            span.text = self.process(&span.text);
        }
    }
}
