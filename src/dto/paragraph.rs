//! Paragraph and span types.

use serde::{Deserialize, Serialize};

/// A run of text with at most one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,

    /// Style tag name (`strong`, `em`) or absent for plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl TextSpan {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a span carrying a style tag name.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }

    /// Check if the span has a style.
    pub fn is_styled(&self) -> bool {
        self.style.is_some()
    }
}

/// An ordered sequence of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Spans in document order
    pub spans: Vec<TextSpan>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with one unstyled span.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            spans: vec![TextSpan::plain(text)],
        }
    }

    /// Append a span.
    pub fn push_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Concatenated span text, styles discarded.
    pub fn to_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Check if the paragraph has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
