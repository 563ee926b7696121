//! Paragraph, run and run-content types.

use serde::{Deserialize, Serialize};

use super::Image;

/// A paragraph in the source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Heading style name (e.g. "heading 1"), if the paragraph is a heading
    #[serde(default)]
    pub heading_style: Option<String>,

    /// Effective justification
    #[serde(default)]
    pub justification: Option<Justification>,

    /// Effective indentation
    #[serde(default)]
    pub indentation: Indentation,

    /// Inline children in document order
    #[serde(default)]
    pub children: Vec<Inline>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_runs(vec![Run::text(text)])
    }

    /// Create a paragraph from runs.
    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            children: runs.into_iter().map(Inline::Run).collect(),
            ..Self::default()
        }
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, style: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.heading_style = Some(style.into());
        p
    }

    /// Add an inline child.
    pub fn push(&mut self, inline: Inline) {
        self.children.push(inline);
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_style.is_some()
    }
}

/// Paragraph justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Justified (rendered without a class)
    Both,
}

impl Justification {
    /// Class suffix for the alignment span, if the alignment gets one.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Justification::Left => Some("left"),
            Justification::Center => Some("center"),
            Justification::Right => Some("right"),
            Justification::Both => None,
        }
    }
}

/// Resolved paragraph indentation in em.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indentation {
    /// Left margin
    #[serde(default)]
    pub left: Option<f32>,
    /// Right margin
    #[serde(default)]
    pub right: Option<f32>,
    /// First line indent
    #[serde(default)]
    pub first_line: Option<f32>,
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// A run of uniformly styled content
    Run(Run),

    /// A hyperlink around inline content
    Hyperlink {
        /// Target URI, absent for dangling links
        #[serde(default)]
        target: Option<String>,
        /// Linked content
        children: Vec<Inline>,
    },

    /// Tracked insertion
    InsertedRun {
        /// Inserted runs
        runs: Vec<Run>,
    },

    /// A `HYPERLINK` simple field
    FieldHyperlink {
        /// Field instruction arguments (target first, `\l <bookmark>` optional)
        args: Vec<String>,
        /// Field result content
        children: Vec<Inline>,
    },
}

/// A run of content sharing the same properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// Effective run properties
    #[serde(default)]
    pub properties: RunProperties,

    /// Run content in document order
    #[serde(default)]
    pub children: Vec<RunContent>,
}

impl Run {
    /// Create a plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            properties: RunProperties::default(),
            children: vec![RunContent::Text { text: text.into() }],
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::text(text).with_properties(RunProperties {
            bold: true,
            ..Default::default()
        })
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::text(text).with_properties(RunProperties {
            italic: true,
            ..Default::default()
        })
    }

    /// Create a run from content with default properties.
    pub fn with_children(children: Vec<RunContent>) -> Self {
        Self {
            properties: RunProperties::default(),
            children,
        }
    }

    /// Replace the run properties.
    pub fn with_properties(mut self, properties: RunProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Effective (style-resolved) run properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunProperties {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub caps: bool,
    pub small_caps: bool,
    pub strike: bool,
    pub dstrike: bool,
    pub vanish: bool,
    pub hidden: bool,
    pub vertical_align: Option<VerticalAlign>,
    /// Hex color without the leading `#`
    pub color: Option<String>,
}

/// Vertical alignment of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Raised text
    Superscript,
    /// Lowered text
    Subscript,
    /// Normal baseline
    Baseline,
}

/// Content inside a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunContent {
    /// Literal text
    Text {
        /// The characters
        text: String,
    },

    /// Text removed by a tracked deletion
    DeletedText {
        /// The characters
        text: String,
    },

    /// Line or page break
    Break {
        /// Page break instead of a line break
        #[serde(default)]
        page: bool,
    },

    /// Tab character
    TabChar,

    /// DrawingML picture
    Drawing(Image),

    /// Legacy VML image data
    VmlImage(Image),

    /// Reference to a footnote from the body
    FootnoteReference {
        /// Footnote id
        footnote_id: String,
    },

    /// Back-reference mark at the start of a footnote body
    FootnoteReferenceMark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_builders() {
        let p = Paragraph::heading("Title", "heading 1");
        assert!(p.is_heading());
        assert_eq!(p.children.len(), 1);

        let run = Run::bold("b");
        assert!(run.properties.bold);
        assert!(!run.properties.italic);
    }

    #[test]
    fn test_justification_class() {
        assert_eq!(Justification::Center.class_name(), Some("center"));
        assert_eq!(Justification::Both.class_name(), None);
    }

    #[test]
    fn test_deserialize_run() {
        let json = r#"{
            "properties": {"bold": true},
            "children": [
                {"type": "text", "text": "Hi"},
                {"type": "break"},
                {"type": "tab_char"}
            ]
        }"#;
        let run: Run = serde_json::from_str(json).unwrap();
        assert!(run.properties.bold);
        assert_eq!(run.children.len(), 3);
        assert!(matches!(run.children[1], RunContent::Break { page: false }));
    }
}
