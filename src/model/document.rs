//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Paragraph, Table};

/// A parsed word-processing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Body content in document order
    #[serde(default)]
    pub body: Vec<Node>,

    /// Footnotes referenced from the body, in reference order
    #[serde(default)]
    pub footnotes: Vec<Footnote>,

    /// Page width in points
    #[serde(default)]
    pub page_width: Option<f32>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block-level node.
    pub fn push(&mut self, node: Node) {
        self.body.push(node);
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Node::Paragraph(paragraph));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Node::Table(table));
    }

    /// Add a footnote.
    pub fn add_footnote(&mut self, footnote: Footnote) {
        self.footnotes.push(footnote);
    }

    /// Check if the document has no body content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A block-level node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// Consecutive list items sharing one numbering definition
    NumberingSpan(NumberingSpan),

    /// Structured document tag (content control) around block content
    ContentControl {
        /// Wrapped nodes
        children: Vec<Node>,
    },
}

impl Node {
    /// Check if this node is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Node::Paragraph(_))
    }
}

/// A group of list items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberingSpan {
    /// Bullet list rather than numbered
    pub bullet: bool,

    /// Number format name, e.g. `decimal`, `lowerLetter`
    #[serde(default)]
    pub num_format: String,

    /// Items in order
    pub items: Vec<NumberingItem>,
}

impl NumberingSpan {
    /// Create a bulleted list.
    pub fn bullet(items: Vec<NumberingItem>) -> Self {
        Self {
            bullet: true,
            num_format: "bullet".to_string(),
            items,
        }
    }

    /// Create a numbered list.
    pub fn numbered(num_format: impl Into<String>, items: Vec<NumberingItem>) -> Self {
        Self {
            bullet: false,
            num_format: num_format.into(),
            items,
        }
    }
}

/// One list item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberingItem {
    /// Item content, usually paragraphs and nested spans
    pub children: Vec<Node>,
}

impl NumberingItem {
    /// Create an item from nodes.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

/// A footnote body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footnote {
    /// Footnote id shared with its references
    pub id: String,

    /// Footnote content
    pub children: Vec<Node>,
}

impl Footnote {
    /// Create a footnote.
    pub fn new(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            children,
        }
    }
}
