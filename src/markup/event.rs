//! Markup events and tag classification.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Tag names the pipeline inspects by name.
pub mod names {
    /// Paragraph
    pub const PARAGRAPH: &str = "p";
    /// Bold
    pub const BOLD: &str = "strong";
    /// Italic
    pub const EMPHASIS: &str = "em";
    /// Line break
    pub const BREAK: &str = "br";
    /// Inline span
    pub const SPAN: &str = "span";
    /// Horizontal rule (page break, footnote separator)
    pub const HR: &str = "hr";
    /// Table cell
    pub const TABLE_CELL: &str = "td";
}

/// Tag attributes, rendered in name order.
pub type Attributes = BTreeMap<String, String>;

/// An opening (or self-closing) markup tag.
///
/// The flags are fixed at construction: once a tag is wrapped into a
/// [`MarkupEvent`] there is no way to change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attrs: Attributes,
    self_closing: bool,
    allow_whitespace: bool,
}

impl Tag {
    /// Create a tag with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
            self_closing: false,
            allow_whitespace: false,
        }
    }

    /// Add an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Mark the tag as self-closing (no close event is ever emitted).
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Mark the tag as significant content even without visible children.
    pub fn allow_whitespace(mut self) -> Self {
        self.allow_whitespace = true;
        self
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Whether the tag is self-closing.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Whether the tag counts as content on its own.
    pub fn allows_whitespace(&self) -> bool {
        self.allow_whitespace
    }

    /// The open event for this tag.
    pub fn open(&self) -> MarkupEvent {
        MarkupEvent::Open(self.clone())
    }

    /// The matching close event.
    pub fn close(&self) -> MarkupEvent {
        MarkupEvent::Close {
            name: self.name.clone(),
        }
    }

    fn to_html(&self) -> String {
        let end = if self.self_closing { " />" } else { ">" };
        if self.attrs.is_empty() {
            return format!("<{}{}", self.name, end);
        }
        let attrs = self
            .attrs
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_attr(v)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("<{} {}{}", self.name, attrs, end)
    }
}

/// One atomic unit of the flat rendering stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// A run of literal characters.
    Text(String),

    /// An opening or self-closing tag.
    Open(Tag),

    /// Closes the most recent open tag with the same name.
    Close {
        /// Tag name
        name: String,
    },
}

impl MarkupEvent {
    /// Create a text atom.
    pub fn text(text: impl Into<String>) -> Self {
        MarkupEvent::Text(text.into())
    }

    /// Create a close event.
    pub fn close(name: impl Into<String>) -> Self {
        MarkupEvent::Close { name: name.into() }
    }

    /// Tag name for open and close events.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            MarkupEvent::Text(_) => None,
            MarkupEvent::Open(tag) => Some(tag.name()),
            MarkupEvent::Close { name } => Some(name),
        }
    }

    /// Check if this is an open or close event for `name`.
    pub fn is_tag(&self, name: &str) -> bool {
        self.tag_name() == Some(name)
    }

    /// Check if this is an open event for `name`.
    pub fn is_open_tag(&self, name: &str) -> bool {
        matches!(self, MarkupEvent::Open(tag) if tag.name() == name)
    }

    /// Check if this is a close event.
    pub fn is_close(&self) -> bool {
        matches!(self, MarkupEvent::Close { .. })
    }

    /// Check if this tag counts as content regardless of its children.
    ///
    /// Close events never do.
    pub fn allows_whitespace(&self) -> bool {
        matches!(self, MarkupEvent::Open(tag) if tag.allows_whitespace())
    }

    pub fn is_paragraph(&self) -> bool {
        self.is_tag(names::PARAGRAPH)
    }

    pub fn is_emphasis(&self) -> bool {
        self.is_tag(names::EMPHASIS)
    }

    pub fn is_bold(&self) -> bool {
        self.is_tag(names::BOLD)
    }

    /// Style tags are the only tags subject to run merging.
    pub fn is_style(&self) -> bool {
        self.is_emphasis() || self.is_bold()
    }

    pub fn is_break(&self) -> bool {
        self.is_tag(names::BREAK)
    }

    pub fn is_span(&self) -> bool {
        self.is_tag(names::SPAN)
    }

    pub fn is_hr(&self) -> bool {
        self.is_tag(names::HR)
    }

    pub fn is_table_cell(&self) -> bool {
        self.is_tag(names::TABLE_CELL)
    }

    /// Markup form of the event. Text is HTML-escaped.
    pub fn to_html(&self) -> Cow<'_, str> {
        match self {
            MarkupEvent::Text(text) => escape_text(text),
            MarkupEvent::Open(tag) => Cow::Owned(tag.to_html()),
            MarkupEvent::Close { name } => Cow::Owned(format!("</{}>", name)),
        }
    }

    /// Textual projection used when flattening markup to plain text.
    ///
    /// Breaks become a newline, spans and rules vanish, text is returned
    /// verbatim and every other tag keeps its markup form.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            MarkupEvent::Text(text) => Cow::Borrowed(text),
            _ if self.is_break() => Cow::Borrowed("\n"),
            _ if self.is_span() || self.is_hr() => Cow::Borrowed(""),
            _ => self.to_html(),
        }
    }
}

impl From<Tag> for MarkupEvent {
    fn from(tag: Tag) -> Self {
        MarkupEvent::Open(tag)
    }
}

impl fmt::Display for MarkupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn escape_attr(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
