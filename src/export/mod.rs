//! Lazy export of a source document into markup events.
//!
//! Every export function returns a boxed iterator that does no work until
//! it is pulled. Context that depends on ancestors (inside a table cell,
//! inside a hyperlink, inside a footnote) travels down in a [`Scope`]
//! value instead of living on the exporter.

mod block;
mod paragraph;
mod run;

use std::collections::BTreeMap;
use std::iter;

use crate::markup::{Events, MarkupEvent, Tag};
use crate::model::{Document, Footnote};

/// Options for exporting a document to markup events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Merge adjacent same-style runs inside each paragraph
    pub merge_style_runs: bool,

    /// Emit `<head>` with charset and stylesheet
    pub include_head: bool,

    /// Emit the footnote list after the body
    pub include_footnotes: bool,

    /// Embed image bytes as base64 `data:` URIs (otherwise use the part file name)
    pub image_data_uris: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable style-run merging.
    pub fn with_style_merge(mut self, merge: bool) -> Self {
        self.merge_style_runs = merge;
        self
    }

    /// Enable or disable the `<head>` element.
    pub fn with_head(mut self, include: bool) -> Self {
        self.include_head = include;
        self
    }

    /// Enable or disable the footnote list.
    pub fn with_footnotes(mut self, include: bool) -> Self {
        self.include_footnotes = include;
        self
    }

    /// Enable or disable embedded image data URIs.
    pub fn with_image_data_uris(mut self, embed: bool) -> Self {
        self.image_data_uris = embed;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            merge_style_runs: true,
            include_head: true,
            include_footnotes: true,
            image_data_uris: true,
        }
    }
}

/// Ancestor-dependent export context.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Scope<'a> {
    pub in_table_cell: bool,
    pub in_numbering_item: bool,
    pub in_content_control: bool,
    pub in_heading: bool,
    pub suppress_underline: bool,
    pub footnote_id: Option<&'a str>,
}

/// Class definitions shared by every exported stylesheet.
const CLASS_STYLES: &[(&str, &[(&str, &str)])] = &[
    ("caps", &[("text-transform", "uppercase")]),
    ("center", &[("text-align", "center")]),
    ("comment", &[("color", "blue")]),
    ("delete", &[("color", "red"), ("text-decoration", "line-through")]),
    ("hidden", &[("visibility", "hidden")]),
    ("insert", &[("color", "green")]),
    ("left", &[("text-align", "left")]),
    ("right", &[("text-align", "right")]),
    ("small-caps", &[("font-variant", "small-caps")]),
    ("strike", &[("text-decoration", "line-through")]),
    ("tab", &[("display", "inline-block"), ("width", "4em")]),
    ("underline", &[("text-decoration", "underline")]),
];

const POINTS_PER_EM: f32 = 12.0;

/// Walks a [`Document`] and yields its markup events.
#[derive(Debug, Clone, Copy)]
pub struct Exporter<'a> {
    doc: &'a Document,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    /// Create an exporter over `doc`.
    pub fn new(doc: &'a Document, options: ExportOptions) -> Self {
        Self { doc, options }
    }

    /// The full document: `<html>` with head and body.
    pub fn export(self) -> Events<'a> {
        let head = if self.options.include_head {
            self.head()
        } else {
            Box::new(iter::empty())
        };
        Box::new(Tag::new("html").apply(head.chain(self.body()), true))
    }

    /// Only the `<body>` element.
    pub fn body(self) -> Events<'a> {
        let content = self
            .nodes(&self.doc.body, Scope::default())
            .chain(self.footer());
        Box::new(Tag::new("body").apply(content, true))
    }

    fn head(self) -> Events<'a> {
        let meta = Tag::new("meta")
            .with_attr("charset", "utf-8")
            .self_closing()
            .open();
        let style = Tag::new("style").apply(iter::once(MarkupEvent::text(self.stylesheet())), true);
        Box::new(Tag::new("head").apply(iter::once(meta).chain(style), true))
    }

    fn stylesheet(self) -> String {
        let mut css = String::new();
        for (class, definition) in CLASS_STYLES {
            css.push_str(&format!(
                ".pydocx-{} {{{}}}",
                class,
                style_fragment(definition.iter().copied())
            ));
        }

        let width = self
            .doc
            .page_width
            .map(|width| format!("{:.2}em", width / POINTS_PER_EM));
        let mut body = vec![("margin", "0px auto")];
        if let Some(ref width) = width {
            body.push(("width", width.as_str()));
        }
        css.push_str(&format!("body {{{}}}", style_fragment(body)));
        css
    }

    fn footer(self) -> Events<'a> {
        if !self.options.include_footnotes {
            return Box::new(iter::empty());
        }
        let items = self
            .doc
            .footnotes
            .iter()
            .flat_map(move |footnote| self.footnote(footnote));
        let list = Tag::new("ol")
            .with_attr("class", "pydocx-list-style-type-decimal")
            .apply(items, false);
        Box::new(Tag::new("hr").self_closing().apply(list, false))
    }

    fn footnote(self, footnote: &'a Footnote) -> Events<'a> {
        let scope = Scope {
            footnote_id: Some(footnote.id.as_str()),
            ..Scope::default()
        };
        Box::new(Tag::new("li").apply(self.nodes(&footnote.children, scope), false))
    }
}

/// Export a whole document with the given options.
pub fn export_events(doc: &Document, options: ExportOptions) -> Events<'_> {
    Exporter::new(doc, options).export()
}

/// Defer building a sequence until its first item is pulled.
pub(crate) fn deferred<'a, F>(build: F) -> Events<'a>
where
    F: FnOnce() -> Events<'a> + 'a,
{
    Box::new(iter::once_with(build).flatten())
}

/// `key:value` pairs joined by `;`, ordered by key.
pub(crate) fn style_fragment<'s>(pairs: impl IntoIterator<Item = (&'s str, &'s str)>) -> String {
    pairs
        .into_iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(k, v)| format!("{}:{}", k, v))
        .collect::<Vec<_>>()
        .join(";")
}
