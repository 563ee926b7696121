//! # undocx
//!
//! Word-processing document conversion to markup and structured text.
//!
//! A parsed document is exported as a lazy stream of markup events. The
//! stream is either rendered to nested HTML-style markup or folded into a
//! transfer object of styled paragraphs with template metadata.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::model::{Document, Paragraph, Run};
//!
//! fn main() -> undocx::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_paragraph(Paragraph::with_runs(vec![
//!         Run::text("Hello "),
//!         Run::bold("world"),
//!     ]));
//!
//!     // Nested markup
//!     let html = undocx::render_markup(&doc)?;
//!     println!("{}", html);
//!
//!     // Flattened paragraphs without template metadata
//!     let dto = undocx::Undocx::new().without_metadata().reduce_to_dto(&doc)?;
//!     println!("{}", dto.plain_text());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lazy export**: every stage pulls events on demand
//! - **Emptiness filtering**: wrappers around whitespace-only content are dropped
//! - **Style-run merging**: `<strong>A</strong><strong>B</strong>` becomes one span
//! - **Metadata extraction**: fixed transcript template to [`dto::Metadata`]
//! - **Cleanup pipeline**: Unicode and whitespace normalization of span text

pub mod dto;
pub mod error;
pub mod export;
pub mod markup;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use dto::{DocumentDto, Metadata, TextSpan};
pub use error::{Error, Result};
pub use export::{export_events, ExportOptions, Exporter};
pub use markup::{merge_style_runs, Events, MarkupEvent, Tag};
pub use model::Document;
pub use render::{
    reduce_to_document, CleanupOptions, CleanupPreset, DtoOptions, JsonFormat,
};

/// Render a document to nested markup with default options.
///
/// # Example
///
/// ```no_run
/// use undocx::model::{Document, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("Hello"));
/// let html = undocx::render_markup(&doc).unwrap();
/// assert!(html.contains("<p>Hello</p>"));
/// ```
pub fn render_markup(doc: &Document) -> Result<String> {
    Undocx::new().render_markup(doc)
}

/// Reduce a document to its transfer object with default options.
///
/// Metadata extraction is enabled, so the document must follow the
/// transcript template (at least seven leading paragraphs).
///
/// # Example
///
/// ```no_run
/// use undocx::model::Document;
///
/// # let doc = Document::new();
/// let dto = undocx::reduce_to_dto(&doc)?;
/// if let Some(metadata) = dto.metadata {
///     println!("{}: {}", metadata.id, metadata.title);
/// }
/// # Ok::<(), undocx::Error>(())
/// ```
pub fn reduce_to_dto(doc: &Document) -> Result<DocumentDto> {
    Undocx::new().reduce_to_dto(doc)
}

/// Convert a document to JSON with default options.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    Undocx::new().to_json(doc, format)
}

/// Builder for converting documents.
///
/// # Example
///
/// ```no_run
/// use undocx::{CleanupPreset, JsonFormat, Undocx};
/// # let doc = undocx::Document::new();
///
/// let json = Undocx::new()
///     .with_style_merge(false)
///     .with_cleanup(CleanupPreset::Standard)
///     .to_json(&doc, JsonFormat::Compact)?;
/// # Ok::<(), undocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undocx {
    export_options: ExportOptions,
    dto_options: DtoOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable merging of adjacent same-style runs.
    pub fn with_style_merge(mut self, merge: bool) -> Self {
        self.export_options = self.export_options.with_style_merge(merge);
        self
    }

    /// Leave out the `<head>` element.
    pub fn without_head(mut self) -> Self {
        self.export_options = self.export_options.with_head(false);
        self
    }

    /// Leave out the footnote list.
    pub fn without_footnotes(mut self) -> Self {
        self.export_options = self.export_options.with_footnotes(false);
        self
    }

    /// Embed image bytes as data URIs.
    pub fn with_image_data_uris(mut self, embed: bool) -> Self {
        self.export_options = self.export_options.with_image_data_uris(embed);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.dto_options = self.dto_options.with_cleanup_preset(preset);
        self
    }

    /// Skip template metadata extraction.
    pub fn without_metadata(mut self) -> Self {
        self.dto_options = self.dto_options.with_metadata(false);
        self
    }

    /// Render nested markup.
    pub fn render_markup(&self, doc: &Document) -> Result<String> {
        render::render_markup(export_events(doc, self.export_options))
    }

    /// Reduce to the transfer object.
    pub fn reduce_to_dto(&self, doc: &Document) -> Result<DocumentDto> {
        render::reduce_to_dto(doc, self.export_options, &self.dto_options)
    }

    /// Reduce and serialize to JSON.
    pub fn to_json(&self, doc: &Document, format: JsonFormat) -> Result<String> {
        render::to_json(&self.reduce_to_dto(doc)?, format)
    }

    /// Reduce and flatten to plain text.
    pub fn to_text(&self, doc: &Document) -> Result<String> {
        Ok(render::to_text(&self.reduce_to_dto(doc)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Paragraph, Run};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_runs(vec![Run::text("Hello "), Run::bold("world")]));
        doc.add_paragraph(Paragraph::with_text("Second"));
        doc
    }

    #[test]
    fn test_undocx_builder() {
        let undocx = Undocx::new()
            .with_style_merge(false)
            .without_head()
            .with_cleanup(CleanupPreset::Minimal)
            .without_metadata();

        assert!(!undocx.export_options.merge_style_runs);
        assert!(!undocx.export_options.include_head);
        assert!(undocx.export_options.include_footnotes);
        assert!(!undocx.dto_options.extract_metadata);
        assert_eq!(undocx.dto_options.cleanup, Some(CleanupOptions::minimal()));
    }

    #[test]
    fn test_undocx_builder_default() {
        let builder = Undocx::default();
        assert!(builder.export_options.merge_style_runs);
        assert!(builder.dto_options.extract_metadata);
        assert!(builder.dto_options.cleanup.is_none());
    }

    #[test]
    fn test_render_markup_without_head() {
        let html = Undocx::new().without_head().render_markup(&sample()).unwrap();
        assert_eq!(
            html,
            "<html><body><p>Hello <strong>world</strong></p><p>Second</p></body></html>"
        );
    }

    #[test]
    fn test_to_text() {
        let text = Undocx::new().without_metadata().to_text(&sample()).unwrap();
        assert_eq!(text, "Hello world\n\nSecond");
    }

    #[test]
    fn test_reduce_to_dto_requires_template() {
        let result = reduce_to_dto(&sample());
        assert!(matches!(
            result,
            Err(Error::Underflow {
                required: 7,
                available: 2
            })
        ));
    }

    #[test]
    fn test_to_json_without_metadata() {
        let json = Undocx::new()
            .without_metadata()
            .to_json(&sample(), JsonFormat::Compact)
            .unwrap();
        assert!(json.starts_with("{\"metadata\":null,\"paragraphs\":["));
    }
}
