//! Reduction of a flat event stream into a transfer object.

use crate::dto::{DocumentDto, Paragraph, TextSpan};
use crate::error::Result;
use crate::export::{export_events, ExportOptions};
use crate::markup::{MarkupEvent, NestingTracker};
use crate::model::Document;

use super::{CleanupPipeline, DtoOptions};

/// Fold an event stream into paragraphs of styled spans.
///
/// A `p` event (open or close) toggles the current paragraph; a style
/// event inside a paragraph toggles the current span style. Text outside
/// any paragraph is dropped at the next paragraph boundary.
pub fn reduce_to_document<I>(events: I) -> Result<DocumentDto>
where
    I: IntoIterator<Item = MarkupEvent>,
{
    let mut reducer = Reducer::default();
    for event in events {
        reducer.push(event)?;
    }
    reducer.finish()
}

/// Export a document and reduce it, then clean up and extract metadata.
pub fn reduce_to_dto(
    doc: &Document,
    export_options: ExportOptions,
    options: &DtoOptions,
) -> Result<DocumentDto> {
    let mut dto = reduce_to_document(export_events(doc, export_options))?;

    if let Some(ref cleanup) = options.cleanup {
        CleanupPipeline::new(cleanup.clone())?.apply(&mut dto);
    }
    if options.extract_metadata {
        dto.extract_metadata()?;
    }
    Ok(dto)
}

#[derive(Default)]
struct Reducer {
    doc: DocumentDto,
    nesting: NestingTracker,
    current_paragraph: Option<Paragraph>,
    open_style: Option<String>,
    buffer: String,
}

impl Reducer {
    fn push(&mut self, event: MarkupEvent) -> Result<()> {
        self.nesting.track(&event)?;

        match event {
            MarkupEvent::Text(text) => self.buffer.push_str(&text),
            _ if event.is_paragraph() => self.paragraph_boundary(),
            _ if event.is_style() && self.current_paragraph.is_some() => {
                self.style_boundary(&event)
            }
            _ => self.buffer.push_str(&event.to_text()),
        }
        Ok(())
    }

    fn paragraph_boundary(&mut self) {
        match self.current_paragraph.take() {
            Some(mut paragraph) => {
                if !self.buffer.trim().is_empty() {
                    paragraph.push_span(TextSpan::plain(self.buffer.as_str()));
                }
                self.doc.push_paragraph(paragraph);
            }
            None => self.current_paragraph = Some(Paragraph::new()),
        }
        self.buffer.clear();
    }

    fn style_boundary(&mut self, event: &MarkupEvent) {
        let Some(paragraph) = self.current_paragraph.as_mut() else {
            return;
        };
        match self.open_style.take() {
            Some(style) => {
                paragraph.push_span(TextSpan::styled(self.buffer.as_str(), style));
            }
            None => {
                if !self.buffer.trim().is_empty() {
                    paragraph.push_span(TextSpan::plain(self.buffer.as_str()));
                }
                self.open_style = event.tag_name().map(str::to_string);
            }
        }
        self.buffer.clear();
    }

    fn finish(self) -> Result<DocumentDto> {
        self.nesting.finish()?;
        log::debug!("reduced event stream to {} paragraphs", self.doc.paragraph_count());
        Ok(self.doc)
    }
}
