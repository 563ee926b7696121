//! Run-level export: character styles and run content.

use std::iter;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{block::line_break, deferred, Exporter, Scope};
use crate::markup::filter::split_leading_whitespace;
use crate::markup::{Events, MarkupEvent, Tag};
use crate::model::{Image, ImageSource, Run, RunContent, RunProperties, VerticalAlign};

/// Character styles in the order they wrap a run, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStyle {
    Caps,
    SmallCaps,
    Strike,
    DoubleStrike,
    Vanish,
    Hidden,
    VerticalAlign,
    Color,
    Bold,
    Italic,
    Underline,
}

impl RunStyle {
    const ORDER: [RunStyle; 11] = [
        RunStyle::Caps,
        RunStyle::SmallCaps,
        RunStyle::Strike,
        RunStyle::DoubleStrike,
        RunStyle::Vanish,
        RunStyle::Hidden,
        RunStyle::VerticalAlign,
        RunStyle::Color,
        RunStyle::Bold,
        RunStyle::Italic,
        RunStyle::Underline,
    ];

    fn is_set(self, properties: &RunProperties) -> bool {
        match self {
            RunStyle::Caps => properties.caps,
            RunStyle::SmallCaps => properties.small_caps,
            RunStyle::Strike => properties.strike,
            RunStyle::DoubleStrike => properties.dstrike,
            RunStyle::Vanish => properties.vanish,
            RunStyle::Hidden => properties.hidden,
            RunStyle::VerticalAlign => properties.vertical_align.is_some(),
            RunStyle::Color => properties.color.is_some(),
            RunStyle::Bold => properties.bold,
            RunStyle::Italic => properties.italic,
            RunStyle::Underline => properties.underline,
        }
    }

    /// Headings only keep italics and hidden text.
    fn allowed_in_heading(self) -> bool {
        matches!(self, RunStyle::Italic | RunStyle::Hidden | RunStyle::Vanish)
    }
}

fn class_span(class: &str) -> Tag {
    Tag::new("span").with_attr("class", class)
}

impl<'a> Exporter<'a> {
    pub(super) fn run(self, run: &'a Run, scope: Scope<'a>) -> Events<'a> {
        let mut results: Events<'a> = Box::new(
            run.children
                .iter()
                .flat_map(move |content| self.run_content(content, scope)),
        );

        for style in RunStyle::ORDER {
            if !style.is_set(&run.properties) {
                continue;
            }
            if scope.in_heading && !style.allowed_in_heading() {
                continue;
            }
            if style == RunStyle::Underline && scope.suppress_underline {
                continue;
            }
            results = apply_run_style(style, &run.properties, results);
        }
        results
    }

    fn run_content(self, content: &'a RunContent, scope: Scope<'a>) -> Events<'a> {
        match content {
            RunContent::Text { text } => text_event(text),
            RunContent::DeletedText { text } => {
                Box::new(class_span("pydocx-delete").apply(text_event(text), false))
            }
            RunContent::Break { page } => {
                let tag = if *page {
                    Tag::new("hr").self_closing().allow_whitespace()
                } else {
                    line_break()
                };
                Box::new(iter::once(tag.open()))
            }
            RunContent::TabChar => {
                let tab = class_span("pydocx-tab").allow_whitespace();
                Box::new(tab.apply(iter::once(MarkupEvent::text("\t")), true))
            }
            RunContent::Drawing(image) | RunContent::VmlImage(image) => self.image(image),
            RunContent::FootnoteReference { footnote_id } => {
                let link = Tag::new("a")
                    .with_attr("href", format!("#footnote-{}", footnote_id))
                    .with_attr("name", format!("footnote-ref-{}", footnote_id));
                Box::new(link.apply(iter::once(MarkupEvent::text(footnote_id.as_str())), false))
            }
            RunContent::FootnoteReferenceMark => match scope.footnote_id {
                Some(id) => {
                    let link = Tag::new("a")
                        .with_attr("href", format!("#footnote-ref-{}", id))
                        .with_attr("name", format!("footnote-{}", id));
                    Box::new(link.apply(iter::once(MarkupEvent::text("^")), true))
                }
                None => {
                    log::warn!("footnote reference mark outside a footnote, skipping");
                    Box::new(iter::empty())
                }
            },
        }
    }

    fn image(self, image: &'a Image) -> Events<'a> {
        let Some(src) = self.image_source(image) else {
            log::warn!("image without a resolvable source, skipping");
            return Box::new(iter::empty());
        };

        let mut tag = Tag::new("img")
            .with_attr("src", src)
            .self_closing()
            .allow_whitespace();
        if let (Some(width), Some(height)) = (image.width_px, image.height_px) {
            tag = tag
                .with_attr("width", format!("{}px", width))
                .with_attr("height", format!("{}px", height));
        }
        if let Some(degrees) = image.rotate.filter(|d| *d != 0.0) {
            tag = tag.with_attr("style", format!("transform: rotate({}deg);", degrees));
        }
        Box::new(iter::once(tag.open()))
    }

    fn image_source(self, image: &Image) -> Option<String> {
        let source = image.source.as_ref()?;
        match source {
            ImageSource::External { uri } => Some(uri.clone()),
            ImageSource::Embedded { filename, data } if self.options.image_data_uris => {
                let extension = source
                    .extension()
                    .unwrap_or_else(|| filename.to_lowercase());
                Some(format!(
                    "data:image/{};base64,{}",
                    extension,
                    STANDARD.encode(data)
                ))
            }
            ImageSource::Embedded { filename, .. } => Some(filename.clone()),
        }
    }
}

fn text_event<'a>(text: &'a str) -> Events<'a> {
    if text.is_empty() {
        Box::new(iter::empty())
    } else {
        Box::new(iter::once(MarkupEvent::text(text)))
    }
}

fn apply_run_style<'a>(style: RunStyle, properties: &RunProperties, results: Events<'a>) -> Events<'a> {
    let tag = match style {
        RunStyle::Caps => class_span("pydocx-caps"),
        RunStyle::SmallCaps => class_span("pydocx-small-caps"),
        RunStyle::Strike | RunStyle::DoubleStrike => class_span("pydocx-strike"),
        RunStyle::Vanish | RunStyle::Hidden => class_span("pydocx-hidden"),
        RunStyle::Underline => class_span("pydocx-underline"),
        RunStyle::Bold => Tag::new("strong"),
        RunStyle::Italic => Tag::new("em"),
        RunStyle::Color => match properties.color {
            Some(ref color) => Tag::new("span").with_attr("style", format!("color:#{}", color)),
            None => return results,
        },
        RunStyle::VerticalAlign => {
            let name = match properties.vertical_align {
                Some(VerticalAlign::Superscript) => "sup",
                Some(VerticalAlign::Subscript) => "sub",
                _ => return results,
            };
            return Box::new(Tag::new(name).apply(results, false));
        }
    };
    style_unless_leading_whitespace(tag, results)
}

/// Wrap `results` in `tag`, leaving any leading whitespace text unstyled.
fn style_unless_leading_whitespace<'a>(tag: Tag, results: Events<'a>) -> Events<'a> {
    deferred(move || {
        let (leading, rest) = split_leading_whitespace(results);
        let styled = rest.map(|rest| tag.apply(rest, true)).into_iter().flatten();
        Box::new(leading.into_iter().chain(styled))
    })
}
