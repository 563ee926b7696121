//! Paragraph-level export.

use super::{deferred, style_fragment, Exporter, Scope};
use crate::markup::{filter_if_nonempty, merge_style_runs, Events, Tag};
use crate::model::{Inline, Paragraph};

const DEFAULT_HEADING_TAG: &str = "h6";

impl<'a> Exporter<'a> {
    /// A paragraph, dropped entirely when it holds no visible content.
    pub(super) fn paragraph(self, paragraph: &'a Paragraph, scope: Scope<'a>) -> Events<'a> {
        let scope = Scope {
            in_heading: paragraph.is_heading(),
            ..scope
        };
        deferred(move || {
            let children = self.inlines(&paragraph.children, scope);
            let children = justification(paragraph, children);
            let children = indentation(paragraph, children);

            let Some(children) = filter_if_nonempty(children) else {
                return Box::new(std::iter::empty());
            };
            let events: Events<'a> = match paragraph_tag(paragraph, scope) {
                Some(tag) => Box::new(tag.apply(children, true)),
                None => Box::new(children),
            };
            if self.options.merge_style_runs {
                Box::new(merge_style_runs(events))
            } else {
                events
            }
        })
    }

    pub(super) fn inlines(self, inlines: &'a [Inline], scope: Scope<'a>) -> Events<'a> {
        Box::new(inlines.iter().flat_map(move |inline| self.inline(inline, scope)))
    }

    fn inline(self, inline: &'a Inline, scope: Scope<'a>) -> Events<'a> {
        match inline {
            Inline::Run(run) => self.run(run, scope),
            Inline::Hyperlink { target, children } => {
                let link_scope = Scope {
                    suppress_underline: true,
                    ..scope
                };
                let content = self.inlines(children, link_scope);
                match target.as_deref().filter(|t| !t.is_empty()) {
                    Some(target) => Box::new(hyperlink_tag(target).apply(content, false)),
                    None => {
                        log::warn!("hyperlink without target, keeping its text only");
                        content
                    }
                }
            }
            Inline::InsertedRun { runs } => {
                let content = runs.iter().flat_map(move |run| self.run(run, scope));
                Box::new(
                    Tag::new("span")
                        .with_attr("class", "pydocx-insert")
                        .apply(content, true),
                )
            }
            Inline::FieldHyperlink { args, children } => {
                let content = self.inlines(children, scope);
                match field_hyperlink_target(args) {
                    Some(target) => Box::new(hyperlink_tag(&target).apply(content, true)),
                    None => content,
                }
            }
        }
    }
}

fn hyperlink_tag(target: &str) -> Tag {
    Tag::new("a").with_attr("href", target)
}

/// Target of a `HYPERLINK` field: first argument plus an optional `\l` bookmark.
fn field_hyperlink_target(args: &[String]) -> Option<String> {
    let (target, rest) = args.split_first()?;
    let mut bookmark = None;
    let mut bookmark_option = false;
    for arg in rest {
        if bookmark_option {
            bookmark = Some(arg.as_str());
        }
        if arg == "\\l" {
            bookmark_option = true;
        }
    }
    match bookmark {
        Some(bookmark) if bookmark_option => Some(format!("{}#{}", target, bookmark)),
        _ => Some(target.clone()),
    }
}

fn paragraph_tag(paragraph: &Paragraph, scope: Scope<'_>) -> Option<Tag> {
    if let Some(ref style) = paragraph.heading_style {
        return Some(heading_tag(style, scope));
    }
    if scope.in_table_cell || scope.in_content_control || scope.in_numbering_item {
        return None;
    }
    Some(Tag::new("p"))
}

fn heading_tag(style: &str, scope: Scope<'_>) -> Tag {
    // Headings inside list items are forced to bold.
    if scope.in_numbering_item {
        return Tag::new("strong");
    }
    let name = style
        .to_lowercase()
        .strip_prefix("heading ")
        .and_then(|level| level.trim().parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
        .map(|level| format!("h{}", level))
        .unwrap_or_else(|| DEFAULT_HEADING_TAG.to_string());
    Tag::new(name)
}

fn justification<'a>(paragraph: &Paragraph, children: Events<'a>) -> Events<'a> {
    match paragraph.justification.and_then(|j| j.class_name()) {
        Some(class) => Box::new(
            Tag::new("span")
                .with_attr("class", format!("pydocx-{}", class))
                .apply(children, false),
        ),
        None => children,
    }
}

fn indentation<'a>(paragraph: &Paragraph, children: Events<'a>) -> Events<'a> {
    let indentation = paragraph.indentation;
    let mut style = Vec::new();
    let mut push = |key: &'static str, value: Option<f32>| {
        if let Some(value) = value.filter(|v| *v != 0.0) {
            style.push((key, format!("{:.2}em", value)));
        }
    };
    push("margin-right", indentation.right);
    push("margin-left", indentation.left);
    push("text-indent", indentation.first_line);

    if style.is_empty() {
        return children;
    }
    let fragment = style_fragment(style.iter().map(|(k, v)| (*k, v.as_str())));
    Box::new(
        Tag::new("span")
            .with_attr("style", fragment)
            .apply(children, false),
    )
}
