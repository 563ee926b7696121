//! Integration tests for the export and rendering pipeline.

use undocx::markup::{filter_if_nonempty, merge_style_runs, names, MarkupEvent, Tag};
use undocx::model::{
    Document, Footnote, Inline, Node, NumberingItem, NumberingSpan, Paragraph, Run, RunContent,
    RunProperties, Table, TableCell, TableRow,
};
use undocx::render::{reduce_to_document, render_markup};
use undocx::{export_events, Error, ExportOptions, Undocx};

fn text(s: &str) -> MarkupEvent {
    MarkupEvent::text(s)
}

fn tag_depths(events: &[MarkupEvent]) -> Vec<usize> {
    let mut depth = 0usize;
    let mut depths = Vec::new();
    for event in events {
        match event {
            MarkupEvent::Open(tag) if !tag.is_self_closing() => depth += 1,
            MarkupEvent::Close { .. } => depth -= 1,
            _ => continue,
        }
        depths.push(depth);
    }
    depths
}

fn rich_document() -> Document {
    let mut doc = Document::new();
    doc.page_width = Some(612.0);
    doc.add_paragraph(Paragraph::heading("Title", "Heading 1"));
    doc.add_paragraph(Paragraph::with_runs(vec![
        Run::text("See "),
        Run::italic("this"),
        Run::with_children(vec![RunContent::FootnoteReference {
            footnote_id: "1".to_string(),
        }]),
    ]));

    let mut link = Paragraph::new();
    link.push(Inline::Hyperlink {
        target: Some("https://example.com".to_string()),
        children: vec![Inline::Run(Run::text("site"))],
    });
    doc.add_paragraph(link);

    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::new(vec![Node::Paragraph(Paragraph::with_text("a"))]),
        TableCell::new(vec![Node::Paragraph(Paragraph::with_text("b"))]),
    ]));
    doc.add_table(table);

    doc.push(Node::NumberingSpan(NumberingSpan::numbered(
        "decimal",
        vec![NumberingItem::new(vec![Node::Paragraph(Paragraph::with_text("item"))])],
    )));
    doc.add_footnote(Footnote::new(
        "1",
        vec![Node::Paragraph(Paragraph::with_runs(vec![
            Run::with_children(vec![RunContent::FootnoteReferenceMark]),
            Run::text(" note"),
        ]))],
    ));
    doc
}

#[test]
fn test_apply_nesting_returns_to_zero_once() {
    let inner = Tag::new("em").apply(vec![text("x")], true);
    let middle = Tag::new("strong").apply(inner.chain(vec![text(" y")]), false);
    let outer: Vec<_> = Tag::new("p").apply(middle, true).collect();

    let depths = tag_depths(&outer);
    assert_eq!(depths.iter().filter(|d| **d == 0).count(), 1);
    assert_eq!(depths.last(), Some(&0));
}

#[test]
fn test_exported_document_is_well_nested() {
    let events: Vec<_> = export_events(&rich_document(), ExportOptions::default()).collect();
    let depths = tag_depths(&events);
    assert_eq!(depths.iter().filter(|d| **d == 0).count(), 1);
    assert_eq!(depths.last(), Some(&0));
    assert!(render_markup(events).is_ok());
}

#[test]
fn test_rich_document_markup() {
    let html = Undocx::new().without_head().render_markup(&rich_document()).unwrap();
    assert_eq!(
        html,
        "<html><body>\
         <h1>Title</h1>\
         <p>See <em>this</em><a href=\"#footnote-1\" name=\"footnote-ref-1\">1</a></p>\
         <p><a href=\"https://example.com\">site</a></p>\
         <table border=\"1\"><tr><td>a</td><td>b</td></tr></table>\
         <ol class=\"pydocx-list-style-type-decimal\"><li>item</li></ol>\
         <hr /><ol class=\"pydocx-list-style-type-decimal\">\
         <li><p><a href=\"#footnote-ref-1\" name=\"footnote-1\">^</a> note</p></li></ol>\
         </body></html>"
    );
}

#[test]
fn test_emptiness_idempotence() {
    let events = vec![
        text(" "),
        Tag::new(names::BOLD).open(),
        text("\t"),
        text("word"),
        MarkupEvent::close(names::BOLD),
    ];
    let once: Vec<_> = filter_if_nonempty(events.into_iter()).unwrap().collect();
    let twice: Vec<_> = filter_if_nonempty(once.clone().into_iter()).unwrap().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_style_merge_confluence() {
    let events = vec![
        Tag::new("strong").open(),
        text("A"),
        MarkupEvent::close("strong"),
        Tag::new("strong").open(),
        text("B"),
        MarkupEvent::close("strong"),
    ];
    let merged: Vec<_> = merge_style_runs(events).collect();
    assert_eq!(
        merged,
        vec![
            Tag::new("strong").open(),
            text("A"),
            text("B"),
            MarkupEvent::close("strong"),
        ]
    );
}

#[test]
fn test_invisible_gap_without_reopen() {
    let events = vec![
        Tag::new("em").open(),
        text("A"),
        MarkupEvent::close("em"),
        text(" "),
        text("plain"),
    ];
    let merged: Vec<_> = merge_style_runs(events).collect();
    assert_eq!(
        merged,
        vec![
            Tag::new("em").open(),
            text("A"),
            text(" "),
            MarkupEvent::close("em"),
            text("plain"),
        ]
    );
}

#[test]
fn test_reducer_flush_on_paragraph_boundary() {
    let events = vec![
        Tag::new("p").open(),
        text("hi"),
        MarkupEvent::close("p"),
        Tag::new("p").open(),
        text("bye"),
        MarkupEvent::close("p"),
    ];
    let doc = reduce_to_document(events).unwrap();
    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(doc.paragraphs[0].to_text(), "hi");
    assert_eq!(doc.paragraphs[1].to_text(), "bye");
}

#[test]
fn test_reducer_rejects_unmatched_close() {
    let events = vec![Tag::new("p").open(), MarkupEvent::close("em")];
    assert!(matches!(
        reduce_to_document(events),
        Err(Error::MalformedEventStream(_))
    ));
}

#[test]
fn test_underline_only_outside_links() {
    let underline = RunProperties {
        underline: true,
        ..Default::default()
    };
    let mut paragraph = Paragraph::new();
    paragraph.push(Inline::Hyperlink {
        target: Some("#x".to_string()),
        children: vec![Inline::Run(Run::text("in").with_properties(underline.clone()))],
    });
    paragraph.push(Inline::Run(Run::text("out").with_properties(underline)));
    let mut doc = Document::new();
    doc.add_paragraph(paragraph);

    let html = Undocx::new().without_head().render_markup(&doc).unwrap();
    assert_eq!(
        html,
        "<html><body><p><a href=\"#x\">in</a>\
         <span class=\"pydocx-underline\">out</span></p></body></html>"
    );
}

#[test]
fn test_merge_can_be_disabled() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_runs(vec![Run::bold("A"), Run::bold("B")]));

    let merged = Undocx::new().without_head().render_markup(&doc).unwrap();
    let split = Undocx::new()
        .without_head()
        .with_style_merge(false)
        .render_markup(&doc)
        .unwrap();
    assert!(merged.contains("<strong>AB</strong>"));
    assert!(split.contains("<strong>A</strong><strong>B</strong>"));
}
