//! Integration tests for template metadata extraction.

use undocx::dto::{DocumentDto, Metadata, Paragraph};
use undocx::markup::{MarkupEvent, Tag};
use undocx::model::{Document, Paragraph as SourceParagraph, Run};
use undocx::render::reduce_to_document;
use undocx::{CleanupPreset, Error, JsonFormat, Undocx};

const TEMPLATE: [&str; 7] = [
    "Originalskript",
    "My Talk",
    "Berlin, 2020-01-01",
    "Code: X1",
    "Typ: Lecture",
    "Kategorie: Self-help",
    "img.png",
];

fn paragraph_events(texts: &[&str]) -> Vec<MarkupEvent> {
    texts
        .iter()
        .flat_map(|text| Tag::new("p").apply(vec![MarkupEvent::text(*text)], true))
        .collect()
}

fn expected_metadata() -> Metadata {
    Metadata {
        id: "X1".to_string(),
        title: "My Talk".to_string(),
        date: "2020-01-01".to_string(),
        location: "Berlin".to_string(),
        doc_type: "Lecture".to_string(),
        category: "Self-help".to_string(),
        image: "img.png".to_string(),
    }
}

#[test]
fn test_template_scenario() {
    let mut doc = reduce_to_document(paragraph_events(&TEMPLATE)).unwrap();
    doc.extract_metadata().unwrap();

    assert_eq!(doc.metadata, Some(expected_metadata()));
    assert_eq!(doc.paragraph_count(), 0);
}

#[test]
fn test_body_paragraphs_kept_after_template() {
    let texts: Vec<&str> = TEMPLATE.iter().copied().chain(["First", "Second"]).collect();
    let mut doc = reduce_to_document(paragraph_events(&texts)).unwrap();
    doc.extract_metadata().unwrap();

    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(doc.plain_text(), "First\n\nSecond");
}

#[test]
fn test_underflow_leaves_document_unchanged() {
    let mut doc = reduce_to_document(paragraph_events(&TEMPLATE[..3])).unwrap();
    let before = doc.clone();

    let err = doc.extract_metadata().unwrap_err();
    assert_eq!(
        err,
        Error::Underflow {
            required: 7,
            available: 3
        }
    );
    assert_eq!(doc, before);
}

#[test]
fn test_missing_separator_fails_without_removal() {
    let mut texts = TEMPLATE;
    texts[2] = "Berlin 2020-01-01";
    let mut doc = reduce_to_document(paragraph_events(&texts)).unwrap();

    let err = doc.extract_metadata().unwrap_err();
    assert_eq!(err, Error::SplitFormat("Berlin 2020-01-01".to_string()));
    assert_eq!(doc.paragraph_count(), 7);
    assert!(doc.metadata.is_none());
}

#[test]
fn test_too_many_separators_fail() {
    let mut texts = TEMPLATE;
    texts[2] = "Berlin, Germany, 2020-01-01";
    let mut doc = reduce_to_document(paragraph_events(&texts)).unwrap();
    assert!(matches!(doc.extract_metadata(), Err(Error::SplitFormat(_))));
}

#[test]
fn test_styled_template_paragraphs_flatten() {
    let mut doc = DocumentDto::new();
    for text in TEMPLATE {
        doc.push_paragraph(Paragraph::with_text(text));
    }
    let mut title = Paragraph::new();
    title.push_span(undocx::TextSpan::plain("My "));
    title.push_span(undocx::TextSpan::styled("Talk", "strong"));
    doc.paragraphs[1] = title;

    doc.extract_metadata().unwrap();
    assert_eq!(doc.metadata.unwrap().title, "My Talk");
}

#[test]
fn test_document_to_json_with_metadata() {
    let mut source = Document::new();
    for text in TEMPLATE {
        source.add_paragraph(SourceParagraph::with_text(text));
    }
    source.add_paragraph(SourceParagraph::with_runs(vec![
        Run::text("Body  "),
        Run::bold("text"),
    ]));

    let undocx = Undocx::new().with_cleanup(CleanupPreset::Standard);
    let dto = undocx.reduce_to_dto(&source).unwrap();
    assert_eq!(dto.metadata, Some(expected_metadata()));
    assert_eq!(dto.paragraphs[0].spans[0].text, "Body ");

    let json = undocx.to_json(&source, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"type\":\"Lecture\""));
    assert!(json.contains("{\"text\":\"text\",\"style\":\"strong\"}"));
}
